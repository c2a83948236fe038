// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Topic Listener
//!
//! Listeners provide callback-based notification for topic events.
//! This is an alternative to polling
//! [`TopicImpl::get_inconsistent_topic_status`](crate::TopicImpl::get_inconsistent_topic_status).
//!
//! # Usage
//!
//! ```
//! use hdds_topic::{ClosureTopicListener, TopicListener};
//! use std::sync::Arc;
//!
//! let listener: Arc<dyn TopicListener> = Arc::new(ClosureTopicListener::new(|topic, status| {
//!     println!("{} inconsistent ({} total)", topic.name, status.total_count);
//! }));
//! ```
//!
//! # Thread Safety
//!
//! Callbacks run synchronously inside the report that triggered them, while
//! the topic is still locked. They must be `Send + Sync`, should return quickly
//! and must not call back into the same topic.
//!
//! # DDS Specification
//!
//! See DDS v1.4 Section 2.2.4 - Listeners, Conditions, and Wait-sets.

use crate::dds::topic::TopicIdentity;

/// Status information for inconsistent topic events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InconsistentTopicStatus {
    /// Total cumulative count of inconsistent topic reports.
    pub total_count: u32,
    /// Change in total_count since the status was last read.
    pub total_count_change: u32,
}

/// Listener for Topic events.
///
/// The method has a default no-op implementation.
///
/// # Example
///
/// ```ignore
/// struct Audit;
///
/// impl TopicListener for Audit {
///     fn on_inconsistent_topic(&self, topic: &TopicIdentity, status: InconsistentTopicStatus) {
///         log::warn!("{} seen with another type/QoS ({}x)", topic.name, status.total_count);
///     }
/// }
/// ```
pub trait TopicListener: Send + Sync {
    /// Called when a remote entity declared this topic with an incompatible
    /// type or QoS.
    ///
    /// # Arguments
    ///
    /// * `topic` - Identity of the local topic
    /// * `status` - Counters already including the triggering report
    fn on_inconsistent_topic(&self, topic: &TopicIdentity, status: InconsistentTopicStatus) {
        let _ = (topic, status);
    }
}

/// Closure-based topic listener.
pub struct ClosureTopicListener<F>
where
    F: Fn(&TopicIdentity, InconsistentTopicStatus) + Send + Sync,
{
    callback: F,
}

impl<F> ClosureTopicListener<F>
where
    F: Fn(&TopicIdentity, InconsistentTopicStatus) + Send + Sync,
{
    /// Create a new closure-based listener.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> TopicListener for ClosureTopicListener<F>
where
    F: Fn(&TopicIdentity, InconsistentTopicStatus) + Send + Sync,
{
    fn on_inconsistent_topic(&self, topic: &TopicIdentity, status: InconsistentTopicStatus) {
        (self.callback)(topic, status);
    }
}
