// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hdds-topic - Topic state for HDDS
//!
//! The state object behind a DDS Topic: its QoS, its listener, the
//! INCONSISTENT_TOPIC status and the writers/readers bound to it.
//!
//! ## Quick Start
//!
//! ```rust
//! use hdds_topic::{ClosureTopicListener, Participant, TopicQos, GUID};
//! use std::sync::Arc;
//!
//! fn main() -> hdds_topic::Result<()> {
//!     let participant = Participant::new("my_app", 0)?;
//!     let topic = participant.create_topic(
//!         "sensors/temperature",
//!         "Temperature",
//!         TopicQos::reliable().keep_last(10),
//!         Some(Arc::new(ClosureTopicListener::new(|topic, status| {
//!             eprintln!("{}: {} inconsistent declarations", topic.name, status.total_count);
//!         }))),
//!     )?;
//!
//!     // Discovery found a remote writer declaring another type on this name.
//!     topic.lock().report_inconsistent_topic(GUID::new([1; 12], [0, 0, 1, 0x02]));
//!     assert_eq!(topic.lock().get_inconsistent_topic_status().total_count, 1);
//!
//!     participant.delete_topic(&topic)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TopicImpl`] | Topic state: QoS, listener, status, rosters |
//! | [`Participant`] | Creates, finds and deletes topics |
//! | [`TopicQos`] | Topic QoS policies and their validation |
//! | [`TopicListener`] | Callback for inconsistent topic events |
//! | [`StatusCondition`] | Read/attach side of the topic status |
//!
//! ## Features
//!
//! - `qos-loaders` (default): YAML topic QoS profiles via
//!   [`dds::qos::loaders::YamlLoader`].

/// Identifiers (GUID, instance handles).
pub mod core;
/// Topic API.
pub mod dds;

pub use crate::core::{InstanceHandle, GUID};
pub use dds::{
    ClosureTopicListener, Condition, EntityRoster, Error, HasStatusCondition,
    InconsistentTopicStatus, Participant, Result, SharedTopic, StatusCondition, StatusMask,
    StatusObserver, TopicIdentity, TopicImpl, TopicListener, TopicQos, WaitsetSignal,
};
