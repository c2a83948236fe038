// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # DDS Topic state
//!
//! [`TopicImpl`] is the state behind a Topic entity:
//! - its QoS, replaced only by values that pass [`TopicQos::validate`]
//! - an optional [`TopicListener`]
//! - the INCONSISTENT_TOPIC status and the handles that caused it
//! - the rosters of local writers and readers bound to the topic
//!
//! ## Synchronization
//!
//! `TopicImpl` has no lock of its own. Mutation goes through `&mut self`, and
//! the owning [`Participant`] shares each topic as a [`SharedTopic`]
//! (`Arc<Mutex<TopicImpl>>`), so one lock serializes reports, polls, QoS
//! updates, listener swaps and roster changes.
//!
//! ## Example
//!
//! ```
//! use hdds_topic::{GUID, TopicIdentity, TopicImpl, TopicQos};
//!
//! let identity = TopicIdentity::new("sensors/temperature", "Temperature", GUID::zero());
//! let mut topic = TopicImpl::new(identity, TopicQos::default(), None);
//!
//! let remote = GUID::new([1; 12], [0, 0, 1, 0x02]);
//! topic.report_inconsistent_topic(remote);
//! topic.report_inconsistent_topic(remote);
//!
//! let status = topic.get_inconsistent_topic_status();
//! assert_eq!((status.total_count, status.total_count_change), (2, 2));
//! assert_eq!(topic.get_inconsistent_topic_status().total_count_change, 0);
//! assert!(topic.is_entity_already_checked(&remote));
//! ```

use crate::core::{InstanceHandle, GUID};
use crate::dds::condition::{HasStatusCondition, StatusCondition, StatusMask, StatusObserver};
use crate::dds::listener::{InconsistentTopicStatus, TopicListener};
use crate::dds::participant::Participant;
use crate::dds::qos::TopicQos;
use crate::dds::roster::EntityRoster;
use crate::dds::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::{Arc, Weak};

/// A topic shared under its single synchronization domain.
pub type SharedTopic = Arc<Mutex<TopicImpl>>;

/// Logical identity of a topic, handed to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicIdentity {
    pub name: String,
    pub type_name: String,
    pub guid: GUID,
}

impl TopicIdentity {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, guid: GUID) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            guid,
        }
    }
}

/// Internal state of a Topic entity.
pub struct TopicImpl {
    identity: TopicIdentity,
    qos: TopicQos,
    listener: Option<Arc<dyn TopicListener>>,
    status: InconsistentTopicStatus,
    /// Every remote entity ever reported, first report first. Never evicted.
    reported_handles: Vec<InstanceHandle>,
    reported_index: HashSet<InstanceHandle>,
    writers: EntityRoster,
    readers: EntityRoster,
    participant: Weak<Participant>,
    status_condition: Arc<StatusCondition>,
}

impl TopicImpl {
    /// Create a topic state not attached to any participant.
    ///
    /// `qos` is stored as given; [`Participant::create_topic`] validates it first.
    pub fn new(
        identity: TopicIdentity,
        qos: TopicQos,
        listener: Option<Arc<dyn TopicListener>>,
    ) -> Self {
        Self {
            identity,
            qos,
            listener,
            status: InconsistentTopicStatus::default(),
            reported_handles: Vec::new(),
            reported_index: HashSet::new(),
            writers: EntityRoster::new(),
            readers: EntityRoster::new(),
            participant: Weak::new(),
            status_condition: Arc::new(StatusCondition::new()),
        }
    }

    pub(crate) fn with_participant(mut self, participant: Weak<Participant>) -> Self {
        self.participant = participant;
        self
    }

    /// Name, type name and GUID, as handed to listeners.
    pub fn identity(&self) -> &TopicIdentity {
        &self.identity
    }

    /// Topic name, unique within the owning participant.
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Registered type name.
    pub fn type_name(&self) -> &str {
        &self.identity.type_name
    }

    /// Topic GUID (user topic entity kind when created by a participant).
    pub fn guid(&self) -> GUID {
        self.identity.guid
    }

    // ------------------------------------------------------------------
    // QoS
    // ------------------------------------------------------------------

    /// Current QoS, by value.
    pub fn get_qos(&self) -> TopicQos {
        self.qos.clone()
    }

    /// Current QoS, borrowed.
    pub fn qos(&self) -> &TopicQos {
        &self.qos
    }

    /// Replace the QoS if `qos` is consistent.
    ///
    /// # Errors
    ///
    /// [`Error::InconsistentPolicy`] when `qos` fails validation; the stored
    /// QoS is left untouched.
    pub fn set_qos(&mut self, qos: TopicQos) -> Result<()> {
        if let Err(reason) = qos.validate() {
            log::warn!(
                "[topic] '{}' rejected QoS update: {}",
                self.identity.name,
                reason
            );
            return Err(Error::InconsistentPolicy(reason));
        }
        self.qos = qos;
        log::debug!("[topic] '{}' QoS updated", self.identity.name);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Listener
    // ------------------------------------------------------------------

    /// Listener currently installed, if any.
    pub fn get_listener(&self) -> Option<Arc<dyn TopicListener>> {
        self.listener.clone()
    }

    /// Replace (or clear, with `None`) the listener. Takes effect for the next report.
    pub fn set_listener(&mut self, listener: Option<Arc<dyn TopicListener>>) {
        log::debug!(
            "[topic] '{}' listener {}",
            self.identity.name,
            if listener.is_some() { "set" } else { "cleared" }
        );
        self.listener = listener;
    }

    /// Stop listener notification. First step of teardown.
    pub fn disable(&mut self) {
        self.set_listener(None);
    }

    // ------------------------------------------------------------------
    // Owner and rosters
    // ------------------------------------------------------------------

    /// The participant that created this topic, if it is still alive.
    pub fn get_participant(&self) -> Option<Arc<Participant>> {
        self.participant.upgrade()
    }

    pub(crate) fn belongs_to(&self, participant: &Participant) -> bool {
        std::ptr::eq(self.participant.as_ptr(), participant)
    }

    /// Writers bound to this topic, for registration by the publisher side.
    pub fn writers(&mut self) -> &mut EntityRoster {
        &mut self.writers
    }

    /// Readers bound to this topic, for registration by the subscriber side.
    pub fn readers(&mut self) -> &mut EntityRoster {
        &mut self.readers
    }

    /// Bound writers in registration order.
    pub fn writer_handles(&self) -> &[InstanceHandle] {
        self.writers.handles()
    }

    /// Bound readers in registration order.
    pub fn reader_handles(&self) -> &[InstanceHandle] {
        self.readers.handles()
    }

    /// True while any writer or reader is still bound.
    pub fn has_entities(&self) -> bool {
        !self.writers.is_empty() || !self.readers.is_empty()
    }

    // ------------------------------------------------------------------
    // INCONSISTENT_TOPIC status
    // ------------------------------------------------------------------

    /// Record that remote entity `handle` declared this topic inconsistently.
    ///
    /// Both counters move on every call, repeated handles included. The
    /// listener, if any, sees the counters with this report applied. If no
    /// waiter is attached to the status condition afterwards, the change
    /// counter is consumed by the listener and reset. The condition stays
    /// triggered until the next poll.
    pub fn report_inconsistent_topic(&mut self, handle: InstanceHandle) {
        self.status.total_count = self.status.total_count.saturating_add(1);
        self.status.total_count_change = self.status.total_count_change.saturating_add(1);

        if self.reported_index.insert(handle) {
            self.reported_handles.push(handle);
        }

        log::debug!(
            "[topic] '{}' inconsistent with {} (total={}, change={})",
            self.identity.name,
            handle,
            self.status.total_count,
            self.status.total_count_change
        );

        self.status_condition
            .mark_triggered(StatusMask::INCONSISTENT_TOPIC);

        if let Some(listener) = self.listener.clone() {
            listener.on_inconsistent_topic(&self.identity, self.status);
            if !self.status_condition.is_attached() {
                self.status.total_count_change = 0;
            }
        }
    }

    /// Read the status and reset `total_count_change`.
    pub fn get_inconsistent_topic_status(&mut self) -> InconsistentTopicStatus {
        let status = self.status;
        self.status.total_count_change = 0;
        self.status_condition
            .mark_read(StatusMask::INCONSISTENT_TOPIC);
        status
    }

    /// Whether `handle` was ever reported through [`Self::report_inconsistent_topic`].
    pub fn is_entity_already_checked(&self, handle: &InstanceHandle) -> bool {
        self.reported_index.contains(handle)
    }

    /// Reported handles in first-report order.
    pub fn reported_handles(&self) -> &[InstanceHandle] {
        &self.reported_handles
    }
}

impl HasStatusCondition for TopicImpl {
    fn get_status_condition(&self) -> Arc<StatusCondition> {
        Arc::clone(&self.status_condition)
    }
}

impl Drop for TopicImpl {
    fn drop(&mut self) {
        // Listener goes first so nothing can be notified mid-teardown.
        self.disable();
        log::debug!(
            "[topic] '{}' destroyed ({} writers, {} readers left unowned)",
            self.identity.name,
            self.writers.len(),
            self.readers.len()
        );
    }
}

impl std::fmt::Debug for TopicImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopicImpl")
            .field("identity", &self.identity)
            .field("qos", &self.qos)
            .field("has_listener", &self.listener.is_some())
            .field("status", &self.status)
            .field("reported_handles", &self.reported_handles.len())
            .field("writers", &self.writers.len())
            .field("readers", &self.readers.len())
            .finish()
    }
}
