// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Topic factory side of a DomainParticipant.
//!
//! Only what the topic lifecycle needs: create a topic with a validated QoS,
//! look it up by name, and delete it (listener off first, rosters untouched).

use crate::core::GUID;
use crate::dds::listener::TopicListener;
use crate::dds::qos::TopicQos;
use crate::dds::topic::{SharedTopic, TopicIdentity, TopicImpl};
use crate::dds::{Error, Result};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Maximum domain ID per DDS specification (RTPS v2.3 Sec.9.6.1.1)
pub const MAX_DOMAIN_ID: u32 = 232;

/// Owner of a set of topics within one domain.
pub struct Participant {
    name: String,
    domain_id: u32,
    guid_prefix: [u8; 12],
    topics: RwLock<HashMap<String, SharedTopic>>,
    next_topic_key: AtomicU32,
}

impl Participant {
    /// Create a participant in `domain_id`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDomainId`] when `domain_id > 232`.
    pub fn new(name: impl Into<String>, domain_id: u32) -> Result<Arc<Self>> {
        if domain_id > MAX_DOMAIN_ID {
            return Err(Error::InvalidDomainId(domain_id));
        }
        let name = name.into();
        let guid_prefix = guid_prefix_for(&name, domain_id);
        log::debug!(
            "[participant] '{}' created in domain {} (prefix {:02x?})",
            name,
            domain_id,
            guid_prefix
        );
        Ok(Arc::new(Self {
            name,
            domain_id,
            guid_prefix,
            topics: RwLock::new(HashMap::new()),
            next_topic_key: AtomicU32::new(1),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_id(&self) -> u32 {
        self.domain_id
    }

    pub fn guid_prefix(&self) -> [u8; 12] {
        self.guid_prefix
    }

    /// Create a topic named `name` carrying `type_name`.
    ///
    /// # Errors
    ///
    /// - [`Error::InconsistentPolicy`] if `qos` fails validation
    /// - [`Error::PreconditionNotMet`] if a topic with that name already exists
    pub fn create_topic(
        self: &Arc<Self>,
        name: &str,
        type_name: &str,
        qos: TopicQos,
        listener: Option<Arc<dyn TopicListener>>,
    ) -> Result<SharedTopic> {
        qos.validate().map_err(Error::InconsistentPolicy)?;

        let mut topics = self.topics.write();
        if topics.contains_key(name) {
            return Err(Error::PreconditionNotMet(format!(
                "topic '{}' already exists",
                name
            )));
        }

        let key = self.next_topic_key.fetch_add(1, Ordering::Relaxed);
        let guid = GUID::user_topic(self.guid_prefix, key);
        let topic = TopicImpl::new(TopicIdentity::new(name, type_name, guid), qos, listener)
            .with_participant(Arc::downgrade(self));
        let shared: SharedTopic = Arc::new(Mutex::new(topic));
        topics.insert(name.to_string(), Arc::clone(&shared));

        log::debug!(
            "[participant] '{}' created topic '{}' ({}) guid={}",
            self.name,
            name,
            type_name,
            guid
        );
        Ok(shared)
    }

    /// Registered topic named `name`.
    pub fn find_topic(&self, name: &str) -> Option<SharedTopic> {
        self.topics.read().get(name).cloned()
    }

    /// Number of registered topics.
    pub fn topic_count(&self) -> usize {
        self.topics.read().len()
    }

    /// Delete a topic created by this participant.
    ///
    /// The listener is cleared before the topic is unregistered. The topic's
    /// memory is released once the caller drops its last handle.
    ///
    /// Locks are taken topic first, then registry, the same order as a
    /// listener calling [`Self::find_topic`] from inside its callback.
    ///
    /// # Errors
    ///
    /// [`Error::PreconditionNotMet`] if the topic belongs to another
    /// participant, was already deleted, or still has writers or readers
    /// bound to it.
    pub fn delete_topic(&self, topic: &SharedTopic) -> Result<()> {
        let mut state = topic.lock();

        if !state.belongs_to(self) {
            return Err(Error::PreconditionNotMet(format!(
                "topic '{}' does not belong to participant '{}'",
                state.name(),
                self.name
            )));
        }
        if state.has_entities() {
            log::warn!(
                "[participant] refusing to delete topic '{}': {} writers, {} readers still bound",
                state.name(),
                state.writer_handles().len(),
                state.reader_handles().len()
            );
            return Err(Error::PreconditionNotMet(format!(
                "topic '{}' still has writers or readers",
                state.name()
            )));
        }

        let mut topics = self.topics.write();
        let registered = topics
            .get(state.name())
            .is_some_and(|entry| Arc::ptr_eq(entry, topic));
        if !registered {
            return Err(Error::PreconditionNotMet(format!(
                "topic '{}' is not registered with participant '{}'",
                state.name(),
                self.name
            )));
        }

        state.disable();
        topics.remove(state.name());
        log::debug!(
            "[participant] '{}' deleted topic '{}'",
            self.name,
            state.name()
        );
        Ok(())
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("domain_id", &self.domain_id)
            .field("topics", &self.topic_count())
            .finish()
    }
}

/// Deterministic prefix: FNV-1a of name and domain, little-endian into 12 bytes.
fn guid_prefix_for(name: &str, domain_id: u32) -> [u8; 12] {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes().chain(domain_id.to_le_bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    let mut prefix = [0u8; 12];
    prefix[0..8].copy_from_slice(&hash.to_le_bytes());
    prefix[8..12].copy_from_slice(&domain_id.to_be_bytes());
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ENTITY_KIND_USER_TOPIC;

    #[test]
    fn test_invalid_domain() {
        assert!(matches!(
            Participant::new("p", 233),
            Err(Error::InvalidDomainId(233))
        ));
        assert!(Participant::new("p", MAX_DOMAIN_ID).is_ok());
    }

    #[test]
    fn test_create_and_find_topic() {
        let participant = Participant::new("app", 0).expect("participant");
        let topic = participant
            .create_topic("sensors", "SensorData", TopicQos::default(), None)
            .expect("topic");

        let found = participant.find_topic("sensors").expect("registered");
        assert!(Arc::ptr_eq(&topic, &found));
        assert!(participant.find_topic("missing").is_none());

        let state = topic.lock();
        assert_eq!(state.type_name(), "SensorData");
        assert_eq!(state.guid().prefix, participant.guid_prefix());
        assert_eq!(state.guid().entity_kind(), ENTITY_KIND_USER_TOPIC);
        let owner = state.get_participant().expect("owner alive");
        assert_eq!(owner.name(), "app");
    }

    #[test]
    fn test_create_topic_rejects_bad_qos_and_duplicates() {
        let participant = Participant::new("app", 0).expect("participant");
        let bad = participant.create_topic("t", "T", TopicQos::default().keep_last(0), None);
        assert!(matches!(bad, Err(Error::InconsistentPolicy(_))));
        assert_eq!(participant.topic_count(), 0);

        participant
            .create_topic("t", "T", TopicQos::default(), None)
            .expect("first");
        let dup = participant.create_topic("t", "T", TopicQos::default(), None);
        assert!(matches!(dup, Err(Error::PreconditionNotMet(_))));
    }

    #[test]
    fn test_topic_guids_are_distinct() {
        let participant = Participant::new("app", 3).expect("participant");
        let a = participant
            .create_topic("a", "T", TopicQos::default(), None)
            .expect("a");
        let b = participant
            .create_topic("b", "T", TopicQos::default(), None)
            .expect("b");
        assert_ne!(a.lock().guid(), b.lock().guid());
    }

    #[test]
    fn test_prefix_is_deterministic() {
        assert_eq!(guid_prefix_for("app", 1), guid_prefix_for("app", 1));
        assert_ne!(guid_prefix_for("app", 1), guid_prefix_for("app", 2));
        assert_ne!(guid_prefix_for("app", 1), guid_prefix_for("ppa", 1));
    }

    #[test]
    fn test_back_reference_does_not_keep_participant_alive() {
        let participant = Participant::new("app", 0).expect("participant");
        let topic = participant
            .create_topic("t", "T", TopicQos::default(), None)
            .expect("topic");
        drop(participant);
        // The registry owned the only other handle; the participant is gone.
        assert!(topic.lock().get_participant().is_none());
    }
}
