// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test code readability over pedantic

//! Topic lifecycle integration tests
//!
//! QoS gate, roster registration, deletion and teardown ordering.

use hdds_topic::dds::qos::{Durability, History, ResourceLimits};
use hdds_topic::{
    ClosureTopicListener, Error, Participant, TopicListener, TopicQos, GUID,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

fn local(n: u8) -> GUID {
    GUID::new([0x10; 12], [0, 0, n, 0x03])
}

// ============================================================================
// QoS
// ============================================================================

#[test]
fn test_set_qos_gate() {
    let participant = Participant::new("qos", 0).expect("participant");
    let topic = participant
        .create_topic("t", "T", TopicQos::default(), None)
        .expect("topic");
    let mut t = topic.lock();

    let before = t.get_qos();
    assert_eq!(before, t.get_qos());

    let invalid = TopicQos::default()
        .keep_last(50)
        .resource_limits(ResourceLimits {
            max_samples: 100,
            max_instances: 2,
            max_samples_per_instance: 10,
        });
    match t.set_qos(invalid) {
        Err(Error::InconsistentPolicy(reason)) => assert!(reason.contains("KeepLast(50)")),
        other => panic!("expected InconsistentPolicy, got {:?}", other),
    }
    assert_eq!(t.get_qos(), before);

    let valid = TopicQos::reliable().transient_local().keep_last(10);
    t.set_qos(valid.clone()).expect("valid");
    assert_eq!(t.get_qos(), valid);
    assert_eq!(t.qos().durability, Durability::TransientLocal);
    assert_eq!(t.qos().history, History::KeepLast(10));
}

// ============================================================================
// Deletion
// ============================================================================

#[test]
fn test_delete_topic_refused_while_entities_bound() {
    let participant = Participant::new("rosters", 0).expect("participant");
    let topic = participant
        .create_topic("t", "T", TopicQos::default(), None)
        .expect("topic");

    topic.lock().writers().add(local(1));
    topic.lock().readers().add(local(2));

    assert!(matches!(
        participant.delete_topic(&topic),
        Err(Error::PreconditionNotMet(_))
    ));
    assert_eq!(participant.topic_count(), 1);

    topic.lock().writers().remove(&local(1));
    assert!(participant.delete_topic(&topic).is_err());

    topic.lock().readers().remove(&local(2));
    participant.delete_topic(&topic).expect("delete");
    assert_eq!(participant.topic_count(), 0);
    assert!(participant.find_topic("t").is_none());
}

#[test]
fn test_delete_topic_from_other_participant() {
    let owner = Participant::new("owner", 0).expect("owner");
    let other = Participant::new("other", 0).expect("other");
    let topic = owner
        .create_topic("t", "T", TopicQos::default(), None)
        .expect("topic");

    assert!(matches!(
        other.delete_topic(&topic),
        Err(Error::PreconditionNotMet(_))
    ));
    assert_eq!(owner.topic_count(), 1);
}

#[test]
fn test_delete_disables_listener_first() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_cb = Arc::clone(&calls);
    let listener: Arc<dyn TopicListener> = Arc::new(ClosureTopicListener::new(move |_, _| {
        calls_cb.fetch_add(1, Ordering::SeqCst);
    }));

    let participant = Participant::new("teardown", 0).expect("participant");
    let topic = participant
        .create_topic("t", "T", TopicQos::default(), Some(Arc::clone(&listener)))
        .expect("topic");

    topic.lock().report_inconsistent_topic(local(9));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    participant.delete_topic(&topic).expect("delete");

    // The caller still holds the topic; a late report must not notify.
    let mut t = topic.lock();
    assert!(t.get_listener().is_none());
    t.report_inconsistent_topic(local(9));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(t.get_inconsistent_topic_status().total_count, 2);
}

#[test]
fn test_recreate_after_delete() {
    let participant = Participant::new("recreate", 0).expect("participant");
    let first = participant
        .create_topic("t", "A", TopicQos::default(), None)
        .expect("first");
    participant.delete_topic(&first).expect("delete");

    let second = participant
        .create_topic("t", "B", TopicQos::best_effort(), None)
        .expect("second");
    assert_eq!(second.lock().type_name(), "B");
    assert_ne!(first.lock().guid(), second.lock().guid());
}

#[test]
fn test_delete_stale_handle_keeps_recreated_topic() {
    let participant = Participant::new("stale", 0).expect("participant");
    let first = participant
        .create_topic("t", "A", TopicQos::default(), None)
        .expect("first");
    participant.delete_topic(&first).expect("delete");

    let second = participant
        .create_topic("t", "B", TopicQos::default(), None)
        .expect("second");

    assert!(matches!(
        participant.delete_topic(&first),
        Err(Error::PreconditionNotMet(_))
    ));
    assert_eq!(participant.topic_count(), 1);
    let found = participant.find_topic("t").expect("still registered");
    assert!(Arc::ptr_eq(&found, &second));

    participant.delete_topic(&second).expect("delete second");
    assert_eq!(participant.topic_count(), 0);
}

#[test]
fn test_find_topic_under_topic_lock_during_delete() {
    let participant = Participant::new("locks", 0).expect("participant");
    let topic = participant
        .create_topic("t", "T", TopicQos::default(), None)
        .expect("topic");

    let (tx, rx) = mpsc::channel();
    let holder = {
        let participant = Arc::clone(&participant);
        let topic = Arc::clone(&topic);
        thread::spawn(move || {
            let guard = topic.lock();
            let deleter = {
                let participant = Arc::clone(&participant);
                let topic = Arc::clone(&topic);
                thread::spawn(move || participant.delete_topic(&topic))
            };
            // Let the deleter queue up behind the topic lock.
            thread::sleep(Duration::from_millis(50));
            let found = participant.find_topic("t").is_some();
            drop(guard);
            let _ = tx.send(found);
            deleter.join().expect("deleter thread")
        })
    };

    let found = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("find_topic blocked behind delete_topic");
    assert!(found);
    holder.join().expect("holder thread").expect("delete");
    assert_eq!(participant.topic_count(), 0);
}

#[test]
fn test_rosters_are_not_owned() {
    let participant = Participant::new("rosters", 0).expect("participant");
    let topic = participant
        .create_topic("t", "T", TopicQos::default(), None)
        .expect("topic");

    {
        let mut t = topic.lock();
        assert!(t.writers().add(local(1)));
        assert!(t.writers().add(local(2)));
        assert!(!t.writers().add(local(1)));
        assert!(!t.readers().remove(&local(7)));
        assert_eq!(t.writer_handles(), &[local(1), local(2)]);
    }

    // Dropping every handle to the topic leaves the entities' handles usable.
    let writers: Vec<GUID> = topic.lock().writer_handles().to_vec();
    drop(topic);
    drop(participant);
    assert_eq!(writers, vec![local(1), local(2)]);
}
