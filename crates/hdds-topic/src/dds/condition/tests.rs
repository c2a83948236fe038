// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use std::sync::atomic::AtomicUsize;

struct CountingSignal {
    id: u64,
    hits: AtomicUsize,
}

impl CountingSignal {
    fn new(id: u64) -> Arc<Self> {
        Arc::new(Self {
            id,
            hits: AtomicUsize::new(0),
        })
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl WaitsetSignal for CountingSignal {
    fn signal(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    fn id(&self) -> u64 {
        self.id
    }
}

#[test]
fn test_status_mask_bits() {
    assert_eq!(StatusMask::NONE.bits(), 0);
    assert_eq!(StatusMask::INCONSISTENT_TOPIC.bits(), 1);
    assert_eq!(StatusMask::from_bits(1), StatusMask::INCONSISTENT_TOPIC);
}

#[test]
fn test_status_mask_ops() {
    let other = StatusMask::from_bits(1 << 4);
    let mask = StatusMask::INCONSISTENT_TOPIC | other;
    assert!(mask.contains(StatusMask::INCONSISTENT_TOPIC));
    assert!(mask.contains(other));
    assert_eq!(mask & other, other);
    assert_eq!(mask.without(other), StatusMask::INCONSISTENT_TOPIC);
}

#[test]
fn test_status_condition_default() {
    let cond = StatusCondition::new();
    assert!(!cond.get_trigger_value());
    assert_eq!(cond.get_enabled_statuses(), StatusMask::ALL);
    assert_eq!(cond.get_active_statuses(), StatusMask::NONE);
    assert!(!cond.is_attached());
}

#[test]
fn test_status_condition_trigger_and_read() {
    let cond = StatusCondition::new();

    cond.mark_triggered(StatusMask::INCONSISTENT_TOPIC);
    assert!(cond.get_trigger_value());

    cond.mark_read(StatusMask::INCONSISTENT_TOPIC);
    assert!(!cond.get_trigger_value());
}

#[test]
fn test_status_condition_disabled_status_does_not_trigger() {
    let cond = StatusCondition::new();
    cond.set_enabled_statuses(StatusMask::NONE);

    cond.mark_triggered(StatusMask::INCONSISTENT_TOPIC);
    assert!(!cond.get_trigger_value());
    assert!(cond
        .get_active_statuses()
        .contains(StatusMask::INCONSISTENT_TOPIC));
}

#[test]
fn test_attach_detach_signal() {
    let cond = StatusCondition::new();
    let signal = CountingSignal::new(7);

    cond.add_waitset_signal(signal.clone());
    assert!(cond.is_attached());
    assert_eq!(signal.hits(), 0);

    cond.mark_triggered(StatusMask::INCONSISTENT_TOPIC);
    assert_eq!(signal.hits(), 1);

    cond.remove_waitset_signal(7);
    assert!(!cond.is_attached());

    cond.mark_triggered(StatusMask::INCONSISTENT_TOPIC);
    assert_eq!(signal.hits(), 1);
}

#[test]
fn test_attach_to_triggered_condition_signals_immediately() {
    let cond = StatusCondition::new();
    cond.mark_triggered(StatusMask::INCONSISTENT_TOPIC);

    let signal = CountingSignal::new(1);
    cond.add_waitset_signal(signal.clone());
    assert_eq!(signal.hits(), 1);
}

#[test]
fn test_dropped_signal_is_not_attached() {
    let cond = StatusCondition::new();
    let signal = CountingSignal::new(3);
    cond.add_waitset_signal(signal.clone());
    assert!(cond.is_attached());

    drop(signal);
    assert!(!cond.is_attached());
}

#[test]
fn test_condition_ids_unique() {
    let cond1 = StatusCondition::new();
    let cond2 = StatusCondition::new();
    assert_ne!(cond1.condition_id(), cond2.condition_id());
}
