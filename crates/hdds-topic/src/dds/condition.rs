// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Status conditions - the read/attach side of topic status notification.
//!
//! A topic only needs two things from whatever polls its statuses: a way to
//! mark a status as read, and to know whether anybody is waiting on it. That
//! capability is [`StatusObserver`]. [`StatusCondition`] is the in-crate
//! implementation; wait-sets hook into it through [`WaitsetSignal`].

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Wake-up handle registered by a wait-set on a condition.
pub trait WaitsetSignal: Send + Sync {
    /// Notify the waitset that the associated condition became active.
    fn signal(&self);

    /// Stable identifier for this signal (per registration).
    fn id(&self) -> u64;
}

/// Condition trait - base interface for conditions attachable to wait-sets
pub trait Condition: Send + Sync {
    /// Get the current trigger value of this condition
    fn get_trigger_value(&self) -> bool;

    /// Get a unique identifier for this condition (for comparison)
    fn condition_id(&self) -> u64;

    /// Register a waitset signal so this condition can wake blocked waiters.
    fn add_waitset_signal(&self, signal: Arc<dyn WaitsetSignal>);

    /// Remove a previously registered waitset signal.
    fn remove_waitset_signal(&self, signal_id: u64);
}

/// Status mask bits (DDS v1.4 Sec.2.2.4.1, communication status)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMask(u32);

impl StatusMask {
    /// No status enabled
    pub const NONE: StatusMask = StatusMask(0);

    /// All statuses enabled
    pub const ALL: StatusMask = StatusMask(0xFFFF_FFFF);

    /// Inconsistent topic (Topic)
    pub const INCONSISTENT_TOPIC: StatusMask = StatusMask(1 << 0);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        StatusMask(bits)
    }

    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Check if this mask contains the given status
    #[must_use]
    pub const fn contains(&self, other: StatusMask) -> bool {
        (self.0 & other.0) == other.0
    }

    #[must_use]
    pub const fn or(self, other: StatusMask) -> Self {
        StatusMask(self.0 | other.0)
    }

    #[must_use]
    pub const fn and(self, other: StatusMask) -> Self {
        StatusMask(self.0 & other.0)
    }

    #[must_use]
    pub const fn without(self, other: StatusMask) -> Self {
        StatusMask(self.0 & !other.0)
    }
}

impl std::ops::BitOr for StatusMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl std::ops::BitAnd for StatusMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

/// What a topic needs from the status polling machinery.
pub trait StatusObserver: Send + Sync {
    /// A status changed and has unread data.
    fn mark_triggered(&self, mask: StatusMask) {
        let _ = mask;
    }

    /// The status was read; its unread flag is cleared.
    fn mark_read(&self, mask: StatusMask);

    /// Whether some waiter is currently attached to this observer.
    fn is_attached(&self) -> bool;
}

/// StatusCondition - condition based on Entity communication status
///
/// Per DDS v1.4 spec section 2.2.4.1.4:
/// "A StatusCondition object is associated with each Entity. The trigger_value
/// is determined by the communication statuses of that Entity."
pub struct StatusCondition {
    id: u64,
    enabled_statuses: Mutex<StatusMask>,
    active_statuses: Mutex<StatusMask>,
    waitset_signals: Mutex<Vec<WaitsetHook>>,
}

struct WaitsetHook {
    id: u64,
    signal: Weak<dyn WaitsetSignal>,
}

impl StatusCondition {
    /// Create a new StatusCondition monitoring every status.
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

        Self {
            id,
            enabled_statuses: Mutex::new(StatusMask::ALL),
            active_statuses: Mutex::new(StatusMask::NONE),
            waitset_signals: Mutex::new(Vec::new()),
        }
    }

    /// Set which statuses this condition should monitor
    pub fn set_enabled_statuses(&self, mask: StatusMask) {
        *self.enabled_statuses.lock() = mask;

        if self.get_trigger_value() {
            self.notify_waitsets();
        }
    }

    pub fn get_enabled_statuses(&self) -> StatusMask {
        *self.enabled_statuses.lock()
    }

    pub fn get_active_statuses(&self) -> StatusMask {
        *self.active_statuses.lock()
    }

    fn notify_waitsets(&self) {
        let mut hooks = self.waitset_signals.lock();
        hooks.retain(|hook| {
            if let Some(signal) = hook.signal.upgrade() {
                signal.signal();
                true
            } else {
                false
            }
        });
    }
}

impl Default for StatusCondition {
    fn default() -> Self {
        Self::new()
    }
}

impl Condition for StatusCondition {
    fn get_trigger_value(&self) -> bool {
        // Trigger is true if any enabled status is active
        self.get_enabled_statuses()
            .and(self.get_active_statuses())
            .bits()
            != 0
    }

    fn condition_id(&self) -> u64 {
        self.id
    }

    fn add_waitset_signal(&self, signal: Arc<dyn WaitsetSignal>) {
        {
            let mut hooks = self.waitset_signals.lock();
            hooks.retain(|hook| hook.signal.upgrade().is_some());
            log::debug!(
                "[STATUS-CONDITION] attach signal id={} cond_id={}",
                signal.id(),
                self.id
            );
            hooks.push(WaitsetHook {
                id: signal.id(),
                signal: Arc::downgrade(&signal),
            });
        }

        if self.get_trigger_value() {
            signal.signal();
        }
    }

    fn remove_waitset_signal(&self, signal_id: u64) {
        self.waitset_signals
            .lock()
            .retain(|hook| hook.id != signal_id);
    }
}

impl StatusObserver for StatusCondition {
    fn mark_triggered(&self, mask: StatusMask) {
        let enabled = self.get_enabled_statuses();
        {
            let mut active = self.active_statuses.lock();
            *active = active.or(mask);
        }

        if enabled.and(mask).bits() != 0 {
            self.notify_waitsets();
        }
    }

    fn mark_read(&self, mask: StatusMask) {
        let mut active = self.active_statuses.lock();
        *active = active.without(mask);
    }

    fn is_attached(&self) -> bool {
        self.waitset_signals
            .lock()
            .iter()
            .any(|hook| hook.signal.strong_count() > 0)
    }
}

/// Trait for entities that have a StatusCondition.
pub trait HasStatusCondition {
    /// Get the StatusCondition associated with this entity.
    fn get_status_condition(&self) -> Arc<StatusCondition>;
}

#[cfg(test)]
mod tests;
