// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Topic-level QoS policies (DDS v1.4 Sec.2.2.3).
//!
//! Only the shape of each policy lives here. Whether a combination is
//! acceptable is decided by [`TopicQos::validate`](super::TopicQos::validate).

use std::time::Duration;

/// Constant for an unlimited resource limit.
///
/// Stored as `usize::MAX` (DDS `LENGTH_UNLIMITED` is `-1` on the wire).
pub const LENGTH_UNLIMITED: usize = usize::MAX;

/// Reliability policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reliability {
    /// Fire-and-forget (no ACKs, no retransmission)
    BestEffort,
    /// Reliable delivery with NACK-driven retransmission (topic default)
    #[default]
    Reliable,
}

/// Durability policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Durability {
    /// No persistence
    #[default]
    Volatile,
    /// Writer caches samples for late-joiners
    TransientLocal,
    /// Samples outlive the writer, held by a durability service
    Transient,
    /// Samples are persisted to disk
    Persistent,
}

/// History policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum History {
    /// Keep last N samples per instance
    KeepLast(u32),
    /// Keep all samples within resource limits
    KeepAll,
}

impl Default for History {
    fn default() -> Self {
        Self::KeepLast(1)
    }
}

/// Resource limits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum total samples across all instances
    pub max_samples: usize,
    /// Maximum instances
    pub max_instances: usize,
    /// Maximum samples per instance
    pub max_samples_per_instance: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl ResourceLimits {
    /// No limit on any dimension.
    pub fn unlimited() -> Self {
        Self {
            max_samples: LENGTH_UNLIMITED,
            max_instances: LENGTH_UNLIMITED,
            max_samples_per_instance: LENGTH_UNLIMITED,
        }
    }
}

/// DURABILITY_SERVICE policy (DDS v1.4 Sec.2.2.3.5)
///
/// Only relevant when DURABILITY is TRANSIENT or PERSISTENT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurabilityService {
    /// Cleanup delay after all readers acknowledge
    pub service_cleanup_delay: Duration,
    /// History kind of the service cache
    pub history_kind: HistoryKind,
    /// KEEP_LAST depth of the service cache
    pub history_depth: u32,
    /// Limits of the service cache
    pub resource_limits: ResourceLimits,
}

impl Default for DurabilityService {
    fn default() -> Self {
        Self {
            service_cleanup_delay: Duration::ZERO,
            history_kind: HistoryKind::KeepLast,
            history_depth: 1,
            resource_limits: ResourceLimits::unlimited(),
        }
    }
}

/// History kind without depth, used by [`DurabilityService`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HistoryKind {
    #[default]
    KeepLast,
    KeepAll,
}

/// DEADLINE policy. Default: infinite (no enforcement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    /// Maximum time between samples
    pub period: Duration,
}

impl Default for Deadline {
    fn default() -> Self {
        Self::infinite()
    }
}

impl Deadline {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn infinite() -> Self {
        Self {
            period: Duration::MAX,
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.period == Duration::MAX
    }
}

/// LATENCY_BUDGET policy. Default: zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LatencyBudget {
    pub duration: Duration,
}

impl LatencyBudget {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

/// LIFESPAN policy. Default: infinite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lifespan {
    pub duration: Duration,
}

impl Default for Lifespan {
    fn default() -> Self {
        Self {
            duration: Duration::MAX,
        }
    }
}

impl Lifespan {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

/// Liveliness kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LivelinessKind {
    #[default]
    Automatic,
    ManualByParticipant,
    ManualByTopic,
}

/// LIVELINESS policy. Default: AUTOMATIC with infinite lease.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Liveliness {
    pub kind: LivelinessKind,
    pub lease_duration: Duration,
}

impl Default for Liveliness {
    fn default() -> Self {
        Self {
            kind: LivelinessKind::Automatic,
            lease_duration: Duration::MAX,
        }
    }
}

impl Liveliness {
    pub fn new(kind: LivelinessKind, lease_duration: Duration) -> Self {
        Self {
            kind,
            lease_duration,
        }
    }
}

/// DESTINATION_ORDER policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DestinationOrder {
    #[default]
    ByReceptionTimestamp,
    BySourceTimestamp,
}

/// OWNERSHIP policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ownership {
    /// Multiple writers can update the same instance (default)
    #[default]
    Shared,
    /// Only the highest-strength writer can publish
    Exclusive,
}

/// TRANSPORT_PRIORITY policy (higher = more important).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TransportPriority {
    pub value: i32,
}

/// TOPIC_DATA policy (DDS v1.4 Sec.2.2.3.19)
///
/// Opaque data attached to a Topic. Default: empty.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TopicData {
    pub value: Vec<u8>,
}

impl TopicData {
    pub fn new(value: Vec<u8>) -> Self {
        Self { value }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
