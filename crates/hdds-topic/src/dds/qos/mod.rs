// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Topic QoS.
//!
//! [`TopicQos`] is the value stored by a topic. It is validated as a whole by
//! [`TopicQos::validate`] before a topic ever commits it.
//!
//! # Example
//!
//! ```
//! use hdds_topic::TopicQos;
//!
//! let qos = TopicQos::reliable().transient_local().keep_last(16);
//! assert!(qos.validate().is_ok());
//!
//! assert!(TopicQos::default().keep_last(0).validate().is_err());
//! ```

mod policies;

#[cfg(feature = "qos-loaders")]
pub mod loaders;

pub use policies::{
    Deadline, DestinationOrder, Durability, DurabilityService, History, HistoryKind,
    LatencyBudget, Lifespan, Liveliness, LivelinessKind, Ownership, ResourceLimits, Reliability,
    TopicData, TransportPriority, LENGTH_UNLIMITED,
};

use std::time::Duration;

/// Collection of policies attached to a Topic.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TopicQos {
    pub topic_data: TopicData,
    pub durability: Durability,
    pub durability_service: DurabilityService,
    pub deadline: Deadline,
    pub latency_budget: LatencyBudget,
    pub liveliness: Liveliness,
    pub reliability: Reliability,
    pub destination_order: DestinationOrder,
    pub history: History,
    pub resource_limits: ResourceLimits,
    pub transport_priority: TransportPriority,
    pub lifespan: Lifespan,
    pub ownership: Ownership,
}

impl TopicQos {
    /// Default policies with RELIABLE reliability.
    #[must_use]
    pub fn reliable() -> Self {
        Self::default()
    }

    /// Default policies with BEST_EFFORT reliability.
    #[must_use]
    pub fn best_effort() -> Self {
        Self {
            reliability: Reliability::BestEffort,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn keep_last(mut self, depth: u32) -> Self {
        self.history = History::KeepLast(depth);
        self
    }

    #[must_use]
    pub fn keep_all(mut self) -> Self {
        self.history = History::KeepAll;
        self
    }

    #[must_use]
    pub fn volatile(mut self) -> Self {
        self.durability = Durability::Volatile;
        self
    }

    #[must_use]
    pub fn transient_local(mut self) -> Self {
        self.durability = Durability::TransientLocal;
        self
    }

    #[must_use]
    pub fn deadline(mut self, period: Duration) -> Self {
        self.deadline = Deadline::new(period);
        self
    }

    #[must_use]
    pub fn lifespan(mut self, duration: Duration) -> Self {
        self.lifespan = Lifespan::new(duration);
        self
    }

    #[must_use]
    pub fn resource_limits(mut self, limits: ResourceLimits) -> Self {
        self.resource_limits = limits;
        self
    }

    #[must_use]
    pub fn topic_data(mut self, value: Vec<u8>) -> Self {
        self.topic_data = TopicData::new(value);
        self
    }

    /// Validate QoS configuration
    ///
    /// Pure check over `self`; the value a topic currently holds plays no part.
    ///
    /// # Validation Rules
    ///
    /// - History::KeepLast(n) where n > 0
    /// - History::KeepLast(n) where n <= max_samples_per_instance
    /// - History::KeepAll requires ResourceLimits.max_samples > 0
    /// - max_samples >= max_samples_per_instance
    /// - DurabilityService KEEP_LAST depth > 0
    /// - Liveliness lease duration and deadline period are non-zero
    pub fn validate(&self) -> Result<(), String> {
        let rl = &self.resource_limits;

        match self.history {
            History::KeepLast(0) => {
                return Err("History::KeepLast(n) requires n > 0".to_string());
            }
            History::KeepLast(depth) => {
                if rl.max_samples_per_instance != LENGTH_UNLIMITED
                    && (depth as usize) > rl.max_samples_per_instance
                {
                    return Err(format!(
                        "History::KeepLast({}) exceeds max_samples_per_instance ({})",
                        depth, rl.max_samples_per_instance
                    ));
                }
            }
            History::KeepAll => {
                if rl.max_samples == 0 {
                    return Err(
                        "History::KeepAll requires ResourceLimits.max_samples > 0".to_string()
                    );
                }
            }
        }

        if rl.max_samples != LENGTH_UNLIMITED && rl.max_samples < rl.max_samples_per_instance {
            return Err(format!(
                "max_samples ({}) must be >= max_samples_per_instance ({})",
                rl.max_samples, rl.max_samples_per_instance
            ));
        }

        let ds = &self.durability_service;
        if ds.history_kind == HistoryKind::KeepLast && ds.history_depth == 0 {
            return Err("DurabilityService KEEP_LAST history_depth must be > 0".to_string());
        }

        if self.liveliness.lease_duration.is_zero() {
            return Err("Liveliness lease_duration must be > 0".to_string());
        }

        if self.deadline.period.is_zero() {
            return Err("Deadline period must be > 0".to_string());
        }

        Ok(())
    }
}
