// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML topic QoS profile loader.
//!
//! # Example YAML
//!
//! ```yaml
//! default_profile: reliable_sensor
//! profiles:
//!   reliable_sensor:
//!     reliability: RELIABLE
//!     durability: TRANSIENT_LOCAL
//!     history:
//!       kind: KEEP_LAST
//!       depth: 100
//!     deadline:
//!       period_ms: 1000
//!
//!   best_effort_telemetry:
//!     reliability: BEST_EFFORT
//!     liveliness:
//!       kind: AUTOMATIC
//!       lease_duration_ms: 5000
//! ```
//!
//! The loader only translates; a loaded profile still goes through
//! [`TopicQos::validate`] when it is handed to a topic.

use crate::dds::qos::*;
use crate::dds::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// YAML topic QoS loader.
pub struct YamlLoader;

/// Root YAML document structure.
#[derive(Debug, Deserialize)]
pub struct YamlQosDocument {
    /// Named QoS profiles.
    #[serde(default)]
    pub profiles: HashMap<String, YamlQosProfile>,

    /// Default profile name (optional).
    #[serde(default)]
    pub default_profile: Option<String>,
}

/// A single topic QoS profile in YAML format.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlQosProfile {
    /// RELIABLE or BEST_EFFORT
    pub reliability: Option<String>,
    /// VOLATILE, TRANSIENT_LOCAL, TRANSIENT or PERSISTENT
    pub durability: Option<String>,
    pub history: Option<YamlHistory>,
    pub liveliness: Option<YamlLiveliness>,
    /// SHARED or EXCLUSIVE
    pub ownership: Option<String>,
    /// BY_RECEPTION_TIMESTAMP or BY_SOURCE_TIMESTAMP
    pub destination_order: Option<String>,
    pub deadline: Option<YamlDuration>,
    pub lifespan: Option<YamlDuration>,
    pub latency_budget: Option<YamlDuration>,
    /// Topic data (UTF-8 string)
    pub topic_data: Option<String>,
    pub resource_limits: Option<YamlResourceLimits>,
    pub durability_service: Option<YamlDurabilityService>,
    pub transport_priority: Option<i32>,
}

/// History QoS in YAML.
#[derive(Debug, Deserialize)]
pub struct YamlHistory {
    /// KEEP_LAST or KEEP_ALL
    pub kind: String,
    /// Depth for KEEP_LAST
    #[serde(default = "default_history_depth")]
    pub depth: u32,
}

fn default_history_depth() -> u32 {
    1
}

/// Liveliness QoS in YAML.
#[derive(Debug, Deserialize)]
pub struct YamlLiveliness {
    /// AUTOMATIC, MANUAL_BY_PARTICIPANT, or MANUAL_BY_TOPIC
    pub kind: String,
    #[serde(default)]
    pub lease_duration_ms: Option<u64>,
    #[serde(default)]
    pub lease_duration_secs: Option<u64>,
}

/// A duration given in milliseconds or seconds. Neither means infinite.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlDuration {
    pub period_ms: Option<u64>,
    pub period_secs: Option<u64>,
    pub duration_ms: Option<u64>,
    pub duration_secs: Option<u64>,
}

impl YamlDuration {
    fn to_duration(&self, unset: Duration) -> Duration {
        if let Some(ms) = self.period_ms.or(self.duration_ms) {
            Duration::from_millis(ms)
        } else if let Some(secs) = self.period_secs.or(self.duration_secs) {
            Duration::from_secs(secs)
        } else {
            unset
        }
    }
}

/// Resource limits QoS in YAML. `-1` means UNLIMITED.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct YamlResourceLimits {
    pub max_samples: i32,
    pub max_instances: i32,
    pub max_samples_per_instance: i32,
}

impl Default for YamlResourceLimits {
    fn default() -> Self {
        Self {
            max_samples: -1,
            max_instances: -1,
            max_samples_per_instance: -1,
        }
    }
}

impl YamlResourceLimits {
    fn to_limits(&self) -> ResourceLimits {
        ResourceLimits {
            max_samples: limit(self.max_samples),
            max_instances: limit(self.max_instances),
            max_samples_per_instance: limit(self.max_samples_per_instance),
        }
    }
}

fn limit(value: i32) -> usize {
    usize::try_from(value).unwrap_or(LENGTH_UNLIMITED)
}

/// Durability service QoS in YAML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlDurabilityService {
    pub service_cleanup_delay_ms: u64,
    pub history: Option<YamlHistory>,
    pub resource_limits: Option<YamlResourceLimits>,
}

impl YamlLoader {
    /// Load QoS profiles from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<YamlQosDocument> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigFileNotFound(path.display().to_string()));
        }
        let yaml_content = fs::read_to_string(path).map_err(Error::IoError)?;
        Self::parse_yaml(&yaml_content)
    }

    /// Parse YAML content.
    pub fn parse_yaml(yaml_content: &str) -> Result<YamlQosDocument> {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| Error::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Get QoS by profile name.
    pub fn get_profile(doc: &YamlQosDocument, name: &str) -> Result<TopicQos> {
        let profile = doc
            .profiles
            .get(name)
            .ok_or_else(|| Error::Config(format!("Profile '{}' not found", name)))?;
        Self::profile_to_qos(profile)
    }

    /// Get default QoS from document.
    ///
    /// Falls back to the only profile when exactly one exists, then to
    /// [`TopicQos::default`].
    pub fn get_default_profile(doc: &YamlQosDocument) -> Result<TopicQos> {
        if let Some(ref default_name) = doc.default_profile {
            Self::get_profile(doc, default_name)
        } else if doc.profiles.len() == 1 {
            match doc.profiles.values().next() {
                Some(profile) => Self::profile_to_qos(profile),
                None => Ok(TopicQos::default()),
            }
        } else {
            Ok(TopicQos::default())
        }
    }

    /// Convert YAML profile to QoS.
    pub fn profile_to_qos(profile: &YamlQosProfile) -> Result<TopicQos> {
        let mut qos = TopicQos::default();

        if let Some(ref rel) = profile.reliability {
            qos.reliability = match rel.to_uppercase().as_str() {
                "RELIABLE" => Reliability::Reliable,
                "BEST_EFFORT" => Reliability::BestEffort,
                other => return Err(invalid("reliability", other)),
            };
        }

        if let Some(ref dur) = profile.durability {
            qos.durability = match dur.to_uppercase().as_str() {
                "VOLATILE" => Durability::Volatile,
                "TRANSIENT_LOCAL" => Durability::TransientLocal,
                "TRANSIENT" => Durability::Transient,
                "PERSISTENT" => Durability::Persistent,
                other => return Err(invalid("durability", other)),
            };
        }

        if let Some(ref hist) = profile.history {
            qos.history = parse_history(hist)?;
        }

        if let Some(ref liv) = profile.liveliness {
            let kind = match liv.kind.to_uppercase().as_str() {
                "AUTOMATIC" => LivelinessKind::Automatic,
                "MANUAL_BY_PARTICIPANT" => LivelinessKind::ManualByParticipant,
                "MANUAL_BY_TOPIC" => LivelinessKind::ManualByTopic,
                other => return Err(invalid("liveliness kind", other)),
            };

            let lease_duration = if let Some(ms) = liv.lease_duration_ms {
                Duration::from_millis(ms)
            } else if let Some(secs) = liv.lease_duration_secs {
                Duration::from_secs(secs)
            } else {
                Duration::MAX
            };

            qos.liveliness = Liveliness::new(kind, lease_duration);
        }

        if let Some(ref own) = profile.ownership {
            qos.ownership = match own.to_uppercase().as_str() {
                "SHARED" => Ownership::Shared,
                "EXCLUSIVE" => Ownership::Exclusive,
                other => return Err(invalid("ownership", other)),
            };
        }

        if let Some(ref order) = profile.destination_order {
            qos.destination_order = match order.to_uppercase().as_str() {
                "BY_RECEPTION_TIMESTAMP" => DestinationOrder::ByReceptionTimestamp,
                "BY_SOURCE_TIMESTAMP" => DestinationOrder::BySourceTimestamp,
                other => return Err(invalid("destination order", other)),
            };
        }

        if let Some(ref deadline) = profile.deadline {
            qos.deadline = Deadline::new(deadline.to_duration(Duration::MAX));
        }
        if let Some(ref lifespan) = profile.lifespan {
            qos.lifespan = Lifespan::new(lifespan.to_duration(Duration::MAX));
        }
        if let Some(ref latency) = profile.latency_budget {
            qos.latency_budget = LatencyBudget::new(latency.to_duration(Duration::ZERO));
        }

        if let Some(ref data) = profile.topic_data {
            qos.topic_data = TopicData::new(data.as_bytes().to_vec());
        }

        if let Some(ref limits) = profile.resource_limits {
            qos.resource_limits = limits.to_limits();
        }

        if let Some(ref service) = profile.durability_service {
            qos.durability_service.service_cleanup_delay =
                Duration::from_millis(service.service_cleanup_delay_ms);
            if let Some(ref hist) = service.history {
                match parse_history(hist)? {
                    History::KeepLast(depth) => {
                        qos.durability_service.history_kind = HistoryKind::KeepLast;
                        qos.durability_service.history_depth = depth;
                    }
                    History::KeepAll => {
                        qos.durability_service.history_kind = HistoryKind::KeepAll;
                    }
                }
            }
            if let Some(ref limits) = service.resource_limits {
                qos.durability_service.resource_limits = limits.to_limits();
            }
        }

        if let Some(priority) = profile.transport_priority {
            qos.transport_priority = TransportPriority { value: priority };
        }

        Ok(qos)
    }
}

fn parse_history(hist: &YamlHistory) -> Result<History> {
    match hist.kind.to_uppercase().as_str() {
        "KEEP_LAST" => Ok(History::KeepLast(hist.depth)),
        "KEEP_ALL" => Ok(History::KeepAll),
        other => Err(invalid("history kind", other)),
    }
}

fn invalid(what: &str, value: &str) -> Error {
    Error::Config(format!("Invalid {}: {}", what, value))
}
