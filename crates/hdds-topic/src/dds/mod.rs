// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # DDS Topic API
//!
//! ## Entity Hierarchy
//!
//! ```text
//! Participant
//! +-- Topic (TopicImpl behind SharedTopic)
//!     +-- QoS (TopicQos, validated on every replacement)
//!     +-- TopicListener (0..1)
//!     +-- StatusCondition (INCONSISTENT_TOPIC)
//!     +-- writers / readers (EntityRoster, non-owning)
//! ```
//!
//! ## Inconsistent topic flow
//!
//! ```text
//! discovery --report_inconsistent_topic(h)--> TopicImpl
//!                                             |- counters += 1
//!                                             |- remember h
//!                                             |- StatusCondition: triggered
//!                                             +- listener.on_inconsistent_topic(..)
//! poller --get_inconsistent_topic_status()--> snapshot, change := 0, status read
//! ```

mod condition;
/// Listener trait and status types.
pub mod listener;
mod participant;
/// Topic QoS policies, validation and profile loaders.
pub mod qos;
mod roster;
mod topic;

pub use condition::{
    Condition, HasStatusCondition, StatusCondition, StatusMask, StatusObserver, WaitsetSignal,
};
pub use listener::{ClosureTopicListener, InconsistentTopicStatus, TopicListener};
pub use participant::{Participant, MAX_DOMAIN_ID};
pub use qos::TopicQos;
pub use roster::EntityRoster;
pub use topic::{SharedTopic, TopicIdentity, TopicImpl};

/// Errors returned by topic operations.
#[derive(Debug)]
pub enum Error {
    // ========================================================================
    // QoS Errors
    // ========================================================================
    /// QoS candidate failed validation; the previous QoS is kept.
    InconsistentPolicy(String),

    // ========================================================================
    // Entity Errors
    // ========================================================================
    /// Domain ID out of range (0-232).
    InvalidDomainId(u32),
    /// Operation refused in the entity's current state (duplicate topic, bound writers/readers).
    PreconditionNotMet(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file not found at specified path.
    ConfigFileNotFound(String),
    /// Configuration content could not be parsed or mapped.
    Config(String),
    /// I/O error with underlying cause.
    IoError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentPolicy(msg) => write!(f, "Inconsistent QoS policy: {}", msg),
            Error::InvalidDomainId(id) => write!(f, "Invalid domain_id: {} (must be 0-232)", id),
            Error::PreconditionNotMet(msg) => write!(f, "Precondition not met: {}", msg),
            Error::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e)
    }
}

/// Convenient alias for API results using the public `Error` type.
pub type Result<T> = core::result::Result<T, Error>;
