// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Topic QoS profile loaders.
//!
//! # Example
//!
//! ```rust,ignore
//! use hdds_topic::dds::qos::loaders::YamlLoader;
//!
//! let doc = YamlLoader::load_from_file("topic_qos.yaml")?;
//! let qos = YamlLoader::get_profile(&doc, "reliable_sensor")?;
//! ```

pub mod yaml;

pub use yaml::{YamlLoader, YamlQosDocument, YamlQosProfile};
