// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Core identifiers shared by the DDS layer.

/// RTPS GUID and instance handle types.
pub mod guid;

pub use guid::{InstanceHandle, ENTITY_KIND_USER_TOPIC, GUID};
