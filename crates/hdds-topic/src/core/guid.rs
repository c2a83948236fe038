// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS GUID and instance handles.
//!
//! Remote entities that report an inconsistent topic, and the local writers
//! and readers listed in a topic's rosters, are all identified by a [`GUID`].

use std::fmt;

/// Opaque identifier of a (local or remote) DDS entity.
///
/// Handles are supplied by discovery; this crate only compares and stores them.
pub type InstanceHandle = GUID;

/// RTPS entity kind for a user-defined topic (DDS-RTPS v2.5 Sec.9.3.1.2).
pub const ENTITY_KIND_USER_TOPIC: u8 = 0x0A;

/// RTPS GUID (Globally Unique Identifier)
///
/// 16-byte identifier following DDS-RTPS v2.3 spec.
///
/// # Structure
/// - Prefix: 12 bytes (host/vendor unique)
/// - Entity ID: 4 bytes (3-byte key + 1-byte kind)
///
/// # Display Format
/// Hex with dots: "01.0f.ac.10.00.00.00.00.00.00.00.01.00.00.01.c1"
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GUID {
    pub prefix: [u8; 12],
    pub entity_id: [u8; 4],
}

impl GUID {
    /// Create GUID from raw bytes (16 bytes total)
    ///
    /// # Examples
    /// ```
    /// use hdds_topic::GUID;
    ///
    /// let bytes = [1, 15, 172, 16, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 193];
    /// let guid = GUID::from_bytes(bytes);
    /// assert_eq!(guid.entity_kind(), 0xC1);
    /// ```
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut prefix = [0u8; 12];
        let mut entity_id = [0u8; 4];
        prefix.copy_from_slice(&bytes[0..12]);
        entity_id.copy_from_slice(&bytes[12..16]);
        Self { prefix, entity_id }
    }

    /// Create GUID from separate prefix and entity ID
    pub fn new(prefix: [u8; 12], entity_id: [u8; 4]) -> Self {
        Self { prefix, entity_id }
    }

    /// Build the GUID of the `key`-th user topic under `prefix`.
    ///
    /// Only the low 24 bits of `key` are used.
    pub fn user_topic(prefix: [u8; 12], key: u32) -> Self {
        let k = key.to_be_bytes();
        Self {
            prefix,
            entity_id: [k[1], k[2], k[3], ENTITY_KIND_USER_TOPIC],
        }
    }

    /// Convert GUID to 16-byte array
    pub fn as_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..12].copy_from_slice(&self.prefix);
        bytes[12..16].copy_from_slice(&self.entity_id);
        bytes
    }

    /// Entity kind octet (last byte of the entity ID).
    pub fn entity_kind(&self) -> u8 {
        self.entity_id[3]
    }

    /// Create GUID with all zeros (invalid/placeholder)
    pub fn zero() -> Self {
        Self {
            prefix: [0; 12],
            entity_id: [0; 4],
        }
    }

    /// Check if GUID is zero (invalid)
    pub fn is_zero(&self) -> bool {
        self.prefix.iter().all(|&b| b == 0) && self.entity_id.iter().all(|&b| b == 0)
    }
}

impl fmt::Display for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.prefix.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        for byte in &self.entity_id {
            write!(f, ".{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GUID({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_display() {
        let guid = GUID::new([1, 15, 172, 16, 0, 0, 0, 0, 0, 0, 0, 1], [0, 0, 1, 193]);
        assert_eq!(
            guid.to_string(),
            "01.0f.ac.10.00.00.00.00.00.00.00.01.00.00.01.c1"
        );
        assert!(format!("{:?}", guid).starts_with("GUID(01.0f"));
    }

    #[test]
    fn test_guid_as_bytes() {
        let orig = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        assert_eq!(GUID::from_bytes(orig).as_bytes(), orig);
    }

    #[test]
    fn test_guid_user_topic() {
        let guid = GUID::user_topic([7; 12], 0x0001_0203);
        assert_eq!(guid.entity_id, [0x01, 0x02, 0x03, ENTITY_KIND_USER_TOPIC]);
        assert_eq!(guid.entity_kind(), ENTITY_KIND_USER_TOPIC);
        assert_eq!(guid.prefix, [7; 12]);
    }

    #[test]
    fn test_guid_zero() {
        assert!(GUID::zero().is_zero());

        let non_zero = GUID::new([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0]);
        assert!(!non_zero.is_zero());
    }
}
