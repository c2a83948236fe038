// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Writer/reader roster of a topic.
//!
//! Entries are handles of entities owned elsewhere (publishers/subscribers).
//! The roster never creates or destroys them; it only remembers which ones
//! are bound to the topic, in the order they were added.

use crate::core::InstanceHandle;

/// Non-owning, insertion-ordered list of entity handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRoster {
    entries: Vec<InstanceHandle>,
}

impl EntityRoster {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `handle`. Returns `false` (and changes nothing) if already present.
    pub fn add(&mut self, handle: InstanceHandle) -> bool {
        if self.entries.contains(&handle) {
            log::trace!("[roster] {} already registered", handle);
            return false;
        }
        log::trace!("[roster] + {}", handle);
        self.entries.push(handle);
        true
    }

    /// Remove `handle`. Removing an absent handle is a no-op returning `false`.
    pub fn remove(&mut self, handle: &InstanceHandle) -> bool {
        match self.entries.iter().position(|h| h == handle) {
            Some(idx) => {
                log::trace!("[roster] - {}", handle);
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether `handle` is currently registered.
    pub fn contains(&self, handle: &InstanceHandle) -> bool {
        self.entries.contains(handle)
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no handle is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &InstanceHandle> {
        self.entries.iter()
    }

    /// Handles in insertion order, as a slice.
    pub fn handles(&self) -> &[InstanceHandle] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a EntityRoster {
    type Item = &'a InstanceHandle;
    type IntoIter = std::slice::Iter<'a, InstanceHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
