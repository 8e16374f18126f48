// ABOUTME: In-memory key-value store with an optional byte quota
// ABOUTME: Emulates browser local storage limits for tests and ephemeral sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{entry_size, KeyValueStore};
use crate::errors::StorageError;
use std::collections::BTreeMap;

/// Map-backed store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl InMemoryStore {
    /// Unbounded store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys plus values exceed `quota_bytes`
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Bytes currently used by keys and values
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| entry_size(k, v)).sum()
    }

    /// Configured quota
    #[must_use]
    pub const fn quota_bytes(&self) -> Option<usize> {
        self.quota_bytes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self.entries.get(key).map_or(0, |old| entry_size(key, old));
            let attempted = self.used_bytes() - replaced + entry_size(key, value);
            if attempted > quota {
                return Err(StorageError::quota_exceeded(key, attempted, quota));
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
