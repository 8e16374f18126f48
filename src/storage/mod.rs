// ABOUTME: Key-value persistence abstraction holding JSON text under string keys
// ABOUTME: Typed load and save helpers with reset-to-default on malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Every tracker persists a single JSON document under its own key. Stores
//! are synchronous and single-writer; last write wins.

/// JSON document on disk
pub mod file;
/// In-memory store with an optional byte quota
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::errors::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Synchronous string-keyed store of JSON text
pub trait KeyValueStore {
    /// Raw value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns `QuotaExceeded` when the write would overflow the quota and
    /// `Io` when the backing medium cannot be written
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; absent keys are not an error
    ///
    /// # Errors
    ///
    /// Returns `Io` when the backing medium cannot be written
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Every stored key, sorted
    fn keys(&self) -> Vec<String>;
}

/// Deserialize the value under `key`
///
/// # Errors
///
/// Returns `Corrupted` when the stored text is not a valid `T`
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::corrupted(key, e.to_string()))
}

/// Deserialize the value under `key`, falling back to `T::default()` when
/// it is missing, malformed, or unreadable
pub fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "Stored value unusable; resetting to default");
            T::default()
        }
    }
}

/// Serialize `value` under `key`
///
/// # Errors
///
/// Returns `Serialization` if `value` cannot be encoded and any store error
pub fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json =
        serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e.to_string()))?;
    store.set(key, &json)
}

/// Bytes a key/value pair counts against a quota
#[must_use]
pub const fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}
