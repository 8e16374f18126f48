// ABOUTME: Key-value store persisted as a single JSON document on disk
// ABOUTME: Writes go to a temporary sibling file and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{entry_size, KeyValueStore};
use crate::errors::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed store; the whole document is rewritten on every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl JsonFileStore {
    /// Open or create the store at `path`
    ///
    /// A document that does not parse is moved aside to `<path>.corrupt` and
    /// the store starts empty.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file exists but cannot be read
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    let aside = corrupt_path(&path);
                    warn!(
                        path = %path.display(),
                        moved_to = %aside.display(),
                        error = %e,
                        "Store document is malformed; starting empty"
                    );
                    if let Err(rename_err) = fs::rename(&path, &aside) {
                        warn!(error = %rename_err, "Could not move malformed store aside");
                    }
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::io(path.display().to_string(), e.to_string())),
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened JSON store");
        Ok(Self {
            path,
            entries,
            quota_bytes: None,
        })
    }

    /// Apply a byte quota to subsequent writes
    #[must_use]
    pub const fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Location of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| entry_size(k, v)).sum()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let io_err = |e: io::Error| StorageError::io(self.path.display().to_string(), e.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let document = serde_json::to_string_pretty(&self.entries).map_err(|e| {
            StorageError::serialization(self.path.display().to_string(), e.to_string())
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, document).map_err(io_err)?;
        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(io_err)
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

impl KeyValueStore for JsonFileStore {
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
        let previous = self.entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.persist() {
            match previous {
                Some(old) => self.entries.insert(key.to_owned(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.entries.insert(key.to_owned(), previous);
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
