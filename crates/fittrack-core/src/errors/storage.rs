// ABOUTME: Storage-specific error types for the key-value persistence layer
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage Error Types
//!
//! Provides structured error types for key-value storage operations:
//! - `StorageError` - quota, I/O, and corrupted-value failures
//! - Conversion to `AppError` so callers can propagate with `?`

use super::{AppError, ErrorCode};
use std::error::Error;
use std::fmt;

/// Errors specific to key-value storage operations.
///
/// Quota errors mirror the browser `QuotaExceededError`: the write is
/// rejected and the previous value under the key is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Writing the value would exceed the configured storage quota
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Total bytes the store would hold after the write
        attempted_bytes: usize,
        /// Configured quota in bytes
        quota_bytes: usize,
    },
    /// Underlying file system operation failed
    Io {
        /// Path of the backing file
        path: String,
        /// Details about the failure
        details: String,
    },
    /// Stored text under a key is not valid JSON for the expected type
    Corrupted {
        /// Key holding the malformed value
        key: String,
        /// Parser message
        details: String,
    },
    /// Value could not be serialized before writing
    Serialization {
        /// Key being written
        key: String,
        /// Serializer message
        details: String,
    },
}

impl StorageError {
    /// Create a "quota exceeded" error
    #[must_use]
    pub fn quota_exceeded(key: impl Into<String>, attempted_bytes: usize, quota_bytes: usize) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            attempted_bytes,
            quota_bytes,
        }
    }

    /// Create an I/O error for a backing file
    #[must_use]
    pub fn io(path: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a "corrupted value" error
    #[must_use]
    pub fn corrupted(key: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Corrupted {
            key: key.into(),
            details: details.into(),
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(key: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.into(),
            details: details.into(),
        }
    }

    /// Whether this is a quota failure
    #[must_use]
    pub const fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Error code used when converting into `AppError`
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::QuotaExceeded { .. } => ErrorCode::StorageQuotaExceeded,
            Self::Io { .. } => ErrorCode::StorageError,
            Self::Corrupted { .. } | Self::Serialization { .. } => ErrorCode::SerializationError,
        }
    }

    fn resource_id(&self) -> &str {
        match self {
            Self::QuotaExceeded { key, .. }
            | Self::Corrupted { key, .. }
            | Self::Serialization { key, .. } => key,
            Self::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                attempted_bytes,
                quota_bytes,
            } => {
                write!(
                    f,
                    "Writing '{key}' needs {attempted_bytes} bytes, quota is {quota_bytes} bytes"
                )
            }
            Self::Io { path, details } => {
                write!(f, "Storage file '{path}' failed: {details}")
            }
            Self::Corrupted { key, details } => {
                write!(f, "Stored value under '{key}' is malformed: {details}")
            }
            Self::Serialization { key, details } => {
                write!(f, "Value for '{key}' could not be serialized: {details}")
            }
        }
    }
}

impl Error for StorageError {}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        let code = error.error_code();
        let resource_id = error.resource_id().to_owned();
        Self::new(code, error.to_string())
            .with_resource_id(resource_id)
            .with_source(error)
    }
}
