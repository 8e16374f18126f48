// ABOUTME: Cache layer for short-lived derived values such as readiness assessments
// ABOUTME: Explicit TTL cache owned by the caller, no global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory LRU cache with TTL
pub mod memory;

pub use memory::TtlCache;

use crate::constants::cache::{DEFAULT_READINESS_CACHE_ENTRIES, TTL_READINESS_SECS};
use std::time::Duration;

/// Cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
    /// Lifetime of each entry
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_READINESS_CACHE_ENTRIES,
            ttl: Duration::from_secs(TTL_READINESS_SECS),
        }
    }
}
