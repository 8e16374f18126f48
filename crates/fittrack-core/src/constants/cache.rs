// ABOUTME: Cache-related constants for TTL and capacity of derived-value caches
// ABOUTME: Readiness scores are cached briefly to avoid recomputing on every refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default readiness cache TTL (2 minutes) - recomputed often enough to see a newly logged workout
pub const TTL_READINESS_SECS: u64 = 120;

/// Default maximum cached readiness entries (one per calendar day queried)
pub const DEFAULT_READINESS_CACHE_ENTRIES: usize = 32;

/// Cache key prefix for readiness entries
pub const READINESS_KEY_PREFIX: &str = "readiness:";
