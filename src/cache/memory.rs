// ABOUTME: In-memory cache implementation with LRU eviction and TTL support
// ABOUTME: Callers pass the current instant so expiry is deterministic under test
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::CacheConfig;
use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    data: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Single-owner cache with LRU eviction and per-entry TTL
#[derive(Debug)]
pub struct TtlCache<K: Hash + Eq, V> {
    store: LruCache<K, CacheEntry<V>>,
    ttl: Duration,
}

impl<K: Hash + Eq, V: Clone> TtlCache<K, V> {
    /// Default cache capacity when config specifies zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache from configuration
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        Self {
            store: LruCache::new(capacity),
            ttl: config.ttl,
        }
    }

    /// Entry lifetime
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store a value that expires `ttl` after `now`
    pub fn insert(&mut self, key: K, value: V, now: Instant) {
        let entry = CacheEntry {
            data: value,
            expires_at: now + self.ttl,
        };
        // LruCache handles eviction automatically on push
        self.store.push(key, entry);
    }

    /// Fetch a live value, dropping it if expired
    pub fn get(&mut self, key: &K, now: Instant) -> Option<V> {
        let expired = self.store.get(key)?.is_expired(now);
        if expired {
            self.store.pop(key);
            return None;
        }
        self.store.get(key).map(|entry| entry.data.clone())
    }

    /// Remove one entry
    pub fn invalidate(&mut self, key: &K) {
        self.store.pop(key);
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Remove expired entries and return how many were dropped
    pub fn purge_expired(&mut self, now: Instant) -> usize
    where
        K: Clone,
    {
        let expired: Vec<K> = self
            .store
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key)
            .cloned()
            .collect();
        for key in &expired {
            self.store.pop(key);
        }
        if !expired.is_empty() {
            debug!("Cleaned up {} expired cache entries", expired.len());
        }
        expired.len()
    }

    /// Entries currently held, expired or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
