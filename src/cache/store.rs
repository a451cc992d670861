//! TTL Store Module
//!
//! HashMap storage keyed by `CacheKey`. Presence and freshness are separate
//! questions here: `get` answers presence only, and callers judge freshness
//! against their own clock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheKey, CacheStats};

// == TTL Store ==
/// Unbounded map from key to entry with a single, fixed TTL.
///
/// Not synchronized; share it behind a lock.
#[derive(Debug)]
pub struct TtlStore<V> {
    /// Key-value storage
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied to every write
    ttl: Duration,
}

impl<V> TtlStore<V> {
    // == Constructor ==
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns the entry for `key` if one is stored, stale or not.
    pub fn get(&self, key: &CacheKey) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Put ==
    /// Stores `value` under `key`, expiring one TTL after `now`.
    ///
    /// Any previous entry for the key is replaced.
    pub fn put(&mut self, key: CacheKey, value: V, now: Instant) {
        self.entries.insert(key, CacheEntry::new(value, now, self.ttl));
    }

    // == Cleanup Expired ==
    /// Drops every entry that is stale at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh_at(now));
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn record_hit(&mut self) {
        self.stats.record_hit();
    }

    pub fn record_miss(&mut self) {
        self.stats.record_miss();
    }

    pub fn record_upstream_failure(&mut self) {
        self.stats.record_upstream_failure();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
