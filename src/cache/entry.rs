//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A fetched value together with the instant it stops being fresh.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was fetched
    pub fetched_at: Instant,
    /// Expiration instant, None = TTL too large to represent (never expires)
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry fetched at `now` that expires `ttl` later.
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            fetched_at: now,
            expires_at: now.checked_add(ttl),
        }
    }

    // == Freshness ==
    /// Returns true if the entry may still be served at `now`.
    ///
    /// Boundary condition: an entry is fresh only while its expiry is strictly
    /// after `now`; at the expiry instant it is already stale.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => expires > now,
            None => true,
        }
    }

    /// Remaining freshness at `now`, or None if the entry never expires.
    pub fn ttl_remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
