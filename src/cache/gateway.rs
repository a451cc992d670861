//! Cache Gateway Module
//!
//! Cache-first resolution of resources: serve a fresh entry when there is
//! one, otherwise fetch from the upstream and remember the result for one TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStats, Clock, SystemClock, TtlStore};
use crate::error::{ProxyError, Result};
use crate::models::Resource;
use crate::upstream::ResourceFetcher;

// == Cache Gateway ==
/// Single entry point for "give me resource (kind, id)".
///
/// The store lock is taken only for the lookup and for the write; it is
/// never held while the upstream fetch is in flight. Concurrent misses on the
/// same key may each fetch, and the last write wins.
pub struct CacheGateway {
    store: RwLock<TtlStore<Resource>>,
    fetcher: Arc<dyn ResourceFetcher>,
    clock: Arc<dyn Clock>,
}

impl CacheGateway {
    // == Constructor ==
    /// Creates a gateway with an empty cache on the system clock.
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, ttl: Duration) -> Self {
        Self::with_clock(fetcher, ttl, Arc::new(SystemClock))
    }

    /// Creates a gateway reading time from `clock`.
    pub fn with_clock(
        fetcher: Arc<dyn ResourceFetcher>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store: RwLock::new(TtlStore::new(ttl)),
            fetcher,
            clock,
        }
    }

    // == Resolve ==
    /// Resolves raw request input, validating the ID and then the resource
    /// type before touching the cache.
    pub async fn resolve(&self, resource: &str, id: &str) -> Result<Resource> {
        let key = CacheKey::parse(resource, id)?;
        self.resolve_key(key).await
    }

    /// Resolves an already validated key.
    pub async fn resolve_key(&self, key: CacheKey) -> Result<Resource> {
        let now = self.clock.now();

        // Write lock: hit/miss accounting mutates the stats
        {
            let mut store = self.store.write().await;
            let cached = store
                .get(&key)
                .filter(|entry| entry.is_fresh_at(now))
                .map(|entry| (entry.value.clone(), entry.ttl_remaining(now)));

            if let Some((value, remaining)) = cached {
                store.record_hit();
                debug!(%key, ttl_remaining = ?remaining, "Data fetched from cache");
                return Ok(value);
            }
            store.record_miss();
        }

        match self.fetcher.fetch(key.kind, key.id).await {
            Ok(value) => {
                let fetched_at = self.clock.now();
                self.store.write().await.put(key, value.clone(), fetched_at);
                info!(%key, "Data fetched from upstream");
                Ok(value)
            }
            Err(err) => {
                self.store.write().await.record_upstream_failure();
                warn!(%key, error = %err, "Upstream fetch failed");
                Err(ProxyError::UpstreamUnavailable(err))
            }
        }
    }

    // == Reclaim ==
    /// Drops entries that are already stale. Returns how many were removed.
    pub async fn reclaim_expired(&self) -> usize {
        let now = self.clock.now();
        self.store.write().await.cleanup_expired(now)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn ttl(&self) -> Duration {
        self.store.read().await.ttl()
    }
}
