//! In-process fetchers for unit tests: call counting, switchable failure, and
//! a gate that holds a fetch in flight.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::ResourceFetcher;
use crate::cache::ResourceKind;
use crate::error::UpstreamError;
use crate::models::{Post, Resource, Todo};

#[derive(Debug, Default)]
pub struct CountingFetcher {
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Option<Duration>,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every fetch sleep for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Resource the fetcher produces for `(kind, id)`; the title records the
    /// call number so refetches are observable.
    pub fn expected(kind: ResourceKind, id: u64, call: usize) -> Resource {
        match kind {
            ResourceKind::Post => Resource::Post(Post {
                user_id: 1,
                id,
                title: format!("post {} #{}", id, call),
                body: "b".to_string(),
            }),
            ResourceKind::Todo => Resource::Todo(Todo {
                user_id: 1,
                id,
                title: format!("todo {} #{}", id, call),
                completed: id % 2 == 0,
            }),
        }
    }
}

#[async_trait]
impl ResourceFetcher for CountingFetcher {
    async fn fetch(&self, kind: ResourceKind, id: u64) -> Result<Resource, UpstreamError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status {
                status: 503,
                url: format!("mock://{}/{}", kind, id),
            });
        }
        Ok(Self::expected(kind, id, call))
    }
}

/// Fetcher that parks every fetch of `gated_id` until released; other IDs
/// answer at once.
#[derive(Debug)]
pub struct GatedFetcher {
    gated_id: u64,
    /// Signalled when a gated fetch is in flight
    pub started: Notify,
    /// Signal to let the gated fetch finish
    pub release: Notify,
}

impl GatedFetcher {
    pub fn new(gated_id: u64) -> Self {
        Self {
            gated_id,
            started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ResourceFetcher for GatedFetcher {
    async fn fetch(&self, kind: ResourceKind, id: u64) -> Result<Resource, UpstreamError> {
        if id == self.gated_id {
            self.started.notify_one();
            self.release.notified().await;
        }
        Ok(CountingFetcher::expected(kind, id, 1))
    }
}
