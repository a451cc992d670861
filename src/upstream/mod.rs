//! Upstream Module
//!
//! The source of truth behind the cache. `ResourceFetcher` is the seam the
//! cache gateway calls on a miss; `UpstreamClient` implements it over HTTP.

mod client;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::cache::ResourceKind;
use crate::error::UpstreamError;
use crate::models::Resource;

pub use client::UpstreamClient;

/// Retrieves the canonical value of one resource.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, kind: ResourceKind, id: u64) -> Result<Resource, UpstreamError>;
}
