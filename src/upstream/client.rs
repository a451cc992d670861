//! Upstream REST client
//!
//! Fetches posts and todos from a jsonplaceholder-style API and parses them
//! into `Resource` values.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::ResourceFetcher;
use crate::cache::ResourceKind;
use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::{Post, Resource, Todo};

/// HTTP client for the upstream REST API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Creates a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a client from the proxy configuration.
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        Self::new(config.upstream_base_url.clone(), config.upstream_timeout())
    }

    /// Create a new UpstreamClient with a custom HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one resource on the upstream.
    pub fn resource_url(&self, kind: ResourceKind, id: u64) -> String {
        format!("{}/{}/{}", self.base_url, kind.path_segment(), id)
    }
}

#[async_trait]
impl ResourceFetcher for UpstreamClient {
    #[instrument(skip(self))]
    async fn fetch(&self, kind: ResourceKind, id: u64) -> Result<Resource, UpstreamError> {
        let url = self.resource_url(kind, id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        debug!(%url, bytes = text.len(), "Upstream response received");

        let resource = match kind {
            ResourceKind::Post => Resource::Post(serde_json::from_str::<Post>(&text)?),
            ResourceKind::Todo => Resource::Todo(serde_json::from_str::<Todo>(&text)?),
        };
        Ok(resource)
    }
}
