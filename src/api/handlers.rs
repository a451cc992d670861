//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::cache::CacheGateway;
use crate::config::Config;
use crate::error::{ProxyError, Result, UpstreamError};
use crate::models::{HealthResponse, Resource, ResourceQuery, StatsResponse};
use crate::upstream::{ResourceFetcher, UpstreamClient};

/// Application state shared across all handlers.
///
/// Built once at startup; the gateway owns the only cache.
#[derive(Clone)]
pub struct AppState {
    /// Cache-first resource resolver
    pub gateway: Arc<CacheGateway>,
    /// Port reported by the root banner
    pub server_port: u16,
}

impl AppState {
    /// Creates a new AppState around an existing gateway.
    pub fn new(gateway: CacheGateway, server_port: u16) -> Self {
        Self {
            gateway: Arc::new(gateway),
            server_port,
        }
    }

    /// Creates a new AppState from configuration, fetching through `fetcher`.
    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self::new(CacheGateway::new(fetcher, config.ttl()), config.server_port)
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the upstream HTTP client from the configured base URL and timeout.
    pub fn from_config(config: &Config) -> std::result::Result<Self, UpstreamError> {
        let client = UpstreamClient::from_config(config)?;
        Ok(Self::with_fetcher(config, Arc::new(client)))
    }
}

/// Handler for GET /
///
/// Plain-text banner confirming the server is up.
pub async fn root_handler(State(state): State<AppState>) -> String {
    format!("Server is running at port {}", state.server_port)
}

/// Handler for GET /:resource?id=N
///
/// Resolves the resource through the cache and returns it as JSON.
/// A query string axum cannot decode is reported as an invalid ID.
pub async fn resource_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    query: std::result::Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<Resource>> {
    let Query(query) =
        query.map_err(|rejection| ProxyError::InvalidInput(rejection.body_text()))?;
    let value = state.gateway.resolve(&resource, query.raw_id()).await?;
    Ok(Json(value))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.gateway.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
