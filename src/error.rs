//! Error types for the caching proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failures of the upstream resource fetcher.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Body did not match the expected resource shape
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Proxy Error Enum ==
/// Errors produced by resolving a resource through the cache.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The requested ID is not a non-negative integer
    #[error("Invalid ID: {0}")]
    InvalidInput(String),

    /// The requested resource type is not one of the fronted resources
    #[error("Invalid API endpoint: {0}")]
    UnknownResource(String),

    /// The upstream fetch failed; nothing was cached
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] UpstreamError),
}

impl ProxyError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ProxyError::UnknownResource(_) => StatusCode::NOT_FOUND,
            ProxyError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
