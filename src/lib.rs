//! Cache Proxy - A caching reverse proxy for the posts and todos resources
//!
//! Serves repeated lookups from an in-memory TTL cache and fetches from the
//! upstream REST API only on a miss.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::{create_router, AppState};
pub use cache::CacheGateway;
pub use config::Config;
pub use error::{ProxyError, UpstreamError};
pub use tasks::spawn_cleanup_task;
pub use upstream::{ResourceFetcher, UpstreamClient};
