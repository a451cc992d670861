//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default upstream serving the posts and todos resources.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Root URL of the upstream REST API
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Stale entry reclamation interval in seconds, 0 disables it
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `UPSTREAM_BASE_URL` - Upstream root URL (default: jsonplaceholder)
    /// - `UPSTREAM_TIMEOUT` - Upstream request timeout in seconds (default: 10)
    /// - `CLEANUP_INTERVAL` - Stale entry reclamation in seconds (default: 0, off)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.upstream_base_url),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT", defaults.upstream_timeout),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_ttl: 300,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_timeout: 10,
            cleanup_interval: 0,
        }
    }
}

/// Parses an environment variable, falling back to `default` when it is
/// unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
