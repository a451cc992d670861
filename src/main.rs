//! Cache Proxy - A caching reverse proxy for the posts and todos resources
//!
//! Serves repeated lookups from an in-memory TTL cache and fetches from the
//! upstream REST API only on a miss.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache_proxy::{create_router, spawn_cleanup_task, AppState, Config};

/// Main entry point for the caching proxy.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the upstream client and cache gateway
/// 4. Start the stale entry cleanup task, if enabled
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cache_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cache Proxy");

    let config = Config::from_env();
    info!(
        "Configuration loaded: upstream={}, ttl={}s, port={}, cleanup_interval={}s",
        config.upstream_base_url, config.cache_ttl, config.server_port, config.cleanup_interval
    );

    let state = AppState::from_config(&config).context("Failed to build upstream client")?;
    info!("Cache gateway initialized");

    let cleanup_handle = if config.cleanup_interval > 0 {
        let handle = spawn_cleanup_task(state.gateway.clone(), config.cleanup_interval);
        info!("Background cleanup task started");
        Some(handle)
    } else {
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://localhost:{}", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("HTTP server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
