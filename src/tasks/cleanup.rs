//! Stale Entry Cleanup Task
//!
//! Optional background task that reclaims memory held by stale cache entries.
//! Lookups never depend on it: a stale entry is treated as a miss whether or
//! not it has been reclaimed.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheGateway;

/// Spawns a background task that periodically drops stale cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs. The store lock is held only for the sweep itself.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cleanup_handle = spawn_cleanup_task(state.gateway.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    gateway: Arc<CacheGateway>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting stale entry cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = gateway.reclaim_expired().await;
            if removed > 0 {
                info!("Cache cleanup: removed {} stale entries", removed);
            } else {
                debug!("Cache cleanup: no stale entries found");
            }
        }
    })
}
