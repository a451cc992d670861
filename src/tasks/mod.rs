//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cleanup: reclaims stale cache entries, when `CLEANUP_INTERVAL` is set

mod cleanup;

pub use cleanup::spawn_cleanup_task;
