//! Cache Module
//!
//! In-memory TTL cache in front of the upstream resources, and the gateway
//! that resolves requests through it.

mod clock;
mod entry;
mod gateway;
mod key;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use gateway::CacheGateway;
pub use key::{CacheKey, ResourceKind};
pub use stats::CacheStats;
pub use store::TtlStore;
