//! API Module
//!
//! HTTP handlers and routing for the caching proxy.
//!
//! # Endpoints
//! - `GET /` - Server banner
//! - `GET /posts?id=N` - Cached post lookup
//! - `GET /todos?id=N` - Cached todo lookup
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
