//! Request and Response models for the proxy API
//!
//! This module defines the resource wire shapes and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod resources;
pub mod responses;

// Re-export commonly used types
pub use requests::ResourceQuery;
pub use resources::{Post, Resource, Todo};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
