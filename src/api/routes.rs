//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, resource_handler, root_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Server banner
/// - `GET /posts?id=N`, `GET /todos?id=N` - Cached resource lookup
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// Any other `/:resource` path answers 404 through the gateway's
/// unknown-resource error.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/:resource", get(resource_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
