//! Storm Proxy Service Library
//!
//! Re-serves NHC hurricane products (active storms, KMZ tracks and cones,
//! ATCF ensemble tracks) as CORS-enabled JSON and GeoJSON.

pub mod config;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod products;
pub mod state;
pub mod upstream;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the proxy router with its middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Path routes
        .route("/api/storms", get(handlers::storms::active_storms_handler))
        .route(
            "/api/storms/:storm_id/track",
            get(handlers::geojson::track_handler),
        )
        .route(
            "/api/storms/:storm_id/history",
            get(handlers::geojson::history_handler),
        )
        .route(
            "/api/storms/:storm_id/cone",
            get(handlers::geojson::cone_handler),
        )
        .route(
            "/api/storms/:storm_id/ensemble",
            get(handlers::ensemble::ensemble_handler),
        )
        // Query-string dispatch
        .route("/api", get(handlers::dispatch::api_dispatch_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
