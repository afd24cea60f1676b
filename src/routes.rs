//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (public)
//! - `/api/*`        - REST API for link and export operations
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - Conversion payloads capped at the configured size
//! - **Path normalization** - Trailing slash handling

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, max_content_bytes: usize) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .layer(DefaultBodyLimit::max(max_content_bytes))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
