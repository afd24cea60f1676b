//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service holds no connections or queues, so health reduces to
/// process liveness plus uptime.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}
