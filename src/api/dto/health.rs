//! DTOs for the health check endpoint.

use serde::Serialize;

/// Service health report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}
