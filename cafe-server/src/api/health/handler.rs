//! Health API Handlers

use serde::Serialize;
use shared::ApiResponse;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - liveness probe
pub async fn health() -> ApiResponse<HealthStatus> {
    ApiResponse::success(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
