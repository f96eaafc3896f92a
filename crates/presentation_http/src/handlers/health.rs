//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub noaa: ServiceStatus,
}

/// Status of a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
}

/// Readiness check - can the weather provider be reached?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let noaa_healthy = state.forecast_service.is_healthy().await;

    let status_code = if noaa_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready: noaa_healthy,
            noaa: ServiceStatus {
                healthy: noaa_healthy,
            },
        }),
    )
}
