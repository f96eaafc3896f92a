//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Crag catalogue (v1)
        .route("/v1/crags", get(handlers::crags::list_crags))
        // Forecast API (v1)
        .route(
            "/v1/crags/{crag_id}/forecast",
            get(handlers::forecast::crag_forecast),
        )
        .route("/v1/forecast", get(handlers::forecast::location_forecast))
        // Attach state
        .with_state(state)
}
