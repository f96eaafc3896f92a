//! Forecast handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use domain::{CragId, Cragcast, GeoLocation};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for a coordinate forecast
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationQuery {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

/// Forecast for a configured crag
///
/// GET /v1/crags/{crag_id}/forecast
#[instrument(skip(state))]
pub async fn crag_forecast(
    State(state): State<AppState>,
    Path(crag_id): Path<String>,
) -> Result<Json<Cragcast>, ApiError> {
    let crag_id: CragId = crag_id
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid crag ID: {e}")))?;

    let forecast = state.forecast_service.get_forecast(crag_id).await?;
    Ok(Json(forecast))
}

/// Forecast for explicit coordinates
///
/// GET /v1/forecast?latitude=..&longitude=..
#[instrument(skip(state))]
pub async fn location_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Cragcast>, ApiError> {
    let location = GeoLocation::new(query.latitude, query.longitude)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let forecast = state
        .forecast_service
        .forecast_for_location(&location)
        .await?;
    Ok(Json(forecast))
}
