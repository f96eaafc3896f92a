//! Crag catalogue handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// A configured crag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CragSummary {
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// List the crags that can be forecast by id
///
/// GET /v1/crags
pub async fn list_crags(State(state): State<AppState>) -> Json<Vec<CragSummary>> {
    let crags = state
        .config
        .crags
        .iter()
        .map(|crag| CragSummary {
            id: crag.id,
            name: crag.name.clone(),
            latitude: crag.latitude,
            longitude: crag.longitude,
        })
        .collect();

    Json(crags)
}
