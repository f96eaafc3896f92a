//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Forecast service for crag and coordinate forecasts
    pub forecast_service: Arc<ForecastService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
