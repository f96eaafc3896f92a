//! Forecast service
//!
//! Resolves a crag, fetches its gridpoint series and runs the forecast
//! engine. Every call is a single attempt: provider and parse failures are
//! returned as-is.

use std::sync::Arc;

use domain::{Cragcast, CragId, DayBoundary, GeoLocation};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::forecast::build_cragcast;
use crate::ports::{CragLocationPort, GridpointPort};

/// Application service producing calendar-organized forecasts
pub struct ForecastService {
    gridpoints: Arc<dyn GridpointPort>,
    crags: Arc<dyn CragLocationPort>,
    day_boundary: DayBoundary,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("gridpoints", &"<GridpointPort>")
            .field("crags", &"<CragLocationPort>")
            .field("day_boundary", &self.day_boundary)
            .finish()
    }
}

impl ForecastService {
    /// Create a new forecast service with the default day boundary
    #[must_use]
    pub fn new(gridpoints: Arc<dyn GridpointPort>, crags: Arc<dyn CragLocationPort>) -> Self {
        Self {
            gridpoints,
            crags,
            day_boundary: DayBoundary::default(),
        }
    }

    /// Set how hours are grouped into days
    #[must_use]
    pub const fn with_day_boundary(mut self, day_boundary: DayBoundary) -> Self {
        self.day_boundary = day_boundary;
        self
    }

    /// Current day boundary policy
    #[must_use]
    pub const fn day_boundary(&self) -> DayBoundary {
        self.day_boundary
    }

    /// Forecast for a known crag
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown crags, the provider's error if the
    /// fetch fails, and `Domain` if the series contains a malformed interval.
    #[instrument(skip(self), fields(crag_id = %crag_id))]
    pub async fn get_forecast(&self, crag_id: CragId) -> Result<Cragcast, ApplicationError> {
        let location = self.crags.resolve(crag_id).await?;
        debug!(location = %location, "Resolved crag location");
        self.forecast_for_location(&location).await
    }

    /// Forecast for explicit coordinates
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_forecast`], minus the crag lookup.
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn forecast_for_location(
        &self,
        location: &GeoLocation,
    ) -> Result<Cragcast, ApplicationError> {
        let series = self.gridpoints.fetch_gridpoint_series(location).await?;
        debug!(
            layers = series.len(),
            samples = series.sample_count(),
            "Fetched gridpoint series"
        );

        let forecast = build_cragcast(&series, self.day_boundary)?;
        info!(
            days = forecast.days.len(),
            hours = forecast.hour_count(),
            "Forecast assembled"
        );
        Ok(forecast)
    }

    /// Whether the upstream provider is reachable
    pub async fn is_healthy(&self) -> bool {
        self.gridpoints.is_available().await
    }
}
