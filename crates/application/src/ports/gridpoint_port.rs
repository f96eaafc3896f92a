//! Gridpoint data port
//!
//! Defines the interface for retrieving raw layered gridpoint series.

use async_trait::async_trait;
use domain::{GeoLocation, GridpointSeries};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the upstream weather-data provider
///
/// Implementations make a single attempt per call; transport, timeout and
/// caching policy live behind this seam.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GridpointPort: Send + Sync {
    /// Fetch the layered gridpoint series covering `location`
    async fn fetch_gridpoint_series(
        &self,
        location: &GeoLocation,
    ) -> Result<GridpointSeries, ApplicationError>;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;
}
