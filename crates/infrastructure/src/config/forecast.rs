//! Forecast and crag configuration.

use domain::{CragId, DayBoundary, GeoLocation, InvalidCoordinates};
use serde::{Deserialize, Serialize};

/// Forecast engine settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// How hourly records are grouped into days
    #[serde(default)]
    pub day_boundary: DayBoundary,
}

/// A crag known to the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CragConfig {
    /// Crag identifier used in request paths
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl CragConfig {
    /// Typed crag identifier
    #[must_use]
    pub const fn crag_id(&self) -> CragId {
        CragId::new(self.id)
    }

    /// Convert to a validated domain location
    pub fn to_geo_location(&self) -> Result<GeoLocation, InvalidCoordinates> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

/// The crag the service ships with
pub(crate) fn default_crags() -> Vec<CragConfig> {
    let boulder = GeoLocation::boulder();
    vec![CragConfig {
        id: 1,
        name: "Boulder".to_string(),
        latitude: boulder.latitude(),
        longitude: boulder.longitude(),
    }]
}
