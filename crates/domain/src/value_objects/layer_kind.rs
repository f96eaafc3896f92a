//! Quantitative layer kinds
//!
//! The gridpoint payload carries dozens of named layers; the forecast engine
//! only reads the eight listed here. Each kind owns exactly one field of an
//! [`HourlyForecast`](crate::entities::HourlyForecast).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One of the eight quantitative layers merged into hourly forecasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    /// Air temperature, reported in Celsius
    Temperature,
    /// Relative humidity (%)
    #[serde(rename = "relativeHumidity")]
    Humidity,
    /// Probability of precipitation (%)
    #[serde(rename = "probabilityOfPrecipitation")]
    PrecipitationProbability,
    /// Quantitative precipitation (mm)
    #[serde(rename = "quantitativePrecipitation")]
    PrecipitationAmount,
    /// Sky cover (%)
    SkyCover,
    /// Snowfall amount (mm)
    SnowfallAmount,
    /// Wind direction (degrees)
    WindDirection,
    /// Wind speed (km/h)
    WindSpeed,
}

impl LayerKind {
    /// All layers, in the order the merger processes them
    pub const ALL: [Self; 8] = [
        Self::Temperature,
        Self::Humidity,
        Self::PrecipitationProbability,
        Self::PrecipitationAmount,
        Self::SkyCover,
        Self::SnowfallAmount,
        Self::WindDirection,
        Self::WindSpeed,
    ];

    /// Name of the layer in the gridpoint payload
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "relativeHumidity",
            Self::PrecipitationProbability => "probabilityOfPrecipitation",
            Self::PrecipitationAmount => "quantitativePrecipitation",
            Self::SkyCover => "skyCover",
            Self::SnowfallAmount => "snowfallAmount",
            Self::WindDirection => "windDirection",
            Self::WindSpeed => "windSpeed",
        }
    }

    /// Whether raw samples of this layer are Celsius and need converting
    #[must_use]
    pub const fn is_celsius(&self) -> bool {
        matches!(self, Self::Temperature)
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for LayerKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| DomainError::UnknownLayer(s.to_string()))
    }
}
