//! Hourly and daily forecast entities

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::value_objects::LayerKind;

/// Initial low temperature of every day, in Fahrenheit
///
/// Greater than any physically realizable Fahrenheit reading, so the first
/// real sample always replaces it. A day without temperature samples keeps
/// this value in its serialized output.
pub const LOW_TEMPERATURE_SEED_FAHRENHEIT: f64 = 1000.0;

/// Merged view of all layers for one hour
///
/// Every field is optional: `None` means no layer reported that quantity for
/// this hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Start of the hour; the merge key
    pub start_of_hour: DateTime<FixedOffset>,
    /// Air temperature (°F)
    pub temperature_fahrenheit: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
    /// Probability of precipitation (%)
    pub precipitation_chance: Option<f64>,
    /// Precipitation amount (mm)
    pub precipitation_mm: Option<f64>,
    /// Sky cover (%)
    pub sky_cover_percent: Option<f64>,
    /// Snowfall amount (mm)
    pub snowfall_mm: Option<f64>,
    /// Wind direction (degrees)
    pub wind_direction_degrees: Option<f64>,
    /// Wind speed (km/h)
    pub wind_speed_kmh: Option<f64>,
}

impl HourlyForecast {
    /// Create an hour with only its start set
    #[must_use]
    pub const fn new(start_of_hour: DateTime<FixedOffset>) -> Self {
        Self {
            start_of_hour,
            temperature_fahrenheit: None,
            humidity: None,
            precipitation_chance: None,
            precipitation_mm: None,
            sky_cover_percent: None,
            snowfall_mm: None,
            wind_direction_degrees: None,
            wind_speed_kmh: None,
        }
    }

    fn field_mut(&mut self, kind: LayerKind) -> &mut Option<f64> {
        match kind {
            LayerKind::Temperature => &mut self.temperature_fahrenheit,
            LayerKind::Humidity => &mut self.humidity,
            LayerKind::PrecipitationProbability => &mut self.precipitation_chance,
            LayerKind::PrecipitationAmount => &mut self.precipitation_mm,
            LayerKind::SkyCover => &mut self.sky_cover_percent,
            LayerKind::SnowfallAmount => &mut self.snowfall_mm,
            LayerKind::WindDirection => &mut self.wind_direction_degrees,
            LayerKind::WindSpeed => &mut self.wind_speed_kmh,
        }
    }

    /// Write the field owned by `kind`
    ///
    /// The value is stored as given; unit conversion happens before this call.
    pub fn set(&mut self, kind: LayerKind, value: Option<f64>) {
        *self.field_mut(kind) = value;
    }
}

/// Daily headline figures plus the hours they were computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Start of the first hour folded into this day
    pub date: DateTime<FixedOffset>,
    /// Sum of hourly precipitation (mm); `None` until an hour reports it
    pub total_precipitation_mm: Option<f64>,
    /// Sum of hourly snowfall (mm); `None` until an hour reports it
    pub total_snowfall_mm: Option<f64>,
    /// Highest hourly probability of precipitation (%)
    pub precipitation_chance_peak: Option<f64>,
    /// Highest hourly relative humidity (%)
    pub humidity_peak: Option<f64>,
    /// Lowest hourly temperature (°F), seeded with
    /// [`LOW_TEMPERATURE_SEED_FAHRENHEIT`]
    pub low_fahrenheit: f64,
    /// Highest hourly temperature (°F)
    pub high_fahrenheit: Option<f64>,
    /// Hours of this day in ascending order
    pub hours: Vec<HourlyForecast>,
}

impl DailyForecast {
    /// Create an empty day starting at `date`
    #[must_use]
    pub const fn new(date: DateTime<FixedOffset>) -> Self {
        Self {
            date,
            total_precipitation_mm: None,
            total_snowfall_mm: None,
            precipitation_chance_peak: None,
            humidity_peak: None,
            low_fahrenheit: LOW_TEMPERATURE_SEED_FAHRENHEIT,
            high_fahrenheit: None,
            hours: Vec::new(),
        }
    }
}

/// A complete forecast: days in ascending order, each owning its hours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cragcast {
    /// Days in ascending order
    pub days: Vec<DailyForecast>,
}

impl Cragcast {
    /// Wrap reduced days
    #[must_use]
    pub const fn new(days: Vec<DailyForecast>) -> Self {
        Self { days }
    }

    /// Total number of hours across all days
    #[must_use]
    pub fn hour_count(&self) -> usize {
        self.days.iter().map(|day| day.hours.len()).sum()
    }

    /// Whether the forecast has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
