//! Hourly sequencing

use domain::HourlyForecast;

use super::merger::HourlyMap;

/// Drain merged hours into a list ordered by start instant
///
/// Keys are unique instants, so there are no ties to break.
#[must_use]
pub fn sequence_hours(hours: HourlyMap) -> Vec<HourlyForecast> {
    hours.into_values().collect()
}
