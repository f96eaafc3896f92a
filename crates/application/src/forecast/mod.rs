//! Forecast engine
//!
//! Turns a raw [`GridpointSeries`] into a [`Cragcast`] in three passes:
//!
//! 1. [`merge_layers`] upserts every layer's samples into one map keyed by
//!    the start of the hour they apply to;
//! 2. [`sequence_hours`] drains that map into an ascending list;
//! 3. [`reduce_days`] folds the list into per-day headline figures.
//!
//! All working state is owned by the call; nothing is shared between
//! requests.

mod merger;
mod reducer;
mod sequencer;

use std::collections::BTreeMap;

use domain::{Cragcast, DayBoundary, DomainError, GridpointSeries};

pub use merger::{HourlyMap, merge_layers, merge_layers_in_order};
pub use reducer::reduce_days;
pub use sequencer::sequence_hours;

/// Run the whole pipeline over an already-fetched series
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` if any sample carries a malformed
/// validity window. No partial forecast is produced in that case.
pub fn build_cragcast(
    series: &GridpointSeries,
    day_boundary: DayBoundary,
) -> Result<Cragcast, DomainError> {
    let mut hours = BTreeMap::new();
    merge_layers(series, &mut hours)?;
    let hours = sequence_hours(hours);
    Ok(Cragcast::new(reduce_days(hours, day_boundary)))
}
