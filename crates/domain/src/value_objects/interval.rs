//! Interval-encoded timestamps
//!
//! Gridpoint samples carry a validity window such as
//! `2023-04-27T07:00:00+00:00/PT5H`: an RFC 3339 start followed by an
//! ISO 8601 duration. Only the start is used as the merge key, so a sample
//! spanning several hours is attributed to its first hour.

use chrono::{DateTime, FixedOffset};

use crate::errors::DomainError;

/// Separator between the start instant and the duration
const INTERVAL_SEPARATOR: char = '/';

/// Extract the start instant of an interval-encoded timestamp
///
/// The returned instant keeps the offset written in the string.
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` if the separator is missing or the
/// start is not a valid RFC 3339 date-time.
pub fn interval_start(valid_time: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    let (start, _duration) = valid_time.split_once(INTERVAL_SEPARATOR).ok_or_else(|| {
        DomainError::InvalidInterval(format!("missing '/' separator in {valid_time:?}"))
    })?;

    DateTime::parse_from_rfc3339(start)
        .map_err(|e| DomainError::InvalidInterval(format!("{valid_time:?}: {e}")))
}
