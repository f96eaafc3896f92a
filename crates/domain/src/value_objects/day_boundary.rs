//! Day boundary policy used when grouping hours into days

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

/// How the daily reducer decides that an hour starts a new day
///
/// `DayOfMonth` compares only the day-of-month component. Two hours exactly
/// one month apart with nothing in between are grouped into the same day.
/// That never happens for contiguous forecast data, and it is kept as the
/// default so daily output matches earlier releases. `CalendarDate` compares
/// the full date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Compare day-of-month only
    #[default]
    DayOfMonth,
    /// Compare year, month and day
    CalendarDate,
}

impl DayBoundary {
    /// Whether `a` and `b` belong to the same day under this policy
    ///
    /// Each instant is evaluated in its own UTC offset.
    #[must_use]
    pub fn same_day(self, a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> bool {
        match self {
            Self::DayOfMonth => a.day() == b.day(),
            Self::CalendarDate => a.date_naive() == b.date_naive(),
        }
    }
}
