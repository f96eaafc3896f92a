//! Daily reduction

use domain::{DailyForecast, DayBoundary, HourlyForecast};

/// Fold an ascending list of hours into days
///
/// A new day starts with the first hour and whenever an hour is not on the
/// current day according to `day_boundary`. Sums become present once any
/// hour contributes; peaks track the largest present value; the low starts
/// at [`domain::LOW_TEMPERATURE_SEED_FAHRENHEIT`]. Every hour is appended to
/// its day whether or not it carried data.
#[must_use]
pub fn reduce_days(hours: Vec<HourlyForecast>, day_boundary: DayBoundary) -> Vec<DailyForecast> {
    let mut days: Vec<DailyForecast> = Vec::new();

    for hour in hours {
        match days.last_mut() {
            Some(day) if day_boundary.same_day(&day.date, &hour.start_of_hour) => {
                fold_hour(day, hour);
            },
            _ => {
                let mut day = DailyForecast::new(hour.start_of_hour);
                fold_hour(&mut day, hour);
                days.push(day);
            },
        }
    }

    days
}

fn fold_hour(day: &mut DailyForecast, hour: HourlyForecast) {
    accumulate(&mut day.total_precipitation_mm, hour.precipitation_mm);
    accumulate(&mut day.total_snowfall_mm, hour.snowfall_mm);
    keep_max(&mut day.precipitation_chance_peak, hour.precipitation_chance);
    keep_max(&mut day.humidity_peak, hour.humidity);
    keep_max(&mut day.high_fahrenheit, hour.temperature_fahrenheit);
    if let Some(temperature) = hour.temperature_fahrenheit {
        day.low_fahrenheit = day.low_fahrenheit.min(temperature);
    }
    day.hours.push(hour);
}

fn accumulate(total: &mut Option<f64>, value: Option<f64>) {
    if let Some(value) = value {
        *total = Some(total.unwrap_or(0.0) + value);
    }
}

fn keep_max(peak: &mut Option<f64>, value: Option<f64>) {
    if let Some(value) = value {
        *peak = Some(peak.map_or(value, |current| current.max(value)));
    }
}
