//! Domain entities

mod forecast;
mod gridpoint;

pub use forecast::{Cragcast, DailyForecast, HourlyForecast, LOW_TEMPERATURE_SEED_FAHRENHEIT};
pub use gridpoint::{GridpointSeries, LayerSample, QuantitativeLayer};
