//! Temperature unit conversion

/// Convert a Celsius reading to Fahrenheit
#[must_use]
pub fn fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert an optional Celsius reading to Fahrenheit, preserving absence
#[must_use]
pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<f64> {
    celsius.map(fahrenheit)
}
