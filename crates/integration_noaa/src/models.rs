//! Wire models for the api.weather.gov endpoints this crate uses
//!
//! Only the fields the forecast engine reads are modelled; everything else
//! in the (large) payloads is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// `GET /points/{lat},{lon}` response envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PointsResponse {
    pub properties: PointProperties,
}

/// Grid metadata for a coordinate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    /// Forecast office identifier (e.g. `BOU`)
    #[serde(default)]
    pub grid_id: Option<String>,
    /// Grid column
    #[serde(default)]
    pub grid_x: Option<i64>,
    /// Grid row
    #[serde(default)]
    pub grid_y: Option<i64>,
    /// Absolute URL of the raw gridpoint data
    #[serde(default)]
    pub forecast_grid_data: Option<String>,
}

/// `GET /gridpoints/{office}/{x},{y}` response envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GridpointResponse {
    pub properties: GridpointData,
}

/// A single `(validTime, value)` sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    /// ISO 8601 interval, e.g. `2023-04-27T07:00:00+00:00/PT5H`
    pub valid_time: String,
    /// Value in the layer's unit; `null` upstream becomes `None`
    #[serde(default)]
    pub value: Option<f64>,
}

/// A quantitative layer of the gridpoint payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantitativeValueLayer {
    /// Unit of measure, e.g. `wmoUnit:degC`
    #[serde(default)]
    pub uom: Option<String>,
    /// Samples in upstream order
    #[serde(default)]
    pub values: Vec<QuantitativeValue>,
}

/// Raw layered data for one grid cell
///
/// Layers NOAA does not report for a cell are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridpointData {
    /// When NOAA last updated this cell
    #[serde(default)]
    pub update_time: Option<String>,
    /// Air temperature
    #[serde(default)]
    pub temperature: Option<QuantitativeValueLayer>,
    /// Relative humidity
    #[serde(default)]
    pub relative_humidity: Option<QuantitativeValueLayer>,
    /// Probability of precipitation
    #[serde(default)]
    pub probability_of_precipitation: Option<QuantitativeValueLayer>,
    /// Quantitative precipitation
    #[serde(default)]
    pub quantitative_precipitation: Option<QuantitativeValueLayer>,
    /// Sky cover
    #[serde(default)]
    pub sky_cover: Option<QuantitativeValueLayer>,
    /// Snowfall amount
    #[serde(default)]
    pub snowfall_amount: Option<QuantitativeValueLayer>,
    /// Wind direction
    #[serde(default)]
    pub wind_direction: Option<QuantitativeValueLayer>,
    /// Wind speed
    #[serde(default)]
    pub wind_speed: Option<QuantitativeValueLayer>,
}

impl GridpointData {
    /// Number of layers present
    #[must_use]
    pub fn layer_count(&self) -> usize {
        [
            &self.temperature,
            &self.relative_humidity,
            &self.probability_of_precipitation,
            &self.quantitative_precipitation,
            &self.sky_cover,
            &self.snowfall_amount,
            &self.wind_direction,
            &self.wind_speed,
        ]
        .iter()
        .filter(|layer| layer.is_some())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_gridpoint_layers() {
        let json = serde_json::json!({
            "properties": {
                "updateTime": "2023-04-27T06:12:31+00:00",
                "validTimes": "2023-04-27T00:00:00+00:00/P7DT13H",
                "elevation": { "unitCode": "wmoUnit:m", "value": 1655.9 },
                "temperature": {
                    "uom": "wmoUnit:degC",
                    "values": [
                        { "validTime": "2023-04-27T07:00:00+00:00/PT2H", "value": 8.3 },
                        { "validTime": "2023-04-27T09:00:00+00:00/PT1H", "value": null }
                    ]
                },
                "dewpoint": { "uom": "wmoUnit:degC", "values": [] },
                "windSpeed": { "uom": "wmoUnit:km_h-1", "values": [] }
            }
        });

        let response: GridpointResponse = serde_json::from_value(json).unwrap();
        let data = response.properties;

        let temperature = data.temperature.as_ref().unwrap();
        assert_eq!(temperature.uom.as_deref(), Some("wmoUnit:degC"));
        assert_eq!(temperature.values.len(), 2);
        assert_eq!(temperature.values[0].value, Some(8.3));
        assert_eq!(temperature.values[1].value, None);
        assert!(data.relative_humidity.is_none());
        assert_eq!(data.layer_count(), 2);
    }

    #[test]
    fn deserializes_point_metadata() {
        let json = serde_json::json!({
            "properties": {
                "gridId": "BOU",
                "gridX": 53,
                "gridY": 74,
                "forecastGridData": "https://api.weather.gov/gridpoints/BOU/53,74",
                "timeZone": "America/Denver"
            }
        });

        let response: PointsResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.properties.grid_id.as_deref(), Some("BOU"));
        assert_eq!(response.properties.grid_x, Some(53));
        assert_eq!(response.properties.grid_y, Some(74));
        assert_eq!(
            response.properties.forecast_grid_data.as_deref(),
            Some("https://api.weather.gov/gridpoints/BOU/53,74")
        );
    }

    #[test]
    fn missing_values_default_to_empty() {
        let layer: QuantitativeValueLayer = serde_json::from_str("{}").unwrap();
        assert!(layer.values.is_empty());
        assert!(layer.uom.is_none());
    }
}
