//! NOAA gridpoint adapter - Implements GridpointPort using integration_noaa

use application::error::ApplicationError;
use application::ports::GridpointPort;
use async_trait::async_trait;
use domain::{GeoLocation, GridpointSeries, LayerKind, LayerSample, QuantitativeLayer};
use integration_noaa::{
    GridpointClient, GridpointData, NoaaClient, NoaaConfig, NoaaError, QuantitativeValueLayer,
};
use tracing::{debug, instrument};

/// Adapter for gridpoint data from api.weather.gov
#[derive(Debug)]
pub struct NoaaGridpointAdapter {
    client: NoaaClient,
}

impl NoaaGridpointAdapter {
    /// Create an adapter for the configured NOAA endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: NoaaConfig) -> Result<Self, ApplicationError> {
        let client =
            NoaaClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: NoaaError) -> ApplicationError {
        match err {
            NoaaError::ConnectionFailed(e)
            | NoaaError::RequestFailed(e)
            | NoaaError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            NoaaError::ParseError(e) => {
                ApplicationError::Internal(format!("Malformed gridpoint response: {e}"))
            },
            NoaaError::NotFound(e) => {
                ApplicationError::NotFound(format!("No NOAA gridpoint for {e}"))
            },
            NoaaError::InvalidCoordinates => {
                ApplicationError::InvalidOperation("Invalid coordinates".into())
            },
            NoaaError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_layer(layer: QuantitativeValueLayer) -> QuantitativeLayer {
        let samples = layer
            .values
            .into_iter()
            .map(|sample| LayerSample::new(sample.valid_time, sample.value))
            .collect();

        let mapped = QuantitativeLayer::new(samples);
        match layer.uom {
            Some(uom) => mapped.with_uom(uom),
            None => mapped,
        }
    }

    /// Convert the wire payload into the domain series
    fn map_gridpoint(data: GridpointData) -> GridpointSeries {
        let layers = [
            (LayerKind::Temperature, data.temperature),
            (LayerKind::Humidity, data.relative_humidity),
            (
                LayerKind::PrecipitationProbability,
                data.probability_of_precipitation,
            ),
            (
                LayerKind::PrecipitationAmount,
                data.quantitative_precipitation,
            ),
            (LayerKind::SkyCover, data.sky_cover),
            (LayerKind::SnowfallAmount, data.snowfall_amount),
            (LayerKind::WindDirection, data.wind_direction),
            (LayerKind::WindSpeed, data.wind_speed),
        ];

        layers
            .into_iter()
            .filter_map(|(kind, layer)| layer.map(|layer| (kind, layer)))
            .fold(GridpointSeries::new(), |series, (kind, layer)| {
                series.with_layer(kind, Self::map_layer(layer))
            })
    }
}

#[async_trait]
impl GridpointPort for NoaaGridpointAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_gridpoint_series(
        &self,
        location: &GeoLocation,
    ) -> Result<GridpointSeries, ApplicationError> {
        let result = self
            .client
            .get_gridpoint(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(data) => {
                debug!(
                    layers = data.layer_count(),
                    update_time = ?data.update_time,
                    "Retrieved gridpoint data"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get gridpoint data");
            },
        }

        result.map(Self::map_gridpoint)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
