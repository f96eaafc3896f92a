//! NOAA gridpoint client
//!
//! HTTP client for the National Weather Service API. A forecast is obtained
//! in two hops: `/points/{lat},{lon}` names the grid cell, and the cell's
//! `forecastGridData` URL returns the raw layers.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{GridpointData, GridpointResponse, PointsResponse};

/// NOAA client errors
#[derive(Debug, Error)]
pub enum NoaaError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// NOAA has no grid cell for the location
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// NOAA service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoaaConfig {
    /// API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// `User-Agent` sent with every request; NOAA rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("cragcast/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for NoaaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Client trait for fetching raw gridpoint data
#[async_trait]
pub trait GridpointClient: Send + Sync {
    /// Get the raw gridpoint layers covering a location
    async fn get_gridpoint(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GridpointData, NoaaError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// api.weather.gov HTTP client implementation
#[derive(Debug)]
pub struct NoaaClient {
    client: Client,
    config: NoaaConfig,
}

impl NoaaClient {
    /// Create a new NOAA client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: NoaaConfig) -> Result<Self, NoaaError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/geo+json"),
        );

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| NoaaError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), NoaaError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(NoaaError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the points lookup URL
    ///
    /// NOAA answers a redirect for more than four decimal places, so the
    /// coordinates are rounded here.
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{latitude:.4},{longitude:.4}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NoaaError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NoaaError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NoaaError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(NoaaError::NotFound(url.to_string()));
        }
        if status.is_server_error() {
            return Err(NoaaError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(NoaaError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NoaaError::RequestFailed(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| NoaaError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GridpointClient for NoaaClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_gridpoint(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GridpointData, NoaaError> {
        Self::validate_coordinates(latitude, longitude)?;

        let points_url = self.build_points_url(latitude, longitude);
        debug!(url = %points_url, "Resolving gridpoint");

        let points: PointsResponse = self.get_json(&points_url).await?;
        let grid_url = points.properties.forecast_grid_data.ok_or_else(|| {
            NoaaError::ParseError("No forecastGridData in points response".to_string())
        })?;

        debug!(
            url = %grid_url,
            office = ?points.properties.grid_id,
            grid_x = ?points.properties.grid_x,
            grid_y = ?points.properties.grid_y,
            "Fetching gridpoint data"
        );

        let gridpoint: GridpointResponse = self.get_json(&grid_url).await?;

        debug!(
            layers = gridpoint.properties.layer_count(),
            "Received gridpoint data"
        );

        Ok(gridpoint.properties)
    }

    async fn is_healthy(&self) -> bool {
        self.client
            .get(&self.config.base_url)
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }
}
