//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: NOAA weather service
//! - `forecast`: day grouping policy and the crag catalogue

mod forecast;
mod integrations;
mod server;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use forecast::{CragConfig, ForecastConfig};
pub use integrations::NoaaAppConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// NOAA weather service configuration
    #[serde(default)]
    pub noaa: NoaaAppConfig,

    /// Forecast engine configuration
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Crags that can be looked up by id
    #[serde(default = "forecast::default_crags")]
    pub crags: Vec<CragConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            noaa: NoaaAppConfig::default(),
            forecast: ForecastConfig::default(),
            crags: forecast::default_crags(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file (if present) and environment
    ///
    /// Environment variables use the `CRAGCAST_` prefix and `__` between
    /// nested keys, e.g. `CRAGCAST_FORECAST__DAY_BOUNDARY=calendar_date`.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., CRAGCAST_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("CRAGCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            crags = config.crags.len(),
            day_boundary = ?config.forecast.day_boundary,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check crag entries for bad coordinates and duplicate ids
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let mut seen = HashSet::with_capacity(self.crags.len());
        for crag in &self.crags {
            if crag.to_geo_location().is_err() {
                return Err(config::ConfigError::Message(format!(
                    "crag {} has invalid coordinates ({}, {})",
                    crag.id, crag.latitude, crag.longitude
                )));
            }
            if !seen.insert(crag.id) {
                return Err(config::ConfigError::Message(format!(
                    "crag id {} is configured more than once",
                    crag.id
                )));
            }
        }
        Ok(())
    }
}
