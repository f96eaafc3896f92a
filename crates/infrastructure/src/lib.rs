//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the NOAA gridpoint
//! provider and the configured crag catalogue. Also owns configuration
//! loading.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::{AppConfig, CragConfig, ForecastConfig, NoaaAppConfig, ServerConfig};
