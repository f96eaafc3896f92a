//! NOAA gridpoint integration
//!
//! Client for the National Weather Service API (<https://api.weather.gov>).
//! Resolves a coordinate to its forecast grid cell and downloads the raw
//! quantitative layers for that cell. No API key is required, but every
//! request must carry an identifying `User-Agent`.

pub mod client;
mod models;

pub use client::{GridpointClient, NoaaClient, NoaaConfig, NoaaError};
pub use models::{GridpointData, PointProperties, QuantitativeValue, QuantitativeValueLayer};
