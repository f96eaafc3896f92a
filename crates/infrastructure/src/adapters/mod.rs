//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod crag_location_adapter;
mod noaa_gridpoint_adapter;

pub use crag_location_adapter::ConfiguredCragLocations;
pub use noaa_gridpoint_adapter::NoaaGridpointAdapter;
