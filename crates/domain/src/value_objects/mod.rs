//! Value Objects - Immutable, identity-less domain primitives

mod crag_id;
mod day_boundary;
mod geo_location;
mod interval;
mod layer_kind;
mod temperature;

pub use crag_id::CragId;
pub use day_boundary::DayBoundary;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use interval::interval_start;
pub use layer_kind::LayerKind;
pub use temperature::{celsius_to_fahrenheit, fahrenheit};
