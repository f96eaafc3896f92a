//! Domain layer for Cragcast
//!
//! Contains the forecast entities, value objects and domain errors, plus the
//! pure helpers (interval parsing, unit conversion) the forecast engine is
//! built on. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
