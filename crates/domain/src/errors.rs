//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// An interval-encoded timestamp did not have the `<start>/<duration>`
    /// shape, or its start was not a valid RFC 3339 date-time
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A layer name outside the fixed set of known layers was requested
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
