//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (malformed interval, unknown layer, ...)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather provider failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid operation or input
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
