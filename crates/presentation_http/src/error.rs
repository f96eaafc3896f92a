//! API error handling
//!
//! Maps application failures onto HTTP status codes and a small JSON body.
//! Internal errors keep their message in `details` and return a generic
//! `error` string.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message, details) = match self {
            Self::BadRequest(msg) => ("bad_request", msg, None),
            Self::NotFound(msg) => ("not_found", msg, None),
            Self::RateLimited => ("rate_limited", "Rate limit exceeded".to_string(), None),
            Self::ServiceUnavailable(msg) => ("service_unavailable", msg, None),
            Self::Internal(msg) => {
                warn!(error = %msg, "Request failed with internal error");
                (
                    "internal_error",
                    "An internal error occurred".to_string(),
                    Some(msg),
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DomainError::ValidationError(msg)) => Self::BadRequest(msg),
            // Malformed intervals and unknown layers come from provider data
            ApplicationError::Domain(e) => Self::Internal(e.to_string()),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::InvalidOperation(msg) => Self::BadRequest(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
