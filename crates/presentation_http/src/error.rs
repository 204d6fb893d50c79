//! API error handling
//!
//! Maps application errors to HTTP responses. Failure kinds stay structured
//! in the `code` field; the `error` field carries the most specific
//! human-readable message available (for provider rejections, the
//! provider's own message).

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),

    #[error("Quote failed: {0}")]
    QuoteFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Stable error code
    pub code: String,
}

impl ApiError {
    /// The stable error code reported to clients
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::GeocodingFailed(_) => "geocoding_failed",
            Self::QuoteFailed(_) => "quote_failed",
            Self::Network(_) => "network_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// HTTP status for this error
    ///
    /// Everything except validation and lookups surfaces as 500: quote
    /// failures are upstream conditions the client cannot correct.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::GeocodingFailed(_) | Self::QuoteFailed(_) | Self::Network(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    fn message(&self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::NotFound(msg)
            | Self::GeocodingFailed(msg)
            | Self::QuoteFailed(msg)
            | Self::Network(msg)
            | Self::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
            code: self.code().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::BadRequest(msg),
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::GeocodingFailed(address) => {
                Self::GeocodingFailed(format!("Could not resolve address: {address}"))
            },
            ApplicationError::QuoteRejected(msg) => Self::QuoteFailed(msg),
            ApplicationError::ExternalService(msg) => Self::Network(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
