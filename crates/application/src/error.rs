//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The delivery address could not be resolved to coordinates
    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),

    /// The quotation provider rejected the request
    #[error("Quote rejected: {0}")]
    QuoteRejected(String),

    /// External service transport failure (timeout, connection refused)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the caller-side fee fallback applies to this error
    ///
    /// Every quote failure except invalid input is recoverable by
    /// substituting the configured default fee; delivery pricing never
    /// blocks order placement.
    #[must_use]
    pub const fn is_recoverable_quote_failure(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}
