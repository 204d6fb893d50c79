//! Quotation error types

use thiserror::Error;

/// Errors that can occur while requesting a delivery quotation
#[derive(Debug, Error)]
pub enum QuotationError {
    /// Connection to the quotation service failed
    #[error("Quotation connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Quotation request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The provider rejected the request (non-2xx status)
    ///
    /// `message` carries the most specific message the response body
    /// offered: top-level `message`, else the first `errors[].message`,
    /// else the raw body.
    #[error("Quotation rejected (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Normalized provider message
        message: String,
    },

    /// Failed to parse the provider response
    #[error("Quotation parse error: {0}")]
    ParseError(String),

    /// Request signing failed
    #[error("Quotation signing failed: {0}")]
    Signing(String),

    /// Configuration error
    #[error("Quotation configuration error: {0}")]
    ConfigurationError(String),
}

impl QuotationError {
    /// Whether the failure came from the transport rather than the provider
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }
}
