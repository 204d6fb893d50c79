//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding and suggestion lookups
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates, even after relaxing
    /// the query
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

impl GeocodingError {
    /// Whether the failure came from the transport rather than the address
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout)
    }
}
