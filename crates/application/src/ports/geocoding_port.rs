//! Geocoding service port
//!
//! Defines the interface for resolving free-text addresses to coordinates
//! and for type-ahead address suggestions. Adapters in the infrastructure
//! layer implement this port using a geocoding API.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A single address candidate for type-ahead entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    /// Display address
    pub address: String,
    /// Resolved coordinates
    pub location: GeoLocation,
}

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text address to coordinates
    ///
    /// Failure to resolve surfaces as
    /// [`ApplicationError::GeocodingFailed`], distinguishable from a
    /// downstream quotation failure.
    async fn geocode(&self, address: &str) -> Result<GeoLocation, ApplicationError>;

    /// Look up address candidates for a partial query
    async fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>, ApplicationError>;

    /// Check if the geocoding service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[test]
    fn suggestion_serializes() {
        let suggestion = AddressSuggestion {
            address: "Jalan Ampang, Kuala Lumpur".to_string(),
            location: GeoLocation::new(3.1605, 101.7158).unwrap(),
        };
        let json = serde_json::to_string(&suggestion).unwrap();
        assert!(json.contains("Jalan Ampang"));
    }
}
