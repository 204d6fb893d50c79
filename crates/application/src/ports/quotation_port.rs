//! Delivery quotation port
//!
//! Defines the interface for requesting priced delivery quotations from a
//! logistics provider. Adapters in the infrastructure layer implement this
//! port using the provider's API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApplicationError;

/// One waypoint of a quotation: coordinates plus a display address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteStop {
    /// Stop coordinates
    pub location: GeoLocation,
    /// Human-readable address sent to the provider
    pub address: String,
}

impl QuoteStop {
    /// Create a stop
    #[must_use]
    pub fn new(location: GeoLocation, address: impl Into<String>) -> Self {
        Self {
            location,
            address: address.into(),
        }
    }
}

/// A priced quotation as seen by the application layer
///
/// Only valid for the (pickup, drop-off, schedule) triple it was computed
/// for; callers must re-request after any input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryQuotation {
    /// Provider quotation ID, when present
    pub quotation_id: Option<String>,
    /// Total price, string-encoded decimal
    pub total: String,
    /// Settlement currency code, when present
    pub currency: Option<String>,
    /// Full provider payload, relayed verbatim at the HTTP boundary
    pub payload: Value,
}

/// Port for delivery quotation operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuotationPort: Send + Sync {
    /// Request a quotation for a pickup/drop-off pair
    ///
    /// `schedule_at` requests a future dispatch instead of immediate pickup.
    async fn quote(
        &self,
        pickup: &QuoteStop,
        dropoff: &QuoteStop,
        schedule_at: Option<DateTime<Utc>>,
    ) -> Result<DeliveryQuotation, ApplicationError>;

    /// Check if the quotation service is reachable
    async fn is_available(&self) -> bool;
}
