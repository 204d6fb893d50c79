//! Request and response models for the Lalamove v3 quotation API
//!
//! The wire format is camelCase JSON with string-encoded decimal
//! coordinates and amounts; conversions from the domain types happen here.

use chrono::{DateTime, Utc};
use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuotationError;

/// A string-encoded coordinate pair as the API expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: String,
    pub lng: String,
}

impl From<GeoLocation> for Coordinates {
    fn from(location: GeoLocation) -> Self {
        Self {
            lat: location.latitude_string(),
            lng: location.longitude_string(),
        }
    }
}

/// One waypoint (pickup or drop-off) in a quotation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub coordinates: Coordinates,
    pub address: String,
}

impl Stop {
    /// Create a stop from coordinates and a display address
    #[must_use]
    pub fn new(location: GeoLocation, address: impl Into<String>) -> Self {
        Self {
            coordinates: location.into(),
            address: address.into(),
        }
    }
}

/// Fixed parcel descriptor for fresh-poultry orders
///
/// Every order ships as one upright-handled food parcel under 5kg; larger
/// orders are split by the shop before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelItem {
    pub quantity: String,
    pub weight: String,
    pub categories: Vec<String>,
    pub handling_instructions: Vec<String>,
}

impl Default for ParcelItem {
    fn default() -> Self {
        Self {
            quantity: "1".to_string(),
            weight: "LESS_THAN_5KG".to_string(),
            categories: vec!["FOOD_AND_BEVERAGE".to_string()],
            handling_instructions: vec!["KEEP_UPRIGHT".to_string()],
        }
    }
}

/// Input for a quotation: the stop pair and optional scheduled dispatch
#[derive(Debug, Clone)]
pub struct QuotationRequest {
    /// Pickup stop (always first in the stop list)
    pub pickup: Stop,
    /// Drop-off stop
    pub dropoff: Stop,
    /// Scheduled pickup time; `None` means immediate dispatch
    pub schedule_at: Option<DateTime<Utc>>,
}

impl QuotationRequest {
    /// Create an immediate-dispatch quotation request
    #[must_use]
    pub fn new(pickup: Stop, dropoff: Stop) -> Self {
        Self {
            pickup,
            dropoff,
            schedule_at: None,
        }
    }

    /// Set a scheduled pickup time
    #[must_use]
    pub fn with_schedule_at(mut self, schedule_at: DateTime<Utc>) -> Self {
        self.schedule_at = Some(schedule_at);
        self
    }
}

/// Serialized request body: `{"data": {...}}`
#[derive(Debug, Serialize)]
pub(crate) struct RequestBody {
    pub data: RequestData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestData {
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_at: Option<String>,
    pub stops: Vec<Stop>,
    pub item: ParcelItem,
    pub is_route_optimized: bool,
}

impl RequestBody {
    /// Assemble the wire body for a quotation request
    pub(crate) fn build(request: &QuotationRequest, service_type: &str) -> Self {
        Self {
            data: RequestData {
                service_type: service_type.to_string(),
                schedule_at: request
                    .schedule_at
                    .map(|at| at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
                stops: vec![request.pickup.clone(), request.dropoff.clone()],
                item: ParcelItem::default(),
                is_route_optimized: false,
            },
        }
    }
}

/// Price breakdown of a quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Total price, string-encoded decimal
    pub total: String,
    /// Settlement currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Base fare before surcharges
    #[serde(default)]
    pub base: Option<String>,
}

/// A priced delivery quotation
///
/// Only valid for the exact (pickup, drop-off, schedule) triple it was
/// requested with; any input change requires a fresh quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    /// Provider quotation ID, when present
    pub quotation_id: Option<String>,
    /// Price breakdown with the string-encoded decimal total
    pub price_breakdown: PriceBreakdown,
    /// The full provider payload, relayed verbatim at the HTTP boundary
    pub raw: Value,
}

impl Quotation {
    /// Parse a quotation from a successful response body
    ///
    /// The v3 API nests the payload under `data`; older gateway responses
    /// returned it at the top level, so both shapes are accepted.
    ///
    /// # Errors
    ///
    /// Returns `QuotationError::ParseError` if the body is not JSON or has
    /// no price breakdown.
    pub fn from_body(body: &str) -> Result<Self, QuotationError> {
        let raw: Value = serde_json::from_str(body)
            .map_err(|e| QuotationError::ParseError(e.to_string()))?;

        let data = raw.get("data").unwrap_or(&raw);

        let price_breakdown: PriceBreakdown = data
            .get("priceBreakdown")
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| QuotationError::ParseError(e.to_string()))?
            .ok_or_else(|| {
                QuotationError::ParseError("Response has no priceBreakdown".to_string())
            })?;

        let quotation_id = data
            .get("quotationId")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Ok(Self {
            quotation_id,
            price_breakdown,
            raw,
        })
    }
}

/// Extract the most specific error message from a provider response body
///
/// Precedence: top-level `message`, else the first `errors[].message`, else
/// the raw body text.
#[must_use]
pub fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    if let Some(message) = value.get("message").and_then(Value::as_str) {
        if !message.is_empty() {
            return message.to_string();
        }
    }

    if let Some(message) = value
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
    {
        return message.to_string();
    }

    body.to_string()
}
