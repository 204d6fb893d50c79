//! Delivery quote and suggestion handlers
//!
//! The quote endpoint relays the provider payload verbatim so the
//! storefront can read whichever fields it needs; the fee endpoint applies
//! the fallback policy and always answers with a usable fee.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use domain::value_objects::{GeoLocation, ShopId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

use application::QuoteCommand;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for quote endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
    /// Free-text delivery address (mandatory)
    #[serde(default)]
    pub address: Option<String>,
    /// Pickup shop ID
    #[serde(default)]
    pub shop_id: Option<String>,
    /// Explicit drop-off latitude
    #[serde(default)]
    pub lat: Option<f64>,
    /// Explicit drop-off longitude
    #[serde(default)]
    pub lng: Option<f64>,
    /// Scheduled dispatch time (ISO-8601); absent means immediate
    #[serde(default)]
    pub schedule_at: Option<DateTime<Utc>>,
}

/// Response body for the fee endpoint
#[derive(Debug, Serialize)]
pub struct FeeResponse {
    /// Delivery fee, string-encoded decimal
    pub fee: String,
    /// Currency code
    pub currency: String,
    /// True when the fee is the configured fallback, not a live quote
    pub estimate: bool,
}

/// Query parameters for the suggestion endpoint
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    /// Partial address query
    #[serde(default)]
    pub q: Option<String>,
}

/// One suggestion entry
#[derive(Debug, Serialize)]
pub struct SuggestionItem {
    /// Display address
    pub address: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Response body for the suggestion endpoint
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// Candidates, most relevant first
    pub suggestions: Vec<SuggestionItem>,
}

/// Build a quote command from a request body
///
/// A malformed shop ID is treated like a failed shop lookup (default pickup)
/// rather than a hard error, matching the availability-first policy.
fn build_command(body: QuoteRequestBody) -> Result<QuoteCommand, ApiError> {
    let address = body.address.unwrap_or_default();
    if address.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Delivery address is required".to_string(),
        ));
    }

    let dropoff = match (body.lat, body.lng) {
        (Some(lat), Some(lng)) => Some(GeoLocation::new(lat, lng).map_err(|e| {
            ApiError::BadRequest(e.to_string())
        })?),
        (None, None) => None,
        _ => {
            return Err(ApiError::BadRequest(
                "lat and lng must be provided together".to_string(),
            ));
        },
    };

    let shop_id = body.shop_id.as_deref().and_then(|raw| {
        ShopId::parse(raw).map_or_else(
            |_| {
                warn!(shop_id = %raw, "Malformed shop ID, using default pickup location");
                None
            },
            Some,
        )
    });

    Ok(QuoteCommand {
        address,
        shop_id,
        dropoff,
        schedule_at: body.schedule_at,
    })
}

/// Request a delivery quotation
///
/// POST /v1/delivery/quote
#[instrument(skip(state, body))]
pub async fn quote(
    State(state): State<AppState>,
    Json(body): Json<QuoteRequestBody>,
) -> Result<Json<Value>, ApiError> {
    let command = build_command(body)?;
    let quotation = state.quote_service.quote(&command).await?;
    Ok(Json(quotation.payload))
}

/// Request a checkout delivery fee, falling back to the configured default
///
/// POST /v1/delivery/fee
#[instrument(skip(state, body))]
pub async fn fee(
    State(state): State<AppState>,
    Json(body): Json<QuoteRequestBody>,
) -> Result<Json<FeeResponse>, ApiError> {
    let command = build_command(body)?;
    let estimate = state.quote_service.quote_with_fallback(&command).await?;

    Ok(Json(FeeResponse {
        fee: estimate.fee.to_string(),
        currency: estimate.currency,
        estimate: estimate.is_estimate,
    }))
}

/// Look up address suggestions for type-ahead entry
///
/// GET /v1/delivery/suggestions?q=<prefix>
#[instrument(skip(state))]
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.q.unwrap_or_default();
    let suggestions = state.quote_service.suggest_addresses(&query).await?;

    Ok(Json(SuggestionsResponse {
        suggestions: suggestions
            .into_iter()
            .map(|s| SuggestionItem {
                address: s.address,
                lat: s.location.latitude(),
                lng: s.location.longitude(),
            })
            .collect(),
    }))
}
