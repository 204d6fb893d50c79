//! Shop listing handler
//!
//! Backs the storefront's pickup-outlet picker.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// One shop entry
#[derive(Debug, Serialize)]
pub struct ShopItem {
    /// Shop ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Pickup address
    pub address: String,
    /// Latitude, when the shop has been geocoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude, when the shop has been geocoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Response body for the shop list
#[derive(Debug, Serialize)]
pub struct ShopsResponse {
    /// Active shops, sorted by name
    pub shops: Vec<ShopItem>,
}

/// List shops currently accepting orders
///
/// GET /v1/shops
#[instrument(skip(state))]
pub async fn list_shops(State(state): State<AppState>) -> Result<Json<ShopsResponse>, ApiError> {
    let shops = state.quote_service.list_shops().await?;

    Ok(Json(ShopsResponse {
        shops: shops
            .into_iter()
            .map(|shop| ShopItem {
                id: shop.id().to_string(),
                name: shop.name().to_string(),
                address: shop.address().to_string(),
                latitude: shop.location().map(|loc| loc.latitude()),
                longitude: shop.location().map(|loc| loc.longitude()),
            })
            .collect(),
    }))
}
