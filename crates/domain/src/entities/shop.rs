//! Shop entity
//!
//! A physical outlet orders are picked up from. Only the coordinates and the
//! display address matter to delivery quoting; everything else about a shop
//! (stock, operating hours) lives with the storefront backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, ShopId};

/// A pickup outlet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    /// Unique shop identifier
    id: ShopId,
    /// Display name
    name: String,
    /// Human-readable address, sent verbatim as the pickup stop address
    address: String,
    /// Pickup coordinates; `None` when the outlet has not been geocoded yet
    location: Option<GeoLocation>,
    /// Whether the shop currently accepts orders
    is_active: bool,
    /// When the shop was created
    created_at: DateTime<Utc>,
    /// When the shop was last updated
    updated_at: DateTime<Utc>,
}

impl Shop {
    /// Create a new shop
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ShopId::new(),
            name: name.into(),
            address: address.into(),
            location: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a shop with known coordinates
    #[must_use]
    pub fn with_location(
        name: impl Into<String>,
        address: impl Into<String>,
        location: GeoLocation,
    ) -> Self {
        let mut shop = Self::new(name, address);
        shop.location = Some(location);
        shop
    }

    /// Restore a shop from storage
    #[must_use]
    pub const fn restore(
        id: ShopId,
        name: String,
        address: String,
        location: Option<GeoLocation>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            location,
            is_active,
            created_at,
            updated_at,
        }
    }

    /// Get the shop ID
    #[must_use]
    pub const fn id(&self) -> ShopId {
        self.id
    }

    /// Get the display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the pickup address
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the pickup coordinates
    #[must_use]
    pub const fn location(&self) -> Option<GeoLocation> {
        self.location
    }

    /// Whether the shop currently accepts orders
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the shop was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the shop was last updated
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update the coordinates, bumping the modification time
    pub fn set_location(&mut self, location: Option<GeoLocation>) {
        self.location = location;
        self.updated_at = Utc::now();
    }

    /// Activate or deactivate the shop
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }
}
