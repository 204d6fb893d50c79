//! Delivery quote orchestration
//!
//! Resolves the pickup and drop-off stops for a quote request and delegates
//! to the quotation provider. Also owns the caller-facing fallback policy:
//! when quoting fails for any reason other than invalid input, checkout
//! proceeds with the configured default fee flagged as an estimate, and the
//! admin reconciles the true amount out of band.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::entities::Shop;
use domain::value_objects::{DeliveryFee, GeoLocation, ShopId};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    AddressSuggestion, DeliveryQuotation, GeocodingPort, QuotationPort, QuoteStop, ShopStore,
};

/// Injected delivery policy: the default pickup stop and the fallback fee
///
/// The default pickup location is explicit configuration rather than a
/// hidden constant so tests and deployments can substitute it.
#[derive(Debug, Clone)]
pub struct DeliveryPolicy {
    /// Pickup stop used when no shop is chosen or shop lookup fails
    pub default_pickup: QuoteStop,
    /// Fee substituted when quoting fails
    pub default_fee: DeliveryFee,
    /// Currency reported with the fallback fee
    pub currency: String,
}

/// A delivery quote request as received from the storefront
#[derive(Debug, Clone)]
pub struct QuoteCommand {
    /// Free-text delivery address (mandatory)
    pub address: String,
    /// Pickup shop; `None` uses the default pickup location
    pub shop_id: Option<ShopId>,
    /// Explicit drop-off coordinates, skipping geocoding
    pub dropoff: Option<GeoLocation>,
    /// Scheduled dispatch time; `None` means immediate
    pub schedule_at: Option<DateTime<Utc>>,
}

impl QuoteCommand {
    /// Create a command for an address with defaults for everything else
    #[must_use]
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            shop_id: None,
            dropoff: None,
            schedule_at: None,
        }
    }
}

/// The fee the storefront shows at checkout
#[derive(Debug, Clone, Serialize)]
pub struct FeeEstimate {
    /// Delivery fee amount
    pub fee: DeliveryFee,
    /// Currency code
    pub currency: String,
    /// True when the fee is the configured fallback rather than a live quote
    pub is_estimate: bool,
}

/// Orchestrates geocoding, shop lookup, and quotation retrieval
pub struct DeliveryQuoteService {
    geocoding: Arc<dyn GeocodingPort>,
    quotation: Arc<dyn QuotationPort>,
    shops: Arc<dyn ShopStore>,
    policy: DeliveryPolicy,
}

impl std::fmt::Debug for DeliveryQuoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryQuoteService")
            .field("geocoding", &"<GeocodingPort>")
            .field("quotation", &"<QuotationPort>")
            .field("shops", &"<ShopStore>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl DeliveryQuoteService {
    /// Create a new delivery quote service
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        quotation: Arc<dyn QuotationPort>,
        shops: Arc<dyn ShopStore>,
        policy: DeliveryPolicy,
    ) -> Self {
        Self {
            geocoding,
            quotation,
            shops,
            policy,
        }
    }

    /// Request a quotation for a delivery address
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] for a blank address,
    /// [`ApplicationError::GeocodingFailed`] when the address cannot be
    /// resolved, and the provider/transport error classes otherwise.
    #[instrument(skip(self, command), fields(shop_id = ?command.shop_id))]
    pub async fn quote(
        &self,
        command: &QuoteCommand,
    ) -> Result<DeliveryQuotation, ApplicationError> {
        let address = command.address.trim();
        if address.is_empty() {
            return Err(ApplicationError::Validation(
                "Delivery address is required".to_string(),
            ));
        }

        let dropoff_location = match command.dropoff {
            Some(location) => location,
            None => {
                debug!(%address, "No drop-off coordinates supplied, geocoding");
                self.geocoding.geocode(address).await?
            },
        };
        let dropoff = QuoteStop::new(dropoff_location, address);

        let pickup = self.resolve_pickup(command.shop_id).await;

        self.quotation
            .quote(&pickup, &dropoff, command.schedule_at)
            .await
    }

    /// Request a quote, substituting the default fee on failure
    ///
    /// # Errors
    ///
    /// Only invalid input propagates; every other failure resolves to the
    /// configured fallback fee flagged as an estimate.
    #[instrument(skip(self, command))]
    pub async fn quote_with_fallback(
        &self,
        command: &QuoteCommand,
    ) -> Result<FeeEstimate, ApplicationError> {
        match self.quote(command).await {
            Ok(quotation) => match DeliveryFee::parse(&quotation.total) {
                Ok(fee) => Ok(FeeEstimate {
                    fee,
                    currency: quotation
                        .currency
                        .unwrap_or_else(|| self.policy.currency.clone()),
                    is_estimate: false,
                }),
                Err(e) => {
                    warn!(total = %quotation.total, error = %e, "Unparseable quote total, falling back to default fee");
                    Ok(self.fallback_estimate())
                },
            },
            Err(e) if e.is_recoverable_quote_failure() => {
                warn!(error = %e, "Quote failed, falling back to default fee");
                Ok(self.fallback_estimate())
            },
            Err(e) => Err(e),
        }
    }

    /// Look up address candidates for a partial query
    ///
    /// A blank query short-circuits to an empty list without calling the
    /// provider.
    #[instrument(skip(self))]
    pub async fn suggest_addresses(
        &self,
        query: &str,
    ) -> Result<Vec<AddressSuggestion>, ApplicationError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.geocoding.suggest(query).await
    }

    /// List shops currently accepting orders
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list_shops(&self) -> Result<Vec<Shop>, ApplicationError> {
        self.shops.list_active().await
    }

    /// Check whether the external providers are reachable
    pub async fn providers_available(&self) -> (bool, bool) {
        (
            self.geocoding.is_available().await,
            self.quotation.is_available().await,
        )
    }

    /// Resolve the pickup stop for an optional shop reference
    ///
    /// Shop lookup failures never fail the quote; the default pickup
    /// location stands in so the order can still be placed.
    async fn resolve_pickup(&self, shop_id: Option<ShopId>) -> QuoteStop {
        let Some(id) = shop_id else {
            return self.policy.default_pickup.clone();
        };

        match self.shops.get(id).await {
            Ok(Some(shop)) => {
                if let Some(location) = shop.location() {
                    debug!(shop_id = %id, "Using shop pickup location");
                    return QuoteStop::new(location, shop.address());
                }
                warn!(shop_id = %id, "Shop has no coordinates, using default pickup location");
            },
            Ok(None) => {
                warn!(shop_id = %id, "Shop not found, using default pickup location");
            },
            Err(e) => {
                warn!(shop_id = %id, error = %e, "Shop lookup failed, using default pickup location");
            },
        }

        self.policy.default_pickup.clone()
    }

    fn fallback_estimate(&self) -> FeeEstimate {
        FeeEstimate {
            fee: self.policy.default_fee,
            currency: self.policy.currency.clone(),
            is_estimate: true,
        }
    }
}
