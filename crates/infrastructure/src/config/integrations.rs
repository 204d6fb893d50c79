//! Integration configurations: Lalamove, Nominatim, and the delivery policy.

use application::{DeliveryPolicy, QuoteStop};
use domain::value_objects::{DeliveryFee, GeoLocation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Lalamove Configuration
// ==============================

/// Lalamove quotation API configuration
///
/// Base URL, market, and credentials are required with no defaults: sandbox
/// and production use different hosts and key pairs, and mixing them must
/// fail at startup rather than misprice quotes.
#[derive(Clone, Serialize, Deserialize)]
pub struct LalamoveAppConfig {
    /// API base URL (e.g., <https://rest.lalamove.com>)
    pub base_url: String,

    /// Market code the keys are scoped to (e.g., "MY_KUL")
    pub market: String,

    /// API key
    pub api_key: String,

    /// API secret for request signing (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_secret: SecretString,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_lalamove_timeout")]
    pub timeout_secs: u64,

    /// Service type for quotations (default: MOTORCYCLE)
    #[serde(default = "default_service_type")]
    pub service_type: String,
}

impl std::fmt::Debug for LalamoveAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LalamoveAppConfig")
            .field("base_url", &self.base_url)
            .field("market", &self.market)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("service_type", &self.service_type)
            .finish()
    }
}

const fn default_lalamove_timeout() -> u64 {
    10
}

fn default_service_type() -> String {
    "MOTORCYCLE".to_string()
}

impl LalamoveAppConfig {
    /// Convert to `integration_lalamove`'s `LalamoveConfig`
    #[must_use]
    pub fn to_lalamove_config(&self) -> integration_lalamove::LalamoveConfig {
        integration_lalamove::LalamoveConfig {
            base_url: self.base_url.clone(),
            market: self.market.clone(),
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            service_type: self.service_type.clone(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any required value is empty.
    pub fn validate(&self) -> Result<(), String> {
        self.to_lalamove_config().validate()
    }
}

// ==============================
// Geocoding Configuration
// ==============================

/// Nominatim geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Nominatim base URL (default: the public OpenStreetMap instance)
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Country code filter (default: "my")
    #[serde(default = "default_country_codes")]
    pub country_codes: String,

    /// Identifying User-Agent; the public instance blocks anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_secs: u64,

    /// Maximum address suggestions (default: 5)
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: u8,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_country_codes() -> String {
    "my".to_string()
}

fn default_user_agent() -> String {
    "AyamFresh/1.0 (https://github.com/ayamfresh/ayamfresh)".to_string()
}

const fn default_geocoding_timeout() -> u64 {
    5
}

const fn default_max_suggestions() -> u8 {
    5
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            country_codes: default_country_codes(),
            user_agent: default_user_agent(),
            timeout_secs: default_geocoding_timeout(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_nominatim`'s `NominatimConfig`
    #[must_use]
    pub fn to_nominatim_config(&self) -> integration_nominatim::NominatimConfig {
        integration_nominatim::NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            country_codes: self.country_codes.clone(),
            user_agent: self.user_agent.clone(),
            max_suggestions: self.max_suggestions,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_nominatim_config().validate()
    }
}

// ==============================
// Delivery Policy Configuration
// ==============================

/// Default pickup location (latitude/longitude pair plus display address)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
    /// Display address sent as the pickup stop address
    pub address: String,
}

/// Delivery policy configuration
///
/// The default pickup stop and fallback fee are required: every quote needs
/// a pickup even when no shop is chosen, and checkout must be able to
/// proceed on the fallback fee when quoting fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAppConfig {
    /// Pickup used when no shop is chosen or shop lookup fails
    pub default_pickup: PickupLocationConfig,

    /// Fee substituted when quoting fails (string-encoded decimal)
    pub default_fee: String,

    /// Currency code reported with fees (default: "MYR")
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "MYR".to_string()
}

impl DeliveryAppConfig {
    /// Convert to the application-layer `DeliveryPolicy`
    ///
    /// # Errors
    ///
    /// Returns an error if the pickup coordinates or the fallback fee are
    /// invalid.
    pub fn to_policy(&self) -> Result<DeliveryPolicy, String> {
        let location = GeoLocation::new(self.default_pickup.latitude, self.default_pickup.longitude)
            .map_err(|e| format!("default_pickup: {e}"))?;

        let default_fee =
            DeliveryFee::parse(&self.default_fee).map_err(|e| format!("default_fee: {e}"))?;

        if self.default_pickup.address.trim().is_empty() {
            return Err("default_pickup.address must not be empty".to_string());
        }

        Ok(DeliveryPolicy {
            default_pickup: QuoteStop::new(location, self.default_pickup.address.clone()),
            default_fee,
            currency: self.currency.clone(),
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_policy().map(|_| ())
    }
}
