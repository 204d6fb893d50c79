//! Lalamove client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Lalamove quotation API
///
/// Base URL, market and credentials are deliberately required: the sandbox
/// and production environments use different hosts and key pairs, and a
/// silent fallback between them has caused mispriced quotes before.
#[derive(Clone, Serialize, Deserialize)]
pub struct LalamoveConfig {
    /// API base URL (e.g., <https://rest.lalamove.com>)
    pub base_url: String,

    /// Market code the keys are scoped to (e.g., "MY_KUL")
    pub market: String,

    /// API key (public half of the credential pair)
    pub api_key: String,

    /// API secret used for request signing (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_secret: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Service type for quotations (vehicle class)
    #[serde(default = "default_service_type")]
    pub service_type: String,
}

impl std::fmt::Debug for LalamoveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LalamoveConfig")
            .field("base_url", &self.base_url)
            .field("market", &self.market)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("service_type", &self.service_type)
            .finish()
    }
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_service_type() -> String {
    "MOTORCYCLE".to_string()
}

impl LalamoveConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            base_url: "https://rest.sandbox.lalamove.com".to_string(),
            market: "MY_KUL".to_string(),
            api_key: "pk_test_key".to_string(),
            api_secret: SecretString::from("sk_test_secret"),
            timeout_secs: 5,
            service_type: default_service_type(),
        }
    }

    /// Get the API secret as a string reference
    #[must_use]
    pub fn api_secret_str(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.market.is_empty() {
            return Err("market must not be empty".to_string());
        }

        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.api_secret.expose_secret().is_empty() {
            return Err("api_secret must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.service_type.is_empty() {
            return Err("service_type must not be empty".to_string());
        }

        Ok(())
    }
}
