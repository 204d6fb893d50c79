//! Nominatim client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Country code filter (e.g., "my" for Malaysia)
    #[serde(default = "default_country_codes")]
    pub country_codes: String,

    /// Identifying User-Agent sent on every request
    ///
    /// The public Nominatim instance requires an identifying header and may
    /// block anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of address suggestions to return (1-10)
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: u8,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

fn default_country_codes() -> String {
    "my".to_string()
}

fn default_user_agent() -> String {
    "AyamFresh/1.0 (https://github.com/ayamfresh/ayamfresh)".to_string()
}

const fn default_max_suggestions() -> u8 {
    5
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            country_codes: default_country_codes(),
            user_agent: default_user_agent(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
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

        if self.user_agent.is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_suggestions == 0 || self.max_suggestions > 10 {
            return Err("max_suggestions must be between 1 and 10".to_string());
        }

        Ok(())
    }
}
