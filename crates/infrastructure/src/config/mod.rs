//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `integrations`: Lalamove, Nominatim, and the delivery policy
//!
//! Loaded from `config.toml` with `AYAMFRESH_*` environment overrides. The
//! Lalamove credentials, market, and the default pickup location are
//! required; startup fails rather than silently falling back to sandbox
//! values.

mod database;
mod integrations;
mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use integrations::{
    DeliveryAppConfig, GeocodingAppConfig, LalamoveAppConfig, PickupLocationConfig,
};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Lalamove quotation API configuration (required)
    pub lalamove: LalamoveAppConfig,

    /// Nominatim geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Delivery policy: default pickup location and fallback fee (required)
    pub delivery: DeliveryAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the environment
    ///
    /// Environment variables use the `AYAMFRESH` prefix with `_` as the
    /// separator (e.g., `AYAMFRESH_SERVER_PORT`).
    ///
    /// # Errors
    ///
    /// Returns an error if no source provides the required Lalamove and
    /// delivery sections, or if any value fails to deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., AYAMFRESH_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("AYAMFRESH")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the full configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, prefixed with the offending
    /// section.
    pub fn validate(&self) -> Result<(), String> {
        self.lalamove
            .validate()
            .map_err(|e| format!("lalamove: {e}"))?;
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.delivery
            .validate()
            .map_err(|e| format!("delivery: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
            [server]
            port = 8080

            [lalamove]
            base_url = "https://rest.lalamove.com"
            market = "MY_KUL"
            api_key = "pk_live_key"
            api_secret = "sk_live_secret"

            [delivery]
            default_fee = "8.00"

            [delivery.default_pickup]
            latitude = 3.1578
            longitude = 101.7118
            address = "Kuala Lumpur City Centre"
        "#
    }

    #[test]
    fn deserializes_minimal_config() {
        let config: AppConfig = toml::from_str(sample_toml()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.lalamove.market, "MY_KUL");
        assert_eq!(config.delivery.default_fee, "8.00");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_lalamove_section_fails() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
                [delivery]
                default_fee = "8.00"

                [delivery.default_pickup]
                latitude = 3.1578
                longitude = 101.7118
                address = "Kuala Lumpur City Centre"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_delivery_section_fails() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
                [lalamove]
                base_url = "https://rest.lalamove.com"
                market = "MY_KUL"
                api_key = "pk"
                api_secret = "sk"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn defaults_fill_optional_sections() {
        let config: AppConfig = toml::from_str(sample_toml()).unwrap();
        assert_eq!(config.geocoding.country_codes, "my");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.lalamove.timeout_secs, 10);
    }

    #[test]
    fn validate_reports_section() {
        let mut config: AppConfig = toml::from_str(sample_toml()).unwrap();
        config.lalamove.market = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("lalamove:"));
    }
}
