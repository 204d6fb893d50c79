//! Nominatim geocoding integration for AyamFresh
//!
//! Resolves free-text delivery addresses to coordinates via the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap) and
//! powers the storefront's search-as-you-type address suggestions.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern shared by the integration
//! crates. [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimClient`]. Geocoding retries with progressively relaxed queries
//! (the comma-separated address suffix) before giving up; suggestions are a
//! single multi-result lookup with no relaxation.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nominatim::{NominatimClient, NominatimConfig};
//!
//! let config = NominatimConfig::default();
//! let client = NominatimClient::new(&config)?;
//!
//! let location = client.geocode("Suite 12, Jalan Ampang, Kuala Lumpur").await?;
//! let candidates = client.suggest("Jalan Amp").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::AddressCandidate;
