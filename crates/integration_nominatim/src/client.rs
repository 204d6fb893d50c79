//! Nominatim geocoding client
//!
//! Converts free-form address strings to geographic coordinates and serves
//! multi-candidate suggestion lookups.
//!
//! Delivery addresses typed by customers often carry unit-level tokens
//! ("No. 12A, Suite 3, ...") that the provider cannot match. Geocoding
//! therefore retries with progressively shorter comma-separated suffixes of
//! the address before reporting failure.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::AddressCandidate;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodingError>;

    /// Look up address candidates for a partial query (type-ahead)
    ///
    /// An empty or whitespace query returns an empty list without calling
    /// the provider.
    async fn suggest(&self, query: &str) -> Result<Vec<AddressCandidate>, GeocodingError>;

    /// Check if the geocoding service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a new Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Strip characters the provider chokes on and trim whitespace
    fn clean_query(query: &str) -> String {
        query.replace('#', "").trim().to_string()
    }

    /// Build the query ladder: the full address first, then progressively
    /// shorter comma-separated suffixes (unit and street tokens dropped).
    ///
    /// At most two relaxation attempts follow the full-address attempt.
    fn relaxation_queries(address: &str) -> Vec<String> {
        let mut queries = vec![Self::clean_query(address)];

        let parts: Vec<&str> = address
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        for keep in [3usize, 2] {
            if parts.len() > keep {
                let suffix = Self::clean_query(&parts[parts.len() - keep..].join(", "));
                if !suffix.is_empty() && !queries.contains(&suffix) {
                    queries.push(suffix);
                }
            }
        }

        queries.retain(|q| !q.is_empty());
        queries
    }

    /// Execute one search call against the provider
    async fn search(
        &self,
        query: &str,
        limit: u8,
        address_details: bool,
    ) -> Result<Vec<SearchResult>, GeocodingError> {
        let url = format!("{}/search", self.config.base_url);
        let mut params = vec![
            ("format", "json".to_string()),
            ("q", query.to_string()),
            ("limit", limit.to_string()),
        ];

        if !self.config.country_codes.is_empty() {
            params.push(("countrycodes", self.config.country_codes.clone()));
        }

        if address_details {
            params.push(("addressdetails", "1".to_string()));
        }

        debug!(%query, limit, "Searching Nominatim");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodingError> {
        if address.trim().is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        for (attempt, query) in Self::relaxation_queries(address).iter().enumerate() {
            let results = self.search(query, 1, false).await?;

            if let Some(result) = results.first() {
                let location =
                    GeoLocation::parse(&result.lat, &result.lon).map_err(|_| {
                        GeocodingError::ParseError(format!(
                            "Invalid coordinates in response: {}, {}",
                            result.lat, result.lon
                        ))
                    })?;
                debug!(%address, %query, attempt, %location, "Geocoded address");
                return Ok(location);
            }

            warn!(%query, attempt, "No geocoding results, relaxing query");
        }

        Err(GeocodingError::AddressNotFound(address.to_string()))
    }

    #[instrument(skip(self))]
    async fn suggest(&self, query: &str) -> Result<Vec<AddressCandidate>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let cleaned = Self::clean_query(query);
        let results = self
            .search(&cleaned, self.config.max_suggestions, true)
            .await?;

        let candidates = results
            .into_iter()
            .filter_map(|result| {
                let location = GeoLocation::parse(&result.lat, &result.lon).ok()?;
                Some(AddressCandidate {
                    address: result.display_name.unwrap_or_default(),
                    location,
                })
            })
            .collect();

        Ok(candidates)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/search?format=json&q=test&limit=1", self.config.base_url);
        self.client.get(&url).send().await.is_ok()
    }
}

/// Raw Nominatim API response entry
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}
