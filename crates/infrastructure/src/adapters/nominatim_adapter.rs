//! Geocoding adapter - Implements GeocodingPort using integration_nominatim

use application::error::ApplicationError;
use application::ports::{AddressSuggestion, GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_nominatim::{GeocodingClient, GeocodingError, NominatimClient};
use tracing::{instrument, warn};

/// Adapter for address geocoding and suggestions via Nominatim
pub struct NominatimAdapter {
    client: NominatimClient,
}

impl std::fmt::Debug for NominatimAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimAdapter")
            .field("client", &"NominatimClient")
            .finish()
    }
}

impl NominatimAdapter {
    /// Create a new geocoding adapter
    #[must_use]
    pub const fn new(client: NominatimClient) -> Self {
        Self { client }
    }

    /// Map an integration error to the application error taxonomy
    ///
    /// An unresolvable address is a distinct failure class from a transport
    /// problem; callers treat them differently in logs even though both end
    /// up recoverable.
    fn map_error(error: GeocodingError) -> ApplicationError {
        match error {
            GeocodingError::AddressNotFound(address) => {
                ApplicationError::GeocodingFailed(address)
            },
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for NominatimAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, ApplicationError> {
        self.client.geocode(address).await.map_err(|e| {
            warn!(%address, error = %e, "Geocoding failed");
            Self::map_error(e)
        })
    }

    #[instrument(skip(self))]
    async fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>, ApplicationError> {
        let candidates = self.client.suggest(query).await.map_err(Self::map_error)?;

        Ok(candidates
            .into_iter()
            .map(|candidate| AddressSuggestion {
                address: candidate.address,
                location: candidate.location,
            })
            .collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
