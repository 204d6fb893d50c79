//! Quotation adapter - Implements QuotationPort using integration_lalamove

use application::error::ApplicationError;
use application::ports::{DeliveryQuotation, QuotationPort, QuoteStop};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use integration_lalamove::{
    LalamoveClient, QuotationClient, QuotationError, QuotationRequest, Stop,
};
use tracing::{instrument, warn};

/// Adapter for delivery quotations via Lalamove
pub struct LalamoveAdapter {
    client: LalamoveClient,
}

impl std::fmt::Debug for LalamoveAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LalamoveAdapter")
            .field("client", &"LalamoveClient")
            .finish()
    }
}

impl LalamoveAdapter {
    /// Create a new quotation adapter
    #[must_use]
    pub const fn new(client: LalamoveClient) -> Self {
        Self { client }
    }

    /// Map an integration error to the application error taxonomy
    ///
    /// Provider rejections keep the normalized provider message so the HTTP
    /// boundary can surface it; transport failures become the network class.
    fn map_error(error: QuotationError) -> ApplicationError {
        match error {
            QuotationError::Api { message, .. } => ApplicationError::QuoteRejected(message),
            QuotationError::ConfigurationError(message) => {
                ApplicationError::Configuration(message)
            },
            QuotationError::Signing(message) => ApplicationError::Internal(message),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    fn to_wire_stop(stop: &QuoteStop) -> Stop {
        Stop::new(stop.location, stop.address.clone())
    }
}

#[async_trait]
impl QuotationPort for LalamoveAdapter {
    #[instrument(skip(self, pickup, dropoff), fields(dropoff = %dropoff.address))]
    async fn quote(
        &self,
        pickup: &QuoteStop,
        dropoff: &QuoteStop,
        schedule_at: Option<DateTime<Utc>>,
    ) -> Result<DeliveryQuotation, ApplicationError> {
        let mut request =
            QuotationRequest::new(Self::to_wire_stop(pickup), Self::to_wire_stop(dropoff));
        if let Some(at) = schedule_at {
            request = request.with_schedule_at(at);
        }

        let quotation = self.client.get_quotation(&request).await.map_err(|e| {
            warn!(error = %e, "Quotation request failed");
            Self::map_error(e)
        })?;

        Ok(DeliveryQuotation {
            quotation_id: quotation.quotation_id,
            total: quotation.price_breakdown.total,
            currency: quotation.price_breakdown.currency,
            payload: quotation.raw,
        })
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
