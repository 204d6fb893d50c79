//! Lalamove quotation client
//!
//! Signs and sends quotation requests. The body is serialized once and the
//! exact bytes are both signed and sent; serializing twice would invalidate
//! the signature.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, instrument};

use crate::config::LalamoveConfig;
use crate::error::QuotationError;
use crate::models::{Quotation, QuotationRequest, RequestBody, extract_error_message};
use crate::signing;

/// Path of the quotation endpoint, part of the signed canonical string
const QUOTATIONS_PATH: &str = "/v3/quotations";

/// Trait for delivery quotation clients
#[async_trait]
pub trait QuotationClient: Send + Sync {
    /// Request a priced quotation for a pickup/drop-off stop pair
    async fn get_quotation(
        &self,
        request: &QuotationRequest,
    ) -> Result<Quotation, QuotationError>;

    /// Check if the quotation service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Lalamove v3 API client
#[derive(Debug)]
pub struct LalamoveClient {
    client: Client,
    config: LalamoveConfig,
}

impl LalamoveClient {
    /// Create a new Lalamove client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &LalamoveConfig) -> Result<Self, QuotationError> {
        config
            .validate()
            .map_err(QuotationError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| QuotationError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl QuotationClient for LalamoveClient {
    #[instrument(skip(self, request), fields(dropoff = %request.dropoff.address))]
    async fn get_quotation(
        &self,
        request: &QuotationRequest,
    ) -> Result<Quotation, QuotationError> {
        let body = serde_json::to_string(&RequestBody::build(request, &self.config.service_type))
            .map_err(|e| QuotationError::ParseError(e.to_string()))?;

        let timestamp_ms = Utc::now().timestamp_millis();
        let signature = signing::sign(
            self.config.api_secret_str(),
            timestamp_ms,
            "POST",
            QUOTATIONS_PATH,
            &body,
        )?;
        let authorization =
            signing::authorization_header(&self.config.api_key, timestamp_ms, &signature);

        let url = format!("{}{QUOTATIONS_PATH}", self.config.base_url);
        debug!(%url, market = %self.config.market, "Requesting quotation");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .header(ACCEPT, "application/json")
            .header("Market", &self.config.market)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QuotationError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    QuotationError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| QuotationError::ParseError(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error_message(&response_body);
            debug!(status = status.as_u16(), %message, "Quotation rejected");
            return Err(QuotationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let quotation = Quotation::from_body(&response_body)?;
        debug!(
            total = %quotation.price_breakdown.total,
            quotation_id = ?quotation.quotation_id,
            "Quotation received"
        );
        Ok(quotation)
    }

    async fn is_healthy(&self) -> bool {
        self.client.get(&self.config.base_url).send().await.is_ok()
    }
}
