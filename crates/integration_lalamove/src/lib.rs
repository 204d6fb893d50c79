//! Lalamove quotation integration for AyamFresh
//!
//! Requests priced delivery quotations from the
//! [Lalamove v3 API](https://developers.lalamove.com) for a pickup/drop-off
//! stop pair. Every request is authenticated with a fresh time-based HMAC
//! signature; provider rejections are normalized into a single error message
//! regardless of which of the API's error shapes came back.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern shared by the integration
//! crates. [`QuotationClient`] defines the interface, implemented by
//! [`LalamoveClient`]. Request signing lives in [`signing`] as pure
//! functions so the signature scheme is testable without a server.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_lalamove::{LalamoveClient, LalamoveConfig, QuotationRequest, Stop};
//!
//! let client = LalamoveClient::new(&config)?;
//! let request = QuotationRequest::new(pickup_stop, dropoff_stop);
//! let quotation = client.get_quotation(&request).await?;
//! let total = quotation.price_breakdown.total; // string-encoded decimal
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod signing;

pub use client::{LalamoveClient, QuotationClient};
pub use config::LalamoveConfig;
pub use error::QuotationError;
pub use models::{
    Coordinates, ParcelItem, PriceBreakdown, Quotation, QuotationRequest, Stop,
    extract_error_message,
};
