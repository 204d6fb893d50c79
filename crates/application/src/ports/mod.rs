//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod quotation_port;
mod shop_store;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{AddressSuggestion, GeocodingPort};
#[cfg(test)]
pub use quotation_port::MockQuotationPort;
pub use quotation_port::{DeliveryQuotation, QuotationPort, QuoteStop};
#[cfg(test)]
pub use shop_store::MockShopStore;
pub use shop_store::ShopStore;
