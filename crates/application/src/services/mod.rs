//! Application services

mod delivery_quote_service;

pub use delivery_quote_service::{
    DeliveryPolicy, DeliveryQuoteService, FeeEstimate, QuoteCommand,
};
