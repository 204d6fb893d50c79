//! Application state shared across handlers

use std::sync::Arc;

use application::DeliveryQuoteService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Delivery quote orchestration service
    pub quote_service: Arc<DeliveryQuoteService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("quote_service", &"<DeliveryQuoteService>")
            .finish()
    }
}
