//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Delivery API (v1)
        .route("/v1/delivery/quote", post(handlers::delivery::quote))
        .route("/v1/delivery/fee", post(handlers::delivery::fee))
        .route(
            "/v1/delivery/suggestions",
            get(handlers::delivery::suggestions),
        )
        // Shops API (v1)
        .route("/v1/shops", get(handlers::shops::list_shops))
        // Attach state
        .with_state(state)
}
