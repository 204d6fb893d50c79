//! AyamFresh HTTP Server
//!
//! Main entry point for the delivery-quote API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{DeliveryQuoteService, ports::{GeocodingPort, QuotationPort, ShopStore}};
use infrastructure::{
    AppConfig, LalamoveAdapter, NominatimAdapter, SqliteShopStore, create_pool,
};
use integration_lalamove::LalamoveClient;
use integration_nominatim::NominatimClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ayamfresh_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("AyamFresh v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration; the Lalamove credentials and delivery policy are
    // required, so a missing config is a startup failure rather than a
    // silent sandbox fallback
    let config = AppConfig::load().context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        market = %config.lalamove.market,
        "Configuration loaded"
    );

    // Initialize persistence
    let pool = create_pool(&config.database).context("Failed to open database")?;
    let shop_store: Arc<dyn ShopStore> = Arc::new(SqliteShopStore::new(Arc::new(pool)));

    // Initialize integration clients and adapters
    let nominatim = NominatimClient::new(&config.geocoding.to_nominatim_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding client: {e}"))?;
    let geocoding: Arc<dyn GeocodingPort> = Arc::new(NominatimAdapter::new(nominatim));

    let lalamove = LalamoveClient::new(&config.lalamove.to_lalamove_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize quotation client: {e}"))?;
    let quotation: Arc<dyn QuotationPort> = Arc::new(LalamoveAdapter::new(lalamove));

    let policy = config
        .delivery
        .to_policy()
        .map_err(|e| anyhow::anyhow!("Invalid delivery policy: {e}"))?;

    // Initialize services
    let quote_service = DeliveryQuoteService::new(geocoding, quotation, shop_store, policy);

    let state = AppState {
        quote_service: Arc::new(quote_service),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
