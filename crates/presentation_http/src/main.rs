//! Cragcast HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::ForecastService;
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, ConfiguredCragLocations, NoaaGridpointAdapter};
use integration_noaa::NoaaConfig;
use presentation_http::{routes, serve_with_drain_timeout, state::AppState};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be honoured
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(config.server.json_logs());

    info!("Cragcast v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        noaa = %config.noaa.base_url,
        crags = config.crags.len(),
        day_boundary = ?config.forecast.day_boundary,
        "Configuration loaded"
    );

    // Initialize adapters
    let gridpoints = NoaaGridpointAdapter::with_config(NoaaConfig::from(&config.noaa))
        .map_err(|e| anyhow::anyhow!("Failed to initialize NOAA client: {e}"))?;
    let crags = ConfiguredCragLocations::from_config(&config.crags)
        .map_err(|e| anyhow::anyhow!("Invalid crag configuration: {e}"))?;

    // Initialize services
    let forecast_service = ForecastService::new(Arc::new(gridpoints), Arc::new(crags))
        .with_day_boundary(config.forecast.day_boundary);

    let config = Arc::new(config);
    let state = AppState {
        forecast_service: Arc::new(forecast_service),
        config: Arc::clone(&config),
    };

    // Build router
    let app = routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server.allowed_origins)),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    serve_with_drain_timeout(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Install the global subscriber with a text or JSON formatter
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "cragcast_server=debug,presentation_http=debug,application=debug,infrastructure=debug,\
         integration_noaa=debug,tower_http=debug"
            .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// CORS policy: any origin when none are configured, otherwise the listed ones
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Wait for a shutdown signal (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
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
}
