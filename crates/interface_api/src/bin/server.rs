//! Product Composite - API Server Binary
//!
//! Starts the composite HTTP API, the downstream integration and the three
//! deletion event consumers.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin product-composite
//!
//! # Run with environment variables
//! API_PORT=8080 API_SERVICES__PRODUCT__HOST=product cargo run --bin product-composite
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `API_BASE_PATH` - Base path of every route and downstream service (default: /api/v1)
//! * `API_SERVICES__{PRODUCT,RECOMMENDATION,REVIEW}__{HOST,PORT}` - Downstream addresses
//! * `API_PAGINATION__PAGE_NUMBER`, `API_PAGINATION__PAGE_SIZE` - Default page (0, 10)
//! * `API_REQUEST_TIMEOUT_SECS` - Downstream request timeout (default: 10)
//! * `API_EVENT_BUFFER` - Capacity of each event topic (default: 64)

use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router, spawn_event_consumers, AppState,
};
use domain_composite::{channel, ProductCompositeService};
use infra_http::ProductCompositeIntegration;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded or is invalid
/// - The HTTP client cannot be built
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;
    config.validate()?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        base_path = %config.base_path,
        "Starting Product Composite API Server"
    );

    let integration = Arc::new(ProductCompositeIntegration::new(&config.integration_config())?);

    let (publisher, channels) = channel(config.event_buffer);
    let consumers = spawn_event_consumers(
        channels,
        integration.clone(),
        integration.clone(),
        integration.clone(),
    );

    let service =
        ProductCompositeService::from_integration(integration, Arc::new(publisher), config.pagination);

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_router(AppState::new(service, config));

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the publisher, so the consumers drain and stop now
    for consumer in consumers {
        if let Err(e) = consumer.await {
            tracing::error!(error = %e, "Event consumer task failed");
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
