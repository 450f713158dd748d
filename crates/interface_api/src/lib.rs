//! HTTP API Layer
//!
//! This crate provides the REST API of the product composite service using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Composite read, create and delete, plus liveness
//! - **Middleware**: Request logging with request ids
//! - **DTOs**: Query parameters and their validation
//! - **Error Handling**: Every failure rendered as the `HttpErrorInfo` envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(service, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_composite::{
    run_consumer, DeleteEventConsumer, DeletionTarget, EventChannels, ProductCompositeService,
};
use domain_product::ProductPort;
use domain_recommendation::RecommendationPort;
use domain_review::ReviewPort;

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{composite, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductCompositeService>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(service: ProductCompositeService, config: ApiConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}

/// Creates the main API router
///
/// Composite routes live under the configured base path; `/health` stays at
/// the root.
pub fn create_router(state: AppState) -> Router {
    let base_path = state.config.base_path.trim_end_matches('/').to_string();

    let composite_routes = Router::new()
        .route("/product-composite", post(composite::create_composite_product))
        .route(
            "/product-composite/:product_id",
            get(composite::get_composite_product).delete(composite::delete_composite_product),
        );

    let api_routes = if base_path.is_empty() {
        composite_routes
    } else {
        Router::new().nest(&base_path, composite_routes)
    };

    Router::new()
        .route("/health", get(health::health_check))
        .merge(api_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Starts one deletion consumer per topic
///
/// Each consumer runs until its topic's publisher is dropped.
pub fn spawn_event_consumers(
    channels: EventChannels,
    products: Arc<dyn ProductPort>,
    recommendations: Arc<dyn RecommendationPort>,
    reviews: Arc<dyn ReviewPort>,
) -> Vec<JoinHandle<()>> {
    let EventChannels {
        products: products_rx,
        recommendations: recommendations_rx,
        reviews: reviews_rx,
    } = channels;

    vec![
        tokio::spawn(run_consumer(
            products_rx,
            DeleteEventConsumer::new(DeletionTarget::Product(products)),
        )),
        tokio::spawn(run_consumer(
            recommendations_rx,
            DeleteEventConsumer::new(DeletionTarget::Recommendations(recommendations)),
        )),
        tokio::spawn(run_consumer(
            reviews_rx,
            DeleteEventConsumer::new(DeletionTarget::Reviews(reviews)),
        )),
    ]
}
