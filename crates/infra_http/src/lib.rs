//! HTTP Integration Layer
//!
//! This crate implements the product, recommendation and review ports on top
//! of the downstream REST services using `reqwest`.
//!
//! # Architecture
//!
//! One façade, [`ProductCompositeIntegration`], implements all three ports.
//! It resolves each service's base URL once at construction and shares a
//! single pooled HTTP client, so it can be cloned freely and used by many
//! requests at once.
//!
//! Every failed call goes through the same classification:
//! - `404` -> `PortError::NotFound`
//! - `422` -> `PortError::InvalidInput`
//! - other statuses -> `PortError::Upstream`, logged with the response body
//! - connection, timeout and decoding failures -> `PortError::Transport`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_http::{IntegrationConfig, ProductCompositeIntegration};
//!
//! let integration = ProductCompositeIntegration::new(&IntegrationConfig::default())?;
//! let product = integration.get_product(ProductId::new(1)).await?;
//! ```

pub mod config;
pub mod error;
pub mod client;
pub mod integration;

pub use config::{IntegrationConfig, ServiceEndpoint, ServiceEndpoints, ServiceUrls};
pub use error::IntegrationError;
pub use client::RestClient;
pub use integration::ProductCompositeIntegration;
