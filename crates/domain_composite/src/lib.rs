//! Product Composite Domain
//!
//! Aggregation layer over the product, recommendation and review services.
//!
//! # Architecture
//!
//! - **Read path**: one product fetch and two paged listings run concurrently
//!   and are joined into a [`ProductAggregate`]
//! - **Write path**: the product and every recommendation and review are
//!   created concurrently and joined into the created [`ProductComposite`]
//! - **Delete path**: deletion is announced by events; a
//!   [`DeleteEventConsumer`] per owning service performs it
//!
//! ```text
//!                    ProductCompositeService
//!          get / create            │            delete
//!     ┌────────────────────────────┼──────────────────────┐
//!     ▼                            ▼                      ▼
//! ProductPort          RecommendationPort ReviewPort  EventPublisher
//!     ▲                            ▲                      │
//!     └──────── DeleteEventConsumer ◄──── event channel ◄─┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_composite::ProductCompositeService;
//!
//! let service = ProductCompositeService::from_integration(integration, publisher, defaults);
//! let aggregate = service
//!     .get_composite_product(ProductId::new(42), PageRequest::default())
//!     .await?;
//! ```

pub mod aggregate;
pub mod composite;
pub mod mapper;
pub mod error;
pub mod publisher;
pub mod consumer;
pub mod services;

pub use aggregate::{PageMetadata, ProductAggregate, RecommendationSummary, ReviewSummary, SummaryPage};
pub use composite::ProductComposite;
pub use error::CompositeError;
pub use publisher::{channel, ChannelPublisher, EventChannels, EventPublisher, PublishError, Topic};
pub use consumer::{run_consumer, ConsumeOutcome, DeleteEventConsumer, DeletionTarget};
pub use services::ProductCompositeService;
