//! Core Kernel - Shared contracts for the product composite system
//!
//! This crate provides the building blocks used by every other crate:
//! - Typed identifiers for products, recommendations and reviews
//! - The paged listing envelope and page request resolution
//! - Integration events and the canonical HTTP error envelope
//! - The port error classification shared by all adapters

pub mod identifiers;
pub mod paging;
pub mod event;
pub mod timestamp;
pub mod error_info;
pub mod ports;
pub mod error;

pub use identifiers::{ProductId, RecommendationId, ReviewId};
pub use paging::{Paged, PageRequest, PaginationDefaults};
pub use event::{Event, EventType};
pub use error_info::HttpErrorInfo;
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
