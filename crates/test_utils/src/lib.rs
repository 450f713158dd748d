//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! product composite test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for products, recommendations, reviews and events
//! - `builders`: Builder patterns for composite payloads
//! - `backends`: In-memory downstream services wired into a composite service
//! - `assertions`: Custom assertion helpers for composite views and error bodies
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod backends;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use backends::*;
pub use assertions::*;
pub use generators::*;
