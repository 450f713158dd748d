//! Request and response data transfer objects

pub mod composite;

pub use composite::PageQuery;
