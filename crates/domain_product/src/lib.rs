//! Product Domain
//!
//! The product record owned by the product service and the port through which
//! the composite layer reaches that service.
//!
//! The composite treats a [`Product`] as an opaque DTO: it marshals and
//! forwards it without validating business fields.

pub mod product;
pub mod ports;

pub use product::Product;
pub use ports::ProductPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockProductPort;
