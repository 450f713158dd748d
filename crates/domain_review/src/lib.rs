//! Review Domain
//!
//! The review record owned by the review service and the port through which
//! the composite layer reaches that service.

pub mod review;
pub mod ports;

pub use review::Review;
pub use ports::ReviewPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockReviewPort;
