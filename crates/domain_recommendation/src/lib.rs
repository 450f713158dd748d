//! Recommendation Domain
//!
//! The recommendation record owned by the recommendation service and the port
//! through which the composite layer reaches that service.

pub mod recommendation;
pub mod ports;

pub use recommendation::Recommendation;
pub use ports::RecommendationPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockRecommendationPort;
