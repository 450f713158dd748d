//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the downstream records and events. Values are
//! fixed so tests can assert on them directly.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Event, EventType, PaginationDefaults, ProductId};
use domain_product::Product;
use domain_recommendation::Recommendation;
use domain_review::Review;

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// The product every seeded fixture belongs to
    pub fn product_id() -> ProductId {
        ProductId::new(42)
    }

    /// A product id no fixture uses
    pub fn missing_product_id() -> ProductId {
        ProductId::new(13)
    }

    /// A second product, for isolation checks
    pub fn other_product_id() -> ProductId {
        ProductId::new(7)
    }
}

/// Fixture for product records
pub struct ProductFixtures;

impl ProductFixtures {
    pub fn shovel() -> Product {
        Product::new(IdFixtures::product_id(), "Shovel", 2.5)
    }

    pub fn rake() -> Product {
        Product::new(IdFixtures::other_product_id(), "Rake", 1.25)
    }
}

/// Fixture for recommendation records
pub struct RecommendationFixtures;

impl RecommendationFixtures {
    /// `count` unsaved recommendations of `product_id`, authors `author-0..`
    pub fn for_product(product_id: ProductId, count: usize) -> Vec<Recommendation> {
        (0..count)
            .map(|i| {
                Recommendation::new(
                    product_id,
                    format!("author-{}", i),
                    (i % 5) as i32 + 1,
                    format!("recommendation {}", i),
                )
            })
            .collect()
    }
}

/// Fixture for review records
pub struct ReviewFixtures;

impl ReviewFixtures {
    /// `count` unsaved reviews of `product_id`, authors `reviewer-0..`
    pub fn for_product(product_id: ProductId, count: usize) -> Vec<Review> {
        (0..count)
            .map(|i| {
                Review::new(
                    product_id,
                    format!("reviewer-{}", i),
                    format!("Subject {}", i),
                    format!("review {}", i),
                )
            })
            .collect()
    }
}

/// Fixture for integration events
pub struct EventFixtures;

impl EventFixtures {
    /// Creation date used by every fixture event (Jan 1, 2024)
    pub fn creation_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    pub fn delete(product_id: ProductId) -> Event<ProductId> {
        Event::at(EventType::Delete, product_id, Self::creation_date())
    }

    pub fn create(product_id: ProductId) -> Event<ProductId> {
        Event::at(EventType::Create, product_id, Self::creation_date())
    }

    /// JSON payload of a delete event, as it travels on a topic
    pub fn delete_payload(product_id: ProductId) -> Vec<u8> {
        serde_json::to_vec(&Self::delete(product_id)).unwrap()
    }
}

/// Fixture for pagination settings
pub struct PaginationFixtures;

impl PaginationFixtures {
    pub fn defaults() -> PaginationDefaults {
        PaginationDefaults {
            page_number: 0,
            page_size: 10,
        }
    }
}
