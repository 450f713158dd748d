//! In-memory downstream services
//!
//! Bundles the three mock ports so API and property tests can build a fully
//! wired composite service and still inspect each backend afterwards.

use std::sync::Arc;

use core_kernel::ProductId;
use domain_composite::{channel, EventChannels, ProductCompositeService};
use domain_product::MockProductPort;
use domain_recommendation::MockRecommendationPort;
use domain_review::MockReviewPort;

use crate::fixtures::{PaginationFixtures, ProductFixtures, RecommendationFixtures, ReviewFixtures};

/// The three mocked owning services
#[derive(Clone, Default)]
pub struct MockBackends {
    pub products: Arc<MockProductPort>,
    pub recommendations: Arc<MockRecommendationPort>,
    pub reviews: Arc<MockReviewPort>,
}

impl MockBackends {
    /// Backends holding no data
    pub fn empty() -> Self {
        Self::default()
    }

    /// Backends holding the fixture product, three recommendations and two reviews
    ///
    /// The product is stored under `product_id`, keeping the fixture's name
    /// and weight.
    pub async fn seeded(product_id: ProductId) -> Self {
        let mut product = ProductFixtures::shovel();
        product.product_id = product_id;

        Self {
            products: Arc::new(MockProductPort::with_products(vec![product]).await),
            recommendations: Arc::new(
                MockRecommendationPort::with_recommendations(RecommendationFixtures::for_product(
                    product_id, 3,
                ))
                .await,
            ),
            reviews: Arc::new(
                MockReviewPort::with_reviews(ReviewFixtures::for_product(product_id, 2)).await,
            ),
        }
    }

    /// A composite service over these backends, publishing to fresh channels
    pub fn service_with_channels(&self, buffer: usize) -> (ProductCompositeService, EventChannels) {
        let (publisher, channels) = channel(buffer);
        let service = ProductCompositeService::new(
            self.products.clone(),
            self.recommendations.clone(),
            self.reviews.clone(),
            Arc::new(publisher),
            PaginationFixtures::defaults(),
        );
        (service, channels)
    }

    /// Create calls received by all three backends together
    pub fn total_create_calls(&self) -> usize {
        self.products.create_calls()
            + self.recommendations.create_calls()
            + self.reviews.create_calls()
    }
}
