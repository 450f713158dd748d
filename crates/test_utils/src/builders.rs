//! Test Data Builders
//!
//! Builder patterns for composite payloads. Tests set only the fields they
//! care about and rely on defaults for the rest.

use core_kernel::ProductId;
use domain_composite::{ProductComposite, RecommendationSummary, ReviewSummary};

use crate::fixtures::{IdFixtures, ProductFixtures};

/// Builder for constructing composite creation payloads
pub struct ProductCompositeBuilder {
    product_id: ProductId,
    name: String,
    weight: f64,
    recommendations: Vec<RecommendationSummary>,
    reviews: Vec<ReviewSummary>,
}

impl Default for ProductCompositeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCompositeBuilder {
    /// Creates a builder for the fixture product, without items
    pub fn new() -> Self {
        let product = ProductFixtures::shovel();
        Self {
            product_id: IdFixtures::product_id(),
            name: product.name,
            weight: product.weight,
            recommendations: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn with_product_id(mut self, id: ProductId) -> Self {
        self.product_id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Adds one recommendation payload
    pub fn add_recommendation(
        mut self,
        author: impl Into<String>,
        rate: i32,
        content: impl Into<String>,
    ) -> Self {
        self.recommendations
            .push(RecommendationSummary::new(author, rate, content));
        self
    }

    /// Adds one review payload
    pub fn add_review(
        mut self,
        author: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.reviews.push(ReviewSummary::new(author, subject, content));
        self
    }

    /// Adds `count` recommendations by `author-0`, `author-1`, ...
    pub fn with_recommendations(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.add_recommendation(format!("author-{}", i), 4, format!("recommendation {}", i));
        }
        self
    }

    /// Adds `count` reviews by `reviewer-0`, `reviewer-1`, ...
    pub fn with_reviews(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.add_review(format!("reviewer-{}", i), "Subject", format!("review {}", i));
        }
        self
    }

    pub fn build(self) -> ProductComposite {
        ProductComposite {
            product_id: self.product_id,
            name: self.name,
            weight: self.weight,
            recommendations: self.recommendations,
            reviews: self.reviews,
        }
    }
}
