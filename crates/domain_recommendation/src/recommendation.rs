//! Recommendation record

use core_kernel::{ProductId, RecommendationId};
use serde::{Deserialize, Serialize};

/// A recommendation as exposed by the recommendation service
///
/// `recommendation_id` is absent until the owning service has persisted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    #[serde(
        rename = "recommendationID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendation_id: Option<RecommendationId>,
    pub author: String,
    pub rate: i32,
    pub content: String,
}

impl Recommendation {
    /// A recommendation not yet persisted
    pub fn new(
        product_id: ProductId,
        author: impl Into<String>,
        rate: i32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            recommendation_id: None,
            author: author.into(),
            rate,
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: RecommendationId) -> Self {
        self.recommendation_id = Some(id);
        self
    }
}
