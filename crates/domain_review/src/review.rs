//! Review record

use core_kernel::{ProductId, ReviewId};
use serde::{Deserialize, Serialize};

/// A review as exposed by the review service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    #[serde(rename = "reviewID", default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<ReviewId>,
    pub author: String,
    pub subject: String,
    pub content: String,
}

impl Review {
    pub fn new(
        product_id: ProductId,
        author: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            review_id: None,
            author: author.into(),
            subject: subject.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: ReviewId) -> Self {
        self.review_id = Some(id);
        self
    }
}
