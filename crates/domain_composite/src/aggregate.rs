//! Read-side view of a product and its recommendations and reviews
//!
//! A [`ProductAggregate`] is built fresh for every request and never stored.

use serde::{Deserialize, Serialize};

use core_kernel::{ProductId, RecommendationId, ReviewId};

/// Page coordinates and totals of an outward page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
}

/// Outward paged collection: the items plus their page metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPage<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

impl<T> SummaryPage<T> {
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A recommendation as seen by composite callers
///
/// Also used as the write-side payload, where the id is left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSummary {
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

impl RecommendationSummary {
    pub fn new(author: impl Into<String>, rate: i32, content: impl Into<String>) -> Self {
        Self {
            recommendation_id: None,
            author: author.into(),
            rate,
            content: content.into(),
        }
    }
}

/// A review as seen by composite callers
///
/// Also used as the write-side payload, where the id is left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    #[serde(rename = "reviewID", default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<ReviewId>,
    pub author: String,
    pub subject: String,
    pub content: String,
}

impl ReviewSummary {
    pub fn new(
        author: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            review_id: None,
            author: author.into(),
            subject: subject.into(),
            content: content.into(),
        }
    }
}

/// A product with one page of its recommendations and one page of its reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAggregate {
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub name: String,
    pub weight: f64,
    pub recommendations: SummaryPage<RecommendationSummary>,
    pub reviews: SummaryPage<ReviewSummary>,
}
