//! Write-side composite payload

use serde::{Deserialize, Serialize};

use core_kernel::ProductId;

use crate::aggregate::{RecommendationSummary, ReviewSummary};

/// A product bundled with the recommendations and reviews to create for it
///
/// Items do not need to carry the product id: it is stamped from the root
/// before they are sent to their service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComposite {
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub recommendations: Vec<RecommendationSummary>,
    #[serde(default)]
    pub reviews: Vec<ReviewSummary>,
}

impl ProductComposite {
    pub fn new(product_id: ProductId, name: impl Into<String>, weight: f64) -> Self {
        Self {
            product_id,
            name: name.into(),
            weight,
            recommendations: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Number of downstream create calls this composite requires
    pub fn create_call_count(&self) -> usize {
        1 + self.recommendations.len() + self.reviews.len()
    }
}
