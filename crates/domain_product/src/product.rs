//! Product record

use core_kernel::ProductId;
use serde::{Deserialize, Serialize};

/// A product as exposed by the product service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub name: String,
    pub weight: f64,
}

impl Product {
    pub fn new(product_id: ProductId, name: impl Into<String>, weight: f64) -> Self {
        Self {
            product_id,
            name: name.into(),
            weight,
        }
    }
}
