//! Property-based Test Generators
//!
//! Proptest strategies for composite payloads and paged listings.

use proptest::prelude::*;

use core_kernel::{Paged, ProductId};
use domain_composite::{ProductComposite, RecommendationSummary, ReviewSummary};

/// Generates positive product ids
pub fn product_id_strategy() -> impl Strategy<Value = ProductId> {
    (1i32..100_000).prop_map(ProductId::new)
}

/// Generates short author or subject names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,12}"
}

pub fn recommendation_summary_strategy() -> impl Strategy<Value = RecommendationSummary> {
    (name_strategy(), 1i32..=5, "[a-z ]{0,40}")
        .prop_map(|(author, rate, content)| RecommendationSummary::new(author, rate, content))
}

pub fn review_summary_strategy() -> impl Strategy<Value = ReviewSummary> {
    (name_strategy(), name_strategy(), "[a-z ]{0,40}")
        .prop_map(|(author, subject, content)| ReviewSummary::new(author, subject, content))
}

/// Generates creation payloads with up to `max_items` recommendations and reviews
pub fn product_composite_strategy(max_items: usize) -> impl Strategy<Value = ProductComposite> {
    (
        product_id_strategy(),
        name_strategy(),
        0.0f64..1_000.0,
        prop::collection::vec(recommendation_summary_strategy(), 0..=max_items),
        prop::collection::vec(review_summary_strategy(), 0..=max_items),
    )
        .prop_map(|(product_id, name, weight, recommendations, reviews)| ProductComposite {
            product_id,
            name,
            weight,
            recommendations,
            reviews,
        })
}

/// Generates consistent pages of integers with backend-reported totals
pub fn paged_strategy() -> impl Strategy<Value = Paged<i32>> {
    (1u32..50, 0u32..20).prop_flat_map(|(page_size, page_number)| {
        (
            prop::collection::vec(any::<i32>(), 0..=page_size as usize),
            0u64..10_000,
        )
            .prop_map(move |(items, total_elements)| {
                let total_pages = total_elements.div_ceil(u64::from(page_size)) as u32;
                Paged::new(items, page_number, page_size).with_totals(total_elements, total_pages)
            })
    })
}
