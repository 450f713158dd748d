//! Conversions between downstream records and composite views
//!
//! All functions here are pure: no I/O and no dependency on configuration.

use core_kernel::{Paged, ProductId};
use domain_product::Product;
use domain_recommendation::Recommendation;
use domain_review::Review;

use crate::aggregate::{
    PageMetadata, ProductAggregate, RecommendationSummary, ReviewSummary, SummaryPage,
};
use crate::composite::ProductComposite;

/// Converts a downstream page into an outward page, keeping order and metadata
pub fn to_summary_page<T, U, F>(page: Paged<T>, f: F) -> SummaryPage<U>
where
    F: FnMut(T) -> U,
{
    let metadata = PageMetadata {
        size: page.page_size,
        total_elements: page.total_elements,
        total_pages: page.total_pages,
        number: page.page_number,
    };
    SummaryPage {
        content: page.items.into_iter().map(f).collect(),
        page: metadata,
    }
}

pub fn to_recommendation_summary(recommendation: Recommendation) -> RecommendationSummary {
    RecommendationSummary {
        recommendation_id: recommendation.recommendation_id,
        author: recommendation.author,
        rate: recommendation.rate,
        content: recommendation.content,
    }
}

pub fn to_review_summary(review: Review) -> ReviewSummary {
    ReviewSummary {
        review_id: review.review_id,
        author: review.author,
        subject: review.subject,
        content: review.content,
    }
}

/// Backend create-shape of a recommendation payload, owned by `product_id`
pub fn to_recommendation(product_id: ProductId, summary: RecommendationSummary) -> Recommendation {
    Recommendation {
        product_id,
        recommendation_id: summary.recommendation_id,
        author: summary.author,
        rate: summary.rate,
        content: summary.content,
    }
}

/// Backend create-shape of a review payload, owned by `product_id`
pub fn to_review(product_id: ProductId, summary: ReviewSummary) -> Review {
    Review {
        product_id,
        review_id: summary.review_id,
        author: summary.author,
        subject: summary.subject,
        content: summary.content,
    }
}

pub fn to_aggregate(
    product: Product,
    recommendations: Paged<Recommendation>,
    reviews: Paged<Review>,
) -> ProductAggregate {
    ProductAggregate {
        product_id: product.product_id,
        name: product.name,
        weight: product.weight,
        recommendations: to_summary_page(recommendations, to_recommendation_summary),
        reviews: to_summary_page(reviews, to_review_summary),
    }
}

pub fn to_composite(
    product: Product,
    recommendations: Vec<Recommendation>,
    reviews: Vec<Review>,
) -> ProductComposite {
    ProductComposite {
        product_id: product.product_id,
        name: product.name,
        weight: product.weight,
        recommendations: recommendations
            .into_iter()
            .map(to_recommendation_summary)
            .collect(),
        reviews: reviews.into_iter().map(to_review_summary).collect(),
    }
}
