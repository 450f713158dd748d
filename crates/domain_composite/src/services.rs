//! Product composite service
//!
//! Orchestrates the fan-out calls behind the composite API. Each operation
//! either returns a complete result or a single error; results of branches
//! that succeeded next to a failed one are discarded.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use core_kernel::{Event, PageRequest, PaginationDefaults, ProductId};
use domain_product::{Product, ProductPort};
use domain_recommendation::RecommendationPort;
use domain_review::ReviewPort;

use crate::aggregate::ProductAggregate;
use crate::composite::ProductComposite;
use crate::error::CompositeError;
use crate::mapper;
use crate::publisher::{EventPublisher, Topic};

/// Composite read, write and delete operations
pub struct ProductCompositeService {
    products: Arc<dyn ProductPort>,
    recommendations: Arc<dyn RecommendationPort>,
    reviews: Arc<dyn ReviewPort>,
    publisher: Arc<dyn EventPublisher>,
    pagination: PaginationDefaults,
}

impl ProductCompositeService {
    pub fn new(
        products: Arc<dyn ProductPort>,
        recommendations: Arc<dyn RecommendationPort>,
        reviews: Arc<dyn ReviewPort>,
        publisher: Arc<dyn EventPublisher>,
        pagination: PaginationDefaults,
    ) -> Self {
        Self {
            products,
            recommendations,
            reviews,
            publisher,
            pagination,
        }
    }

    /// Builds the service over one adapter implementing all three ports
    pub fn from_integration<I>(
        integration: Arc<I>,
        publisher: Arc<dyn EventPublisher>,
        pagination: PaginationDefaults,
    ) -> Self
    where
        I: ProductPort + RecommendationPort + ReviewPort,
    {
        Self::new(
            integration.clone(),
            integration.clone(),
            integration,
            publisher,
            pagination,
        )
    }

    /// Fetches a product with one page of its recommendations and reviews
    ///
    /// The three calls run concurrently. Page coordinates missing from `page`
    /// come from the configured defaults.
    ///
    /// # Errors
    ///
    /// Once all three calls have settled, the first failure in the order
    /// product, recommendations, reviews is returned. A missing product is
    /// therefore always reported as `NotFound`.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_composite_product(
        &self,
        product_id: ProductId,
        page: PageRequest,
    ) -> Result<ProductAggregate, CompositeError> {
        let page = page.resolve(&self.pagination);
        debug!(?page, "Fetching composite product");

        let (product, recommendations, reviews) = tokio::join!(
            self.products.get_product(product_id),
            self.recommendations
                .get_recommendations_by_product(product_id, page),
            self.reviews.get_reviews_by_product(product_id, page),
        );

        let product = product?;
        let recommendations = recommendations?;
        let reviews = reviews?;

        debug!(
            recommendations = recommendations.len(),
            reviews = reviews.len(),
            "Composite product assembled"
        );
        Ok(mapper::to_aggregate(product, recommendations, reviews))
    }

    /// Creates the product and every recommendation and review of `body`
    ///
    /// Issues one create call per entity, all concurrently, and returns the
    /// created entities in input order.
    ///
    /// # Errors
    ///
    /// Any failed call fails the whole operation. Entities created by the
    /// other calls are not rolled back.
    #[instrument(
        skip(self, body),
        fields(
            product_id = %body.product_id,
            recommendations = body.recommendations.len(),
            reviews = body.reviews.len()
        )
    )]
    pub async fn create_composite_product(
        &self,
        body: ProductComposite,
    ) -> Result<ProductComposite, CompositeError> {
        let ProductComposite {
            product_id,
            name,
            weight,
            recommendations,
            reviews,
        } = body;

        let recommendation_calls = recommendations
            .into_iter()
            .map(|summary| mapper::to_recommendation(product_id, summary))
            .map(|recommendation| self.recommendations.create_recommendation(recommendation));
        let review_calls = reviews
            .into_iter()
            .map(|summary| mapper::to_review(product_id, summary))
            .map(|review| self.reviews.create_review(review));

        let (product, recommendations, reviews) = tokio::join!(
            self.products
                .create_product(Product::new(product_id, name, weight)),
            join_all(recommendation_calls),
            join_all(review_calls),
        );

        let product = product?;
        let recommendations = recommendations.into_iter().collect::<Result<Vec<_>, _>>()?;
        let reviews = reviews.into_iter().collect::<Result<Vec<_>, _>>()?;

        info!(
            recommendations = recommendations.len(),
            reviews = reviews.len(),
            "Composite product created"
        );
        Ok(mapper::to_composite(product, recommendations, reviews))
    }

    /// Announces the deletion of a composite product
    ///
    /// Nothing is deleted here: one `DELETE` event is published per owning
    /// service and the consumers perform the deletion later.
    ///
    /// # Errors
    ///
    /// Topics are published in the order products, recommendations, reviews
    /// and publishing stops at the first failure. Events already sent are not
    /// recalled, so their consumers still delete; the failure is logged with
    /// the topics that did receive the event.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn delete_composite_product(&self, product_id: ProductId) -> Result<(), CompositeError> {
        let event = Event::delete(product_id);
        let mut published = Vec::with_capacity(Topic::ALL.len());
        for topic in Topic::ALL {
            if let Err(e) = self.publisher.publish(topic, &event).await {
                warn!(
                    failed = %topic,
                    already_published = ?published,
                    error = %e,
                    "Deletion only partly announced"
                );
                return Err(e.into());
            }
            published.push(topic.name());
        }
        info!("Deletion events published");
        Ok(())
    }
}
