//! Product composite integration
//!
//! One adapter implementing the product, recommendation and review ports
//! against the downstream REST services.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use core_kernel::{
    DomainPort, PageRequest, Paged, PortError, ProductId, RecommendationId, ReviewId,
};
use domain_product::{Product, ProductPort};
use domain_recommendation::{Recommendation, RecommendationPort};
use domain_review::{Review, ReviewPort};

use crate::client::RestClient;
use crate::config::{IntegrationConfig, ServiceUrls};
use crate::error::IntegrationError;

/// HTTP implementation of the three downstream ports
///
/// Stateless after construction: the resolved URLs are read-only and the
/// client is a shared connection pool, so clones are cheap and safe to use
/// from concurrent requests.
#[derive(Debug, Clone)]
pub struct ProductCompositeIntegration {
    client: RestClient,
    urls: ServiceUrls,
}

impl ProductCompositeIntegration {
    /// Validates the configuration and resolves the service URLs
    pub fn new(config: &IntegrationConfig) -> Result<Self, IntegrationError> {
        config.validate()?;
        let client = RestClient::new(config.timeout)?;
        Ok(Self::with_client(client, ServiceUrls::resolve(config)))
    }

    /// Builds the adapter from an existing client and resolved URLs
    pub fn with_client(client: RestClient, urls: ServiceUrls) -> Self {
        info!(
            product = %urls.product,
            recommendation = %urls.recommendation,
            review = %urls.review,
            "Resolved downstream service URLs"
        );
        Self { client, urls }
    }

    pub fn urls(&self) -> &ServiceUrls {
        &self.urls
    }
}

fn item_url(collection: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{}", collection, id)
}

fn keyed_query(key: &'static str, value: impl ToString, page: PageRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![(key, value.to_string())];
    query.extend(page.query_pairs());
    query
}

impl DomainPort for ProductCompositeIntegration {}

#[async_trait]
impl ProductPort for ProductCompositeIntegration {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: ProductId) -> Result<Product, PortError> {
        let url = item_url(&self.urls.product, id);
        debug!(method = "GET", %url, "Call product service");
        self.client.get_json(&url, &[]).await
    }

    #[instrument(skip(self))]
    async fn find_products_by_name(
        &self,
        name: &str,
        page: PageRequest,
    ) -> Result<Paged<Product>, PortError> {
        let query = keyed_query("name", name, page);
        debug!(method = "GET", url = %self.urls.product, ?query, "Call product service");
        self.client.get_json(&self.urls.product, &query).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.product_id))]
    async fn create_product(&self, product: Product) -> Result<Product, PortError> {
        debug!(method = "POST", url = %self.urls.product, ?product, "Call product service");
        self.client.post_json(&self.urls.product, &product).await
    }

    #[instrument(skip(self, product), fields(product_id = %id))]
    async fn update_product(&self, product: Product, id: ProductId) -> Result<Product, PortError> {
        let url = item_url(&self.urls.product, id);
        debug!(method = "PUT", %url, ?product, "Call product service");
        self.client.put_json(&url, &product).await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: ProductId) -> Result<(), PortError> {
        let url = item_url(&self.urls.product, id);
        debug!(method = "DELETE", %url, "Call product service");
        self.client.delete(&url, &[]).await
    }
}

#[async_trait]
impl RecommendationPort for ProductCompositeIntegration {
    #[instrument(skip(self), fields(recommendation_id = %id))]
    async fn get_recommendation(&self, id: RecommendationId) -> Result<Recommendation, PortError> {
        let url = item_url(&self.urls.recommendation, id);
        debug!(method = "GET", %url, "Call recommendation service");
        self.client.get_json(&url, &[]).await
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn get_recommendations_by_product(
        &self,
        product_id: ProductId,
        page: PageRequest,
    ) -> Result<Paged<Recommendation>, PortError> {
        let query = keyed_query("productId", product_id, page);
        debug!(method = "GET", url = %self.urls.recommendation, ?query, "Call recommendation service");
        self.client.get_json(&self.urls.recommendation, &query).await
    }

    #[instrument(skip(self, recommendation), fields(product_id = %recommendation.product_id))]
    async fn create_recommendation(
        &self,
        recommendation: Recommendation,
    ) -> Result<Recommendation, PortError> {
        debug!(method = "POST", url = %self.urls.recommendation, ?recommendation, "Call recommendation service");
        self.client
            .post_json(&self.urls.recommendation, &recommendation)
            .await
    }

    #[instrument(skip(self, recommendation), fields(recommendation_id = %id))]
    async fn update_recommendation(
        &self,
        recommendation: Recommendation,
        id: RecommendationId,
    ) -> Result<Recommendation, PortError> {
        let url = item_url(&self.urls.recommendation, id);
        debug!(method = "PUT", %url, ?recommendation, "Call recommendation service");
        self.client.put_json(&url, &recommendation).await
    }

    #[instrument(skip(self), fields(recommendation_id = %id))]
    async fn delete_recommendation(&self, id: RecommendationId) -> Result<(), PortError> {
        let url = item_url(&self.urls.recommendation, id);
        debug!(method = "DELETE", %url, "Call recommendation service");
        self.client.delete(&url, &[]).await
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn delete_recommendations_by_product(&self, product_id: ProductId) -> Result<(), PortError> {
        let query = [("productId", product_id.to_string())];
        debug!(method = "DELETE", url = %self.urls.recommendation, ?query, "Call recommendation service");
        self.client.delete(&self.urls.recommendation, &query).await
    }
}

#[async_trait]
impl ReviewPort for ProductCompositeIntegration {
    #[instrument(skip(self), fields(review_id = %id))]
    async fn get_review(&self, id: ReviewId) -> Result<Review, PortError> {
        let url = item_url(&self.urls.review, id);
        debug!(method = "GET", %url, "Call review service");
        self.client.get_json(&url, &[]).await
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn get_reviews_by_product(
        &self,
        product_id: ProductId,
        page: PageRequest,
    ) -> Result<Paged<Review>, PortError> {
        let query = keyed_query("productId", product_id, page);
        debug!(method = "GET", url = %self.urls.review, ?query, "Call review service");
        self.client.get_json(&self.urls.review, &query).await
    }

    #[instrument(skip(self, review), fields(product_id = %review.product_id))]
    async fn create_review(&self, review: Review) -> Result<Review, PortError> {
        debug!(method = "POST", url = %self.urls.review, ?review, "Call review service");
        self.client.post_json(&self.urls.review, &review).await
    }

    #[instrument(skip(self, review), fields(review_id = %id))]
    async fn update_review(&self, review: Review, id: ReviewId) -> Result<Review, PortError> {
        let url = item_url(&self.urls.review, id);
        debug!(method = "PUT", %url, ?review, "Call review service");
        self.client.put_json(&url, &review).await
    }

    #[instrument(skip(self), fields(review_id = %id))]
    async fn delete_review(&self, id: ReviewId) -> Result<(), PortError> {
        let url = item_url(&self.urls.review, id);
        debug!(method = "DELETE", %url, "Call review service");
        self.client.delete(&url, &[]).await
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn delete_reviews_by_product(&self, product_id: ProductId) -> Result<(), PortError> {
        let query = [("productId", product_id.to_string())];
        debug!(method = "DELETE", url = %self.urls.review, ?query, "Call review service");
        self.client.delete(&self.urls.review, &query).await
    }
}
