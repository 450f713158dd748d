//! Recommendation Domain Ports
//!
//! The `RecommendationPort` trait is the contract the composite layer needs
//! from the recommendation service. Recommendations are listed and bulk
//! deleted by the product they belong to.

use async_trait::async_trait;

use core_kernel::{DomainPort, PageRequest, Paged, PortError, ProductId, RecommendationId};

use crate::recommendation::Recommendation;

/// Port to the recommendation service
#[async_trait]
pub trait RecommendationPort: DomainPort {
    /// Retrieves a recommendation by id, or `PortError::NotFound`
    async fn get_recommendation(&self, id: RecommendationId) -> Result<Recommendation, PortError>;

    /// Lists one page of the recommendations of a product
    ///
    /// Coordinates left unset in `page` are not sent downstream.
    async fn get_recommendations_by_product(
        &self,
        product_id: ProductId,
        page: PageRequest,
    ) -> Result<Paged<Recommendation>, PortError>;

    /// Creates a recommendation
    ///
    /// A duplicate or invalid payload yields `PortError::InvalidInput`.
    async fn create_recommendation(
        &self,
        recommendation: Recommendation,
    ) -> Result<Recommendation, PortError>;

    /// Replaces the recommendation stored under `id`
    async fn update_recommendation(
        &self,
        recommendation: Recommendation,
        id: RecommendationId,
    ) -> Result<Recommendation, PortError>;

    /// Deletes one recommendation; deleting an absent one succeeds
    async fn delete_recommendation(&self, id: RecommendationId) -> Result<(), PortError>;

    /// Deletes every recommendation of a product; idempotent
    async fn delete_recommendations_by_product(&self, product_id: ProductId) -> Result<(), PortError>;
}

/// Mock implementation of RecommendationPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory mock implementation of RecommendationPort
    ///
    /// Assigns ids on creation, records the page requests it receives and
    /// can be told to fail listings or the creation of specific authors.
    #[derive(Debug, Default)]
    pub struct MockRecommendationPort {
        recommendations: RwLock<BTreeMap<RecommendationId, Recommendation>>,
        next_id: AtomicI32,
        page_requests: RwLock<Vec<(ProductId, PageRequest)>>,
        listing_failure: RwLock<Option<PortError>>,
        create_failures: RwLock<Vec<(String, PortError)>>,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl MockRecommendationPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with recommendations; missing ids are assigned
        pub async fn with_recommendations(recommendations: Vec<Recommendation>) -> Self {
            let port = Self::new();
            for recommendation in recommendations {
                port.store(recommendation).await;
            }
            port
        }

        async fn store(&self, mut recommendation: Recommendation) -> Recommendation {
            let id = match recommendation.recommendation_id {
                Some(id) => {
                    self.next_id.fetch_max(id.value(), Ordering::SeqCst);
                    id
                }
                None => RecommendationId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            };
            recommendation.recommendation_id = Some(id);
            self.recommendations
                .write()
                .await
                .insert(id, recommendation.clone());
            recommendation
        }

        /// Makes every listing call fail with `error`
        pub async fn fail_listing_with(&self, error: PortError) {
            *self.listing_failure.write().await = Some(error);
        }

        /// Makes the creation of any recommendation by `author` fail with `error`
        pub async fn fail_create_for_author(&self, author: impl Into<String>, error: PortError) {
            self.create_failures.write().await.push((author.into(), error));
        }

        /// Page requests received by listing calls, in call order
        pub async fn page_requests(&self) -> Vec<(ProductId, PageRequest)> {
            self.page_requests.read().await.clone()
        }

        pub async fn count_for_product(&self, product_id: ProductId) -> usize {
            self.recommendations
                .read()
                .await
                .values()
                .filter(|r| r.product_id == product_id)
                .count()
        }

        pub fn create_calls(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        pub fn delete_calls(&self) -> usize {
            self.delete_calls.load(Ordering::SeqCst)
        }
    }

    impl DomainPort for MockRecommendationPort {}

    #[async_trait]
    impl RecommendationPort for MockRecommendationPort {
        async fn get_recommendation(&self, id: RecommendationId) -> Result<Recommendation, PortError> {
            self.recommendations
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| {
                    PortError::not_found(format!("No recommendation found for recommendationId: {}", id))
                })
        }

        async fn get_recommendations_by_product(
            &self,
            product_id: ProductId,
            page: PageRequest,
        ) -> Result<Paged<Recommendation>, PortError> {
            self.page_requests.write().await.push((product_id, page));
            if let Some(error) = self.listing_failure.read().await.clone() {
                return Err(error);
            }
            let matching: Vec<Recommendation> = self
                .recommendations
                .read()
                .await
                .values()
                .filter(|r| r.product_id == product_id)
                .cloned()
                .collect();
            Ok(Paged::slice(
                matching,
                page.page_number.unwrap_or(0),
                page.page_size.unwrap_or(10),
            ))
        }

        async fn create_recommendation(
            &self,
            recommendation: Recommendation,
        ) -> Result<Recommendation, PortError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let failure = self
                .create_failures
                .read()
                .await
                .iter()
                .find(|(author, _)| *author == recommendation.author)
                .map(|(_, error)| error.clone());
            if let Some(error) = failure {
                return Err(error);
            }
            if let Some(id) = recommendation.recommendation_id {
                if self.recommendations.read().await.contains_key(&id) {
                    return Err(PortError::invalid_input(format!(
                        "Duplicate key, productId: {}, recommendationId: {}",
                        recommendation.product_id, id
                    )));
                }
            }
            Ok(self.store(recommendation).await)
        }

        async fn update_recommendation(
            &self,
            mut recommendation: Recommendation,
            id: RecommendationId,
        ) -> Result<Recommendation, PortError> {
            let mut store = self.recommendations.write().await;
            if !store.contains_key(&id) {
                return Err(PortError::not_found(format!(
                    "No recommendation found for recommendationId: {}",
                    id
                )));
            }
            recommendation.recommendation_id = Some(id);
            store.insert(id, recommendation.clone());
            Ok(recommendation)
        }

        async fn delete_recommendation(&self, id: RecommendationId) -> Result<(), PortError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.recommendations.write().await.remove(&id);
            Ok(())
        }

        async fn delete_recommendations_by_product(&self, product_id: ProductId) -> Result<(), PortError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.recommendations
                .write()
                .await
                .retain(|_, r| r.product_id != product_id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRecommendationPort;
    use super::*;

    #[tokio::test]
    async fn test_mock_assigns_ids_in_sequence() {
        let port = MockRecommendationPort::new();
        let first = port
            .create_recommendation(Recommendation::new(ProductId::new(1), "ann", 3, "ok"))
            .await
            .unwrap();
        let second = port
            .create_recommendation(Recommendation::new(ProductId::new(1), "bob", 5, "great"))
            .await
            .unwrap();

        assert_eq!(first.recommendation_id, Some(RecommendationId::new(1)));
        assert_eq!(second.recommendation_id, Some(RecommendationId::new(2)));
        assert_eq!(port.create_calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_records_page_requests() {
        let port = MockRecommendationPort::new();
        port.get_recommendations_by_product(ProductId::new(4), PageRequest::of(0, 10))
            .await
            .unwrap();

        assert_eq!(
            port.page_requests().await,
            vec![(ProductId::new(4), PageRequest::of(0, 10))]
        );
    }

    #[tokio::test]
    async fn test_mock_author_failure() {
        let port = MockRecommendationPort::new();
        port.fail_create_for_author("mallory", PortError::invalid_input("rejected"))
            .await;

        let result = port
            .create_recommendation(Recommendation::new(ProductId::new(1), "mallory", 1, "spam"))
            .await;
        assert!(result.unwrap_err().is_invalid_input());
    }

    #[tokio::test]
    async fn test_mock_delete_by_product_is_idempotent() {
        let port = MockRecommendationPort::with_recommendations(vec![
            Recommendation::new(ProductId::new(1), "ann", 3, "ok"),
            Recommendation::new(ProductId::new(2), "bob", 4, "fine"),
        ])
        .await;

        port.delete_recommendations_by_product(ProductId::new(1)).await.unwrap();
        port.delete_recommendations_by_product(ProductId::new(1)).await.unwrap();

        assert_eq!(port.count_for_product(ProductId::new(1)).await, 0);
        assert_eq!(port.count_for_product(ProductId::new(2)).await, 1);
    }
}
