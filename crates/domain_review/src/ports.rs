//! Review Domain Ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PageRequest, Paged, PortError, ProductId, ReviewId};

use crate::review::Review;

/// Port to the review service
#[async_trait]
pub trait ReviewPort: DomainPort {
    async fn get_review(&self, id: ReviewId) -> Result<Review, PortError>;

    /// Lists one page of the reviews of a product
    async fn get_reviews_by_product(
        &self,
        product_id: ProductId,
        page: PageRequest,
    ) -> Result<Paged<Review>, PortError>;

    /// Creates a review; a rejected payload yields `PortError::InvalidInput`
    async fn create_review(&self, review: Review) -> Result<Review, PortError>;

    async fn update_review(&self, review: Review, id: ReviewId) -> Result<Review, PortError>;

    /// Deletes one review; deleting an absent one succeeds
    async fn delete_review(&self, id: ReviewId) -> Result<(), PortError>;

    /// Deletes every review of a product; idempotent
    async fn delete_reviews_by_product(&self, product_id: ProductId) -> Result<(), PortError>;
}

/// Mock implementation of ReviewPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory mock implementation of ReviewPort
    #[derive(Debug, Default)]
    pub struct MockReviewPort {
        reviews: RwLock<BTreeMap<ReviewId, Review>>,
        next_id: AtomicI32,
        page_requests: RwLock<Vec<(ProductId, PageRequest)>>,
        listing_failure: RwLock<Option<PortError>>,
        create_failure: RwLock<Option<PortError>>,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl MockReviewPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_reviews(reviews: Vec<Review>) -> Self {
            let port = Self::new();
            for review in reviews {
                port.store(review).await;
            }
            port
        }

        async fn store(&self, mut review: Review) -> Review {
            let id = match review.review_id {
                Some(id) => {
                    self.next_id.fetch_max(id.value(), Ordering::SeqCst);
                    id
                }
                None => ReviewId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            };
            review.review_id = Some(id);
            self.reviews.write().await.insert(id, review.clone());
            review
        }

        pub async fn fail_listing_with(&self, error: PortError) {
            *self.listing_failure.write().await = Some(error);
        }

        pub async fn fail_create_with(&self, error: PortError) {
            *self.create_failure.write().await = Some(error);
        }

        pub async fn page_requests(&self) -> Vec<(ProductId, PageRequest)> {
            self.page_requests.read().await.clone()
        }

        pub async fn count_for_product(&self, product_id: ProductId) -> usize {
            self.reviews
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

    impl DomainPort for MockReviewPort {}

    #[async_trait]
    impl ReviewPort for MockReviewPort {
        async fn get_review(&self, id: ReviewId) -> Result<Review, PortError> {
            self.reviews
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found(format!("No review found for reviewId: {}", id)))
        }

        async fn get_reviews_by_product(
            &self,
            product_id: ProductId,
            page: PageRequest,
        ) -> Result<Paged<Review>, PortError> {
            self.page_requests.write().await.push((product_id, page));
            if let Some(error) = self.listing_failure.read().await.clone() {
                return Err(error);
            }
            let matching: Vec<Review> = self
                .reviews
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

        async fn create_review(&self, review: Review) -> Result<Review, PortError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.create_failure.read().await.clone() {
                return Err(error);
            }
            if let Some(id) = review.review_id {
                if self.reviews.read().await.contains_key(&id) {
                    return Err(PortError::invalid_input(format!(
                        "Duplicate key, productId: {}, reviewId: {}",
                        review.product_id, id
                    )));
                }
            }
            Ok(self.store(review).await)
        }

        async fn update_review(&self, mut review: Review, id: ReviewId) -> Result<Review, PortError> {
            let mut store = self.reviews.write().await;
            if !store.contains_key(&id) {
                return Err(PortError::not_found(format!("No review found for reviewId: {}", id)));
            }
            review.review_id = Some(id);
            store.insert(id, review.clone());
            Ok(review)
        }

        async fn delete_review(&self, id: ReviewId) -> Result<(), PortError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.reviews.write().await.remove(&id);
            Ok(())
        }

        async fn delete_reviews_by_product(&self, product_id: ProductId) -> Result<(), PortError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.reviews
                .write()
                .await
                .retain(|_, r| r.product_id != product_id);
            Ok(())
        }
    }
}
