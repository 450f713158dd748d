//! Product Domain Ports
//!
//! The `ProductPort` trait is the contract the composite layer needs from the
//! product service. Implementations:
//!
//! - **HTTP Adapter**: `infra_http::ProductCompositeIntegration`
//! - **Mock Adapter**: in-memory store for tests (`mock` feature)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_product::ProductPort;
//! use std::sync::Arc;
//!
//! pub struct CatalogView {
//!     products: Arc<dyn ProductPort>,
//! }
//!
//! impl CatalogView {
//!     pub async fn product(&self, id: ProductId) -> Result<Product, PortError> {
//!         self.products.get_product(id).await
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PageRequest, Paged, PortError, ProductId};

use crate::product::Product;

/// Port to the product service
///
/// All methods return `Result<T, PortError>` with failures already
/// classified by the adapter.
#[async_trait]
pub trait ProductPort: DomainPort {
    /// Retrieves a product by id
    ///
    /// # Returns
    ///
    /// The product if found, or `PortError::NotFound`
    async fn get_product(&self, id: ProductId) -> Result<Product, PortError>;

    /// Lists products with the given name, one page at a time
    ///
    /// Coordinates left unset in `page` are not sent downstream.
    async fn find_products_by_name(
        &self,
        name: &str,
        page: PageRequest,
    ) -> Result<Paged<Product>, PortError>;

    /// Creates a product
    ///
    /// A duplicate or invalid payload yields `PortError::InvalidInput`.
    async fn create_product(&self, product: Product) -> Result<Product, PortError>;

    /// Replaces the product stored under `id`
    async fn update_product(&self, product: Product, id: ProductId) -> Result<Product, PortError>;

    /// Deletes a product
    ///
    /// Idempotent: deleting an absent product succeeds.
    async fn delete_product(&self, id: ProductId) -> Result<(), PortError>;
}

/// Mock implementation of ProductPort for testing
///
/// Stores products in memory, counts calls and can be told to fail.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory mock implementation of ProductPort
    #[derive(Debug, Default)]
    pub struct MockProductPort {
        products: RwLock<BTreeMap<ProductId, Product>>,
        get_failure: RwLock<Option<PortError>>,
        create_failure: RwLock<Option<PortError>>,
        get_calls: AtomicUsize,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl MockProductPort {
        /// Creates a new, empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with products for testing
        pub async fn with_products(products: Vec<Product>) -> Self {
            let port = Self::new();
            {
                let mut store = port.products.write().await;
                for product in products {
                    store.insert(product.product_id, product);
                }
            }
            port
        }

        /// Makes every `get_product` call fail with `error`
        pub async fn fail_get_with(&self, error: PortError) {
            *self.get_failure.write().await = Some(error);
        }

        /// Makes every `create_product` call fail with `error`
        pub async fn fail_create_with(&self, error: PortError) {
            *self.create_failure.write().await = Some(error);
        }

        pub async fn contains(&self, id: ProductId) -> bool {
            self.products.read().await.contains_key(&id)
        }

        pub fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        pub fn create_calls(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        pub fn delete_calls(&self) -> usize {
            self.delete_calls.load(Ordering::SeqCst)
        }
    }

    impl DomainPort for MockProductPort {}

    #[async_trait]
    impl ProductPort for MockProductPort {
        async fn get_product(&self, id: ProductId) -> Result<Product, PortError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.get_failure.read().await.clone() {
                return Err(error);
            }
            self.products
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found(format!("No product found for productId: {}", id)))
        }

        async fn find_products_by_name(
            &self,
            name: &str,
            page: PageRequest,
        ) -> Result<Paged<Product>, PortError> {
            let matching: Vec<Product> = self
                .products
                .read()
                .await
                .values()
                .filter(|p| p.name == name)
                .cloned()
                .collect();
            Ok(Paged::slice(
                matching,
                page.page_number.unwrap_or(0),
                page.page_size.unwrap_or(10),
            ))
        }

        async fn create_product(&self, product: Product) -> Result<Product, PortError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.create_failure.read().await.clone() {
                return Err(error);
            }
            let mut products = self.products.write().await;
            if products.contains_key(&product.product_id) {
                return Err(PortError::invalid_input(format!(
                    "Duplicate key, productId: {}",
                    product.product_id
                )));
            }
            products.insert(product.product_id, product.clone());
            Ok(product)
        }

        async fn update_product(&self, product: Product, id: ProductId) -> Result<Product, PortError> {
            let mut products = self.products.write().await;
            let stored = products
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found(format!("No product found for productId: {}", id)))?;
            stored.name = product.name;
            stored.weight = product.weight;
            Ok(stored.clone())
        }

        async fn delete_product(&self, id: ProductId) -> Result<(), PortError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.products.write().await.remove(&id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockProductPort;
    use super::*;

    fn shovel() -> Product {
        Product::new(ProductId::new(1), "Shovel", 2.5)
    }

    #[tokio::test]
    async fn test_mock_port_create_and_get() {
        let port = MockProductPort::new();
        port.create_product(shovel()).await.unwrap();

        let retrieved = port.get_product(ProductId::new(1)).await.unwrap();
        assert_eq!(retrieved, shovel());
    }

    #[tokio::test]
    async fn test_mock_port_not_found() {
        let port = MockProductPort::new();
        let result = port.get_product(ProductId::new(99)).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_port_duplicate_is_invalid_input() {
        let port = MockProductPort::with_products(vec![shovel()]).await;
        let result = port.create_product(shovel()).await;
        assert!(result.unwrap_err().is_invalid_input());
    }

    #[tokio::test]
    async fn test_mock_port_update() {
        let port = MockProductPort::with_products(vec![shovel()]).await;
        let updated = port
            .update_product(Product::new(ProductId::new(1), "Spade", 3.0), ProductId::new(1))
            .await
            .unwrap();
        assert_eq!(updated.name, "Spade");
    }

    #[tokio::test]
    async fn test_mock_port_delete_is_idempotent() {
        let port = MockProductPort::with_products(vec![shovel()]).await;
        port.delete_product(ProductId::new(1)).await.unwrap();
        port.delete_product(ProductId::new(1)).await.unwrap();
        assert!(!port.contains(ProductId::new(1)).await);
        assert_eq!(port.delete_calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_port_find_by_name_pages() {
        let products = (1..=3)
            .map(|i| Product::new(ProductId::new(i), "Shovel", 1.0))
            .collect();
        let port = MockProductPort::with_products(products).await;

        let page = port
            .find_products_by_name("Shovel", PageRequest::of(1, 2))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].product_id, ProductId::new(3));
        assert_eq!(page.total_pages, 2);
    }
}
