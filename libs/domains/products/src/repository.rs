use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// The narrow key-based CRUD contract the service depends on.
/// Implementations can use different storage backends; the service never
/// sees store-specific query syntax.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in storage order (not guaranteed stable)
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// The product with the given id, or `None` when absent
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Insert-or-replace keyed by `product.id`; returns the persisted value
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove the record if present; succeeds either way
    async fn delete_by_id(&self, id: &str) -> ProductResult<()>;

    /// Every stored product with `price <= threshold`, in storage order
    async fn find_price_at_most(&self, threshold: i64) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());

        tracing::info!(product_id = %product.id, "Product saved");
        Ok(product)
    }

    async fn delete_by_id(&self, id: &str) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.remove(id).is_some() {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(())
    }

    async fn find_price_at_most(&self, threshold: i64) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.price <= threshold)
            .cloned()
            .collect())
    }
}
