//! Product Service - orchestration layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::id::IdService;
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service orchestrating the identifier generator and the store.
///
/// Holds no cached state between calls; every operation performs at most
/// one read and/or one write against the repository and is independently
/// reentrant. Store failures propagate untouched; the service never
/// retries.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    ids: IdService,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            ids: IdService::new(),
        }
    }

    /// Every stored product, in store order
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Every stored product with `price <= threshold` (boundary inclusive)
    ///
    /// Delegates to the store's filtered query; behaviorally equivalent
    /// to filtering `get_all_products()` client-side.
    #[instrument(skip(self))]
    pub async fn find_all_products_below_or_equal_to(
        &self,
        threshold: i64,
    ) -> ProductResult<Vec<Product>> {
        self.repository.find_price_at_most(threshold).await
    }

    /// Create a product: assign a fresh id, persist, return the saved value
    #[instrument(skip(self, input), fields(product_title = %input.title))]
    pub async fn add_product(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(self.ids.generate_id(), input);
        self.repository.save(product).await
    }

    /// The product with the given id, or `None` when absent
    ///
    /// An absent id is not an error condition.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    /// Remove the product with the given id
    ///
    /// Succeeds whether or not the id existed (idempotent).
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }

    /// Partially update the product with the given id
    ///
    /// Returns `None` without writing when the id is absent. Otherwise
    /// supplied fields replace the current values, absent fields are
    /// retained, and the updated product is persisted under the same id.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: &str,
        update: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        let Some(mut product) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        product.apply_update(update);
        let saved = self.repository.save(product).await?;
        Ok(Some(saved))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            ids: self.ids,
        }
    }
}
