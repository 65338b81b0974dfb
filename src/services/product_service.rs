//! Product service - Handles product-related business logic.
//!
//! Orchestrates the five resource operations over the repository.
//! Input arrives here already validated.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewProduct, Product, ProductChanges};
use crate::errors::{AppResult, OptionExt};
use crate::infra::ProductRepository;
use crate::types::{Paginated, PaginationParams};

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// One page of products in insertion order
    async fn list_products(&self, params: PaginationParams) -> AppResult<Paginated<Product>>;

    /// Persist a new product
    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;

    /// Get product by ID
    async fn get_product(&self, id: i32) -> AppResult<Product>;

    /// Overwrite the fields present in `changes`
    async fn update_product(&self, id: i32, changes: ProductChanges) -> AppResult<Product>;

    /// Permanently delete product
    async fn delete_product(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProductService over a repository.
pub struct ProductManager<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductManager<R> {
    /// Create new product service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductManager<R> {
    async fn list_products(&self, params: PaginationParams) -> AppResult<Paginated<Product>> {
        let (page, per_page) = (params.page(), params.per_page());
        let (products, total) = self.repo.list(page, per_page).await?;

        tracing::debug!(page, count = products.len(), total, "Listed products");
        Ok(Paginated::new(products, page, per_page, total))
    }

    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        let product = self.repo.create(product).await?;

        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_product(&self, id: i32, changes: ProductChanges) -> AppResult<Product> {
        if changes.is_empty() {
            tracing::debug!(product_id = id, "Update carries no field changes");
        }

        let product = self.repo.update(id, changes).await?;

        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}
