//! Product repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{NewProduct, Product, ProductChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// One page of products in primary key order, plus the total row count.
    /// `page` is 1-indexed.
    async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<Product>, u64)>;

    /// Insert a new product
    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    /// Overwrite the given fields. `NotFound` if the row does not exist.
    async fn update(&self, id: i32, changes: ProductChanges) -> AppResult<Product>;

    /// Permanently delete product. `NotFound` if the row does not exist.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProductRepository backed by SeaORM
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<Product>, u64)> {
        let paginator = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;

        // Pages past the end are empty; the offset for them may not even fit in an i64
        if per_page == 0 || page > total.div_ceil(per_page) {
            return Ok((Vec::new(), total));
        }

        let models = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Product::from).collect(), total))
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            quantity: Set(product.quantity),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(&self, id: i32, changes: ProductChanges) -> AppResult<Product> {
        let product = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = product.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(quantity) = changes.quantity {
            active.quantity = Set(quantity);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
