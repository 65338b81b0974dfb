//! Service Container - Centralized service access.
//!
//! Wires repositories into services once at startup so handlers only
//! ever see service traits.

use std::sync::Arc;

use super::{ProductManager, ProductService};
use crate::infra::ProductStore;

/// Concrete service container
pub struct Services {
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let store = Arc::new(ProductStore::new(db));
        let product_service = Arc::new(ProductManager::new(store));

        Self { product_service }
    }

    /// Get product service
    pub fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}
