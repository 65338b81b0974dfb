//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ProductService, Services};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the service container for service wiring.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());

        Self {
            product_service: services.products(),
            database,
        }
    }
}
