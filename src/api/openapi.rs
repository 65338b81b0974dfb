//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::product_handler;
use crate::domain::{NewProduct, Product, ProductChanges};
use crate::types::PaginationMeta;

/// OpenAPI documentation for the Product API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "1.0.0",
        description = "CRUD API for products. Every response is wrapped in `{ hasError, message, data }`.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        product_handler::list_products,
        product_handler::create_product,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
    ),
    components(
        schemas(
            Product,
            NewProduct,
            ProductChanges,
            PaginationMeta,
        )
    ),
    tags(
        (name = "Products", description = "API Endpoints for Products")
    )
)]
pub struct ApiDoc;
