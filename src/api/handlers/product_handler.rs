//! Product resource handlers.

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};

use crate::api::extractors::{ProductId, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    MSG_PRODUCTS_FETCHED, MSG_PRODUCT_CREATED, MSG_PRODUCT_DELETED, MSG_PRODUCT_FETCHED,
    MSG_PRODUCT_UPDATED,
};
use crate::domain::{NewProduct, Product, ProductChanges};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, PaginationParams};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List products, 25 per page
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of products in `data`, pagination in `meta`", body = [Product])
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let page = state.product_service.list_products(params).await?;
    Ok(ApiResponse::paginated(page, MSG_PRODUCTS_FETCHED))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Body is not a JSON object"),
        (status = 422, description = "Validation error, per-field messages in `errors`")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(product): ValidatedJson<NewProduct>,
) -> AppResult<Created<Product>> {
    let product = state.product_service.create_product(product).await?;
    Ok(Created(ApiResponse::with_message(product, MSG_PRODUCT_CREATED)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Single product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<ApiResponse<Product>> {
    let product = state.product_service.get_product(id).await?;
    Ok(ApiResponse::with_message(product, MSG_PRODUCT_FETCHED))
}

/// Update a product; only the fields present in the body change
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductChanges,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation error, per-field messages in `errors`")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ValidatedJson(changes): ValidatedJson<ProductChanges>,
) -> AppResult<ApiResponse<Product>> {
    let product = state.product_service.update_product(id, changes).await?;
    Ok(ApiResponse::with_message(product, MSG_PRODUCT_UPDATED))
}

/// Delete a product permanently
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted, `data` is null"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<ApiResponse<()>> {
    state.product_service.delete_product(id).await?;
    Ok(ApiResponse::message(MSG_PRODUCT_DELETED))
}
