//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};

use crate::domain::{FromInput, ProductInput};
use crate::errors::AppError;

/// Validated JSON extractor.
///
/// The body is read as a plain JSON object first, then handed to the
/// target type's validation function, so type mismatches are reported
/// per field (422) instead of as a deserialization failure.
///
/// # Example
///
/// ```rust,ignore
/// use product_api::api::extractors::ValidatedJson;
/// use product_api::domain::NewProduct;
///
/// async fn create_product(ValidatedJson(product): ValidatedJson<NewProduct>) {
///     // product.price is already known to be >= 0
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: FromInput,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<ProductInput>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value = T::from_input(&input)?;

        Ok(ValidatedJson(value))
    }
}
