//! Product id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// The `:id` path segment of a product route.
///
/// A segment that is not a valid product id cannot name a stored product,
/// so it is rejected as `NotFound` in the usual error envelope.
pub struct ProductId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Unparsable product id");
                AppError::NotFound
            })?;

        Ok(ProductId(id))
    }
}
