use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::{Paginated, PaginationMeta};

/// Standard API response envelope: `{ hasError, message, data }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(rename = "hasError")]
    pub has_error: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            has_error: false,
            message: Some(message.into()),
            data: Some(data),
            meta: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Items go in `data`, page information in `meta`
    pub fn paginated(page: Paginated<T>, message: impl Into<String>) -> Self {
        Self {
            has_error: false,
            message: Some(message.into()),
            data: Some(page.data),
            meta: Some(page.meta),
        }
    }
}

impl ApiResponse<()> {
    /// Message with `data: null`
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            has_error: false,
            message: Some(message.into()),
            data: None,
            meta: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
