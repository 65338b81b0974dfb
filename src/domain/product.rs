//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Test Product")]
    pub name: String,
    #[schema(example = "Test Description")]
    pub description: Option<String>,
    #[schema(example = 100.0)]
    pub price: f64,
    #[schema(example = 5)]
    pub quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated data for a product that does not exist yet
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct NewProduct {
    /// Product name, must not be blank
    #[schema(example = "Test Product")]
    pub name: String,
    /// Optional free-form description
    #[schema(example = "Test Description")]
    pub description: Option<String>,
    /// Unit price, at least 0
    #[schema(example = 100.0, minimum = 0.0)]
    pub price: f64,
    /// Units in stock
    #[schema(example = 5)]
    pub quantity: Option<i32>,
}

/// Validated partial update.
///
/// `None` leaves a column untouched. For nullable columns `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct ProductChanges {
    #[schema(example = "Updated Product")]
    pub name: Option<String>,
    #[schema(value_type = Option<String>, example = "Updated Description")]
    pub description: Option<Option<String>>,
    #[schema(example = 200.0, minimum = 0.0)]
    pub price: Option<f64>,
    #[schema(value_type = Option<i32>, example = 10)]
    pub quantity: Option<Option<i32>>,
}

impl ProductChanges {
    /// True when the update would not touch any column
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changes() {
        assert!(ProductChanges::default().is_empty());

        let changes = ProductChanges {
            description: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let now = Utc::now();
        let product = Product {
            id: 1,
            name: "Desk".to_string(),
            description: None,
            price: 120.0,
            quantity: Some(3),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(product).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Desk");
        assert!(json["description"].is_null());
        assert!(json.get("created_at").is_some());
    }
}
