//! Request validation for product payloads.
//!
//! Both entry points are pure: they read a raw JSON object and return either
//! a typed command or every rule violation found, keyed by field name.
//! Create requires `name` and `price`; update checks only the keys present.
//! Accepted strings are stored trimmed, and a blank `description` is stored
//! as null.

use std::borrow::Cow;

use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use super::{NewProduct, ProductChanges};
use crate::config::MIN_PRODUCT_PRICE;

/// Raw request body as received over the wire
pub type ProductInput = Map<String, Value>;

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const PRICE: &str = "price";
const QUANTITY: &str = "quantity";

/// A single failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    String,
    Numeric,
    MinPrice,
    Integer,
}

impl Rule {
    fn code(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::String => "string",
            Rule::Numeric => "numeric",
            Rule::MinPrice => "min",
            Rule::Integer => "integer",
        }
    }

    fn message(self, field: &str) -> String {
        match self {
            Rule::Required => format!("The {} field is required.", field),
            Rule::String => format!("The {} field must be a string.", field),
            Rule::Numeric => format!("The {} field must be a number.", field),
            Rule::MinPrice => format!("The {} field must be at least {}.", field, MIN_PRODUCT_PRICE),
            Rule::Integer => format!("The {} field must be an integer.", field),
        }
    }

    fn into_error(self, field: &str) -> ValidationError {
        let mut error = ValidationError::new(self.code());
        error.message = Some(Cow::Owned(self.message(field)));
        error
    }
}

/// A typed command built from a raw request body by a validation function.
pub trait FromInput: Sized {
    fn from_input(input: &ProductInput) -> Result<Self, ValidationErrors>;
}

impl FromInput for NewProduct {
    fn from_input(input: &ProductInput) -> Result<Self, ValidationErrors> {
        validate_new(input)
    }
}

impl FromInput for ProductChanges {
    fn from_input(input: &ProductInput) -> Result<Self, ValidationErrors> {
        validate_changes(input)
    }
}

/// Validate a create payload.
pub fn validate_new(input: &ProductInput) -> Result<NewProduct, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = check(&mut errors, NAME, required(input, NAME).and_then(parse_name));
    let price = check(&mut errors, PRICE, required(input, PRICE).and_then(parse_price));
    let description = optional(&mut errors, input, DESCRIPTION, parse_description);
    let quantity = optional(&mut errors, input, QUANTITY, parse_quantity);

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok(NewProduct {
            name,
            description: description.flatten(),
            price,
            quantity: quantity.flatten(),
        }),
        _ => Err(errors),
    }
}

/// Validate an update payload. Absent keys are left out of the result.
pub fn validate_changes(input: &ProductInput) -> Result<ProductChanges, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let changes = ProductChanges {
        name: optional(&mut errors, input, NAME, |v| non_null(v).and_then(parse_name)),
        description: optional(&mut errors, input, DESCRIPTION, parse_description),
        price: optional(&mut errors, input, PRICE, |v| non_null(v).and_then(parse_price)),
        quantity: optional(&mut errors, input, QUANTITY, parse_quantity),
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

/// Record a failed rule and hand back the value if it passed.
fn check<T>(errors: &mut ValidationErrors, field: &'static str, result: Result<T, Rule>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(rule) => {
            errors.add(field, rule.into_error(field));
            None
        }
    }
}

/// Run `parse` only when the key is present.
fn optional<T>(
    errors: &mut ValidationErrors,
    input: &ProductInput,
    field: &'static str,
    parse: impl FnOnce(&Value) -> Result<T, Rule>,
) -> Option<T> {
    let value = input.get(field)?;
    check(errors, field, parse(value))
}

fn required<'a>(input: &'a ProductInput, field: &str) -> Result<&'a Value, Rule> {
    input.get(field).ok_or(Rule::Required).and_then(non_null)
}

fn non_null(value: &Value) -> Result<&Value, Rule> {
    match value {
        Value::Null => Err(Rule::Required),
        other => Ok(other),
    }
}

fn parse_name(value: &Value) -> Result<String, Rule> {
    match value {
        Value::String(s) if s.trim().is_empty() => Err(Rule::Required),
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(Rule::String),
    }
}

fn parse_price(value: &Value) -> Result<f64, Rule> {
    let price = match value {
        Value::Number(n) => n.as_f64().ok_or(Rule::Numeric)?,
        Value::String(s) if s.trim().is_empty() => return Err(Rule::Required),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| Rule::Numeric)?,
        _ => return Err(Rule::Numeric),
    };

    if !price.is_finite() {
        return Err(Rule::Numeric);
    }
    if price < MIN_PRODUCT_PRICE {
        return Err(Rule::MinPrice);
    }
    Ok(price)
}

fn parse_description(value: &Value) -> Result<Option<String>, Rule> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.trim().to_string())),
        _ => Err(Rule::String),
    }
}

fn parse_quantity(value: &Value) -> Result<Option<i32>, Rule> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .and_then(|q| i32::try_from(q).ok())
            .map(Some)
            .ok_or(Rule::Integer),
        Value::String(s) => s.trim().parse::<i32>().map(Some).map_err(|_| Rule::Integer),
        _ => Err(Rule::Integer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> ProductInput {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    fn failed_fields(errors: &ValidationErrors) -> Vec<String> {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_create_payload() {
        let product = validate_new(&input(json!({
            "name": "Test Product",
            "description": "Test Description",
            "price": 100,
            "quantity": 5
        })))
        .unwrap();

        assert_eq!(product.name, "Test Product");
        assert_eq!(product.description.as_deref(), Some("Test Description"));
        assert_eq!(product.price, 100.0);
        assert_eq!(product.quantity, Some(5));
    }

    #[test]
    fn test_description_and_quantity_are_optional() {
        let product = validate_new(&input(json!({"name": "Mug", "price": 0}))).unwrap();

        assert!(product.description.is_none());
        assert!(product.quantity.is_none());
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_empty_name_and_null_price_both_fail() {
        let errors = validate_new(&input(json!({"name": "", "price": null}))).unwrap_err();

        assert_eq!(failed_fields(&errors), vec!["name", "price"]);
    }

    #[test]
    fn test_missing_name_fails() {
        let errors =
            validate_new(&input(json!({"price": 50, "description": "No name here"}))).unwrap_err();

        assert_eq!(failed_fields(&errors), vec!["name"]);
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["name"][0].code, "required");
    }

    #[test]
    fn test_negative_price_fails() {
        let errors = validate_new(&input(json!({
            "name": "Invalid Product",
            "price": -10,
            "quantity": 5
        })))
        .unwrap_err();

        assert_eq!(failed_fields(&errors), vec!["price"]);
        assert_eq!(errors.field_errors()["price"][0].code, "min");
    }

    #[test]
    fn test_non_numeric_price_fails() {
        let errors = validate_new(&input(json!({"name": "Lamp", "price": "cheap"}))).unwrap_err();
        assert_eq!(errors.field_errors()["price"][0].code, "numeric");

        let errors = validate_new(&input(json!({"name": "Lamp", "price": [1]}))).unwrap_err();
        assert_eq!(errors.field_errors()["price"][0].code, "numeric");
    }

    #[test]
    fn test_numeric_string_price_is_accepted() {
        let product = validate_new(&input(json!({"name": "Lamp", "price": " 12.50 "}))).unwrap();
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let errors = validate_new(&input(json!({
            "name": 42,
            "price": 10,
            "description": false,
            "quantity": 1.5
        })))
        .unwrap_err();

        assert_eq!(failed_fields(&errors), vec!["description", "name", "quantity"]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let product =
            validate_new(&input(json!({"name": "Chair", "price": 30, "color": "red"}))).unwrap();
        assert_eq!(product.name, "Chair");
    }

    #[test]
    fn test_update_with_empty_body_changes_nothing() {
        let changes = validate_changes(&input(json!({}))).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_update_only_validates_present_fields() {
        let changes = validate_changes(&input(json!({"name": "Renamed"}))).unwrap();

        assert_eq!(changes.name.as_deref(), Some("Renamed"));
        assert!(changes.price.is_none());
        assert!(changes.description.is_none());
    }

    #[test]
    fn test_update_null_description_clears_it() {
        let changes = validate_changes(&input(json!({"description": null}))).unwrap();
        assert_eq!(changes.description, Some(None));
    }

    #[test]
    fn test_update_applies_same_rules_as_create() {
        let errors = validate_changes(&input(json!({
            "name": "  ",
            "price": -1,
            "quantity": "many"
        })))
        .unwrap_err();

        assert_eq!(failed_fields(&errors), vec!["name", "price", "quantity"]);
    }

    #[test]
    fn test_strings_are_trimmed_and_blank_description_is_null() {
        let product = validate_new(&input(json!({
            "name": "  Lamp  ",
            "description": "",
            "price": 10
        })))
        .unwrap();

        assert_eq!(product.name, "Lamp");
        assert!(product.description.is_none());

        let changes =
            validate_changes(&input(json!({"name": " Desk ", "description": "   "}))).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Desk"));
        assert_eq!(changes.description, Some(None));
    }

    #[test]
    fn test_update_rejects_null_for_required_fields() {
        let errors = validate_changes(&input(json!({"name": null, "price": null}))).unwrap_err();
        assert_eq!(failed_fields(&errors), vec!["name", "price"]);
    }
}
