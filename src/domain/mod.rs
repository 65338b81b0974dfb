//! Domain layer - Core business entities and logic
//!
//! This module contains the product model and the validation rules that
//! turn raw request bodies into typed commands. It has no knowledge of
//! the database or HTTP layers.

pub mod product;
pub mod validation;

pub use product::{NewProduct, Product, ProductChanges};
pub use validation::{validate_changes, validate_new, FromInput, ProductInput};
