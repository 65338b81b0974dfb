//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod product_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use product_service::{ProductManager, ProductService};
