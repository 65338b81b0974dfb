//! HTTP request handlers.

pub mod product_handler;

pub use product_handler::product_routes;
