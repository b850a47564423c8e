//! Inventory module: product registration and stock tracking.
//!
//! Products are immutable records keyed by sku; stock changes replace the
//! stored record with a new one.

pub mod product;
pub mod repository;
pub mod service;
pub mod validation;

pub use product::{Product, Sku};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
