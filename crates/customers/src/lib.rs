//! Customers module: registration with validation.
//!
//! Record, repository contract + in-memory implementation, validation rules,
//! and the registration service that ties them together.

pub mod customer;
pub mod repository;
pub mod service;
pub mod validation;

pub use customer::{Customer, CustomerId};
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::CustomerService;
pub use validation::{CustomerRule, CustomerValidator, EmailShape, MinimumAge, NameNotBlank};
