//! `tallybook-core` — shared building blocks for the business-record modules.
//!
//! This crate contains the error model, identifiers, money helpers, the clock
//! abstraction and the in-memory keyed store the module repositories wrap.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod store;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::{Money, line_total, round_money, sum_money};
pub use store::InMemoryKeyedStore;
pub use value_object::ValueObject;
