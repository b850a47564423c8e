//! Invoicing module: invoice calculation with pluggable discount strategies.
//!
//! Pure computation; invoices are returned to the caller, not stored.

pub mod discount;
pub mod invoice;
pub mod item;
pub mod service;

pub use discount::{DiscountStrategy, FixedDiscount, NoDiscount, PercentageDiscount};
pub use invoice::{Invoice, InvoiceNumber};
pub use item::InvoiceItem;
pub use service::InvoicingService;
