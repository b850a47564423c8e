//! Reports module: sales log and read-side totals.

pub mod report;
pub mod repository;
pub mod sale;
pub mod service;

pub use report::{CustomerTotal, GrandTotal, ProductTotal, SalesReport};
pub use repository::{InMemorySaleRepository, SaleRepository};
pub use sale::{Sale, SaleId};
pub use service::SalesReportService;
