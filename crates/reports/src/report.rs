//! Report definitions.
//!
//! A report reduces the sales log to one amount. New reports implement
//! [`SalesReport`]; [`crate::SalesReportService::run`] evaluates any of them.

use tallybook_core::{DomainResult, Money, sum_money};

use crate::sale::Sale;

/// A single-figure aggregation over sales.
pub trait SalesReport {
    /// Label used in logs and printed output.
    fn title(&self) -> String;

    /// Whether `sale` contributes to this report.
    fn includes(&self, sale: &Sale) -> bool;

    /// Sum of the totals of included sales; `InvalidState` on overflow.
    fn evaluate(&self, sales: &[Sale]) -> DomainResult<Money> {
        let totals = sales
            .iter()
            .filter(|sale| self.includes(sale))
            .map(Sale::total)
            .collect::<DomainResult<Vec<_>>>()?;
        sum_money(totals)
    }
}

/// Every sale.
#[derive(Debug, Default, Clone, Copy)]
pub struct GrandTotal;

impl SalesReport for GrandTotal {
    fn title(&self) -> String {
        "grand total".to_string()
    }

    fn includes(&self, _sale: &Sale) -> bool {
        true
    }
}

/// Sales whose customer name matches exactly.
#[derive(Debug, Clone)]
pub struct CustomerTotal<'a> {
    pub customer: &'a str,
}

impl SalesReport for CustomerTotal<'_> {
    fn title(&self) -> String {
        format!("total for customer {}", self.customer)
    }

    fn includes(&self, sale: &Sale) -> bool {
        sale.customer() == self.customer
    }
}

/// Sales whose product name matches exactly.
#[derive(Debug, Clone)]
pub struct ProductTotal<'a> {
    pub product: &'a str,
}

impl SalesReport for ProductTotal<'_> {
    fn title(&self) -> String {
        format!("total for product {}", self.product)
    }

    fn includes(&self, sale: &Sale) -> bool {
        sale.product() == self.product
    }
}
