use tracing::debug;

use tallybook_core::{DomainResult, Money};

use crate::report::{CustomerTotal, GrandTotal, ProductTotal, SalesReport};
use crate::repository::SaleRepository;

/// Read-side service: sales totals.
///
/// Every call rescans the repository; nothing is cached.
#[derive(Debug)]
pub struct SalesReportService<R> {
    repo: R,
}

impl<R> SalesReportService<R>
where
    R: SaleRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Evaluate any report against the current sales log.
    pub fn run(&self, report: &dyn SalesReport) -> DomainResult<Money> {
        let sales = self.repo.list()?;
        let total = report.evaluate(&sales)?;
        debug!(report = %report.title(), sales = sales.len(), %total, "report evaluated");
        Ok(total)
    }

    pub fn grand_total(&self) -> DomainResult<Money> {
        self.run(&GrandTotal)
    }

    /// Total for sales whose customer name equals `customer` exactly.
    pub fn total_for_customer(&self, customer: &str) -> DomainResult<Money> {
        self.run(&CustomerTotal { customer })
    }

    /// Total for sales whose product name equals `product` exactly.
    pub fn total_for_product(&self, product: &str) -> DomainResult<Money> {
        self.run(&ProductTotal { product })
    }
}
