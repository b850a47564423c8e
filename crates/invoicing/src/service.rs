use std::sync::Arc;

use tracing::{info, warn};

use tallybook_core::{Clock, DomainError, DomainResult, SystemClock, round_money, sum_money};

use crate::discount::DiscountStrategy;
use crate::invoice::{Invoice, InvoiceNumber};
use crate::item::InvoiceItem;

/// Application service: invoice calculation.
///
/// The discount strategy is chosen when the service is built; the service
/// never inspects which strategy it holds.
#[derive(Debug)]
pub struct InvoicingService {
    strategy: Arc<dyn DiscountStrategy>,
    clock: Arc<dyn Clock>,
}

impl InvoicingService {
    pub fn new(strategy: impl DiscountStrategy + 'static) -> Self {
        Self::with_clock(Arc::new(strategy), Arc::new(SystemClock))
    }

    pub fn with_clock(strategy: Arc<dyn DiscountStrategy>, clock: Arc<dyn Clock>) -> Self {
        Self { strategy, clock }
    }

    pub fn strategy(&self) -> &Arc<dyn DiscountStrategy> {
        &self.strategy
    }

    /// Price `items` under invoice `number`.
    ///
    /// Fails with `InvalidRecord` when `items` is empty, or with whatever the
    /// strategy reports for out-of-range parameters.
    pub fn calculate(
        &self,
        number: impl Into<InvoiceNumber>,
        items: Vec<InvoiceItem>,
    ) -> DomainResult<Invoice> {
        let number = number.into();
        let result = self.try_calculate(number.clone(), items);
        match &result {
            Ok(invoice) => info!(
                invoice = %number,
                subtotal = %invoice.subtotal(),
                total = %invoice.total(),
                discount = %invoice.strategy_name(),
                "invoice calculated"
            ),
            Err(err) => warn!(invoice = %number, error.kind = err.kind(), error = %err, "invoice rejected"),
        }
        result
    }

    fn try_calculate(&self, number: InvoiceNumber, items: Vec<InvoiceItem>) -> DomainResult<Invoice> {
        if items.is_empty() {
            return Err(DomainError::invalid_record(
                "an invoice must contain at least one item",
            ));
        }
        let subtotals = items
            .iter()
            .map(InvoiceItem::subtotal)
            .collect::<DomainResult<Vec<_>>>()?;
        let subtotal = round_money(sum_money(subtotals)?);
        let total = self.strategy.apply(subtotal)?;
        Ok(Invoice::new(
            number,
            self.clock.today(),
            items,
            subtotal,
            total,
            Arc::clone(&self.strategy),
        ))
    }
}
