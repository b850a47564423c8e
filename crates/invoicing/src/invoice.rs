use std::sync::Arc;

use chrono::NaiveDate;

use tallybook_core::{Money, string_id};

use crate::discount::DiscountStrategy;
use crate::item::InvoiceItem;

string_id!(
    /// Invoice number (e.g. `"F-0001"`).
    InvoiceNumber
);

/// Record: a calculated invoice.
///
/// Built once by [`crate::InvoicingService::calculate`] and never changed.
/// Keeps the strategy that produced `total` so the result can be audited.
#[derive(Debug, Clone)]
pub struct Invoice {
    number: InvoiceNumber,
    date: NaiveDate,
    items: Vec<InvoiceItem>,
    subtotal: Money,
    total: Money,
    strategy: Arc<dyn DiscountStrategy>,
}

impl Invoice {
    pub(crate) fn new(
        number: InvoiceNumber,
        date: NaiveDate,
        items: Vec<InvoiceItem>,
        subtotal: Money,
        total: Money,
        strategy: Arc<dyn DiscountStrategy>,
    ) -> Self {
        Self {
            number,
            date,
            items,
            subtotal,
            total,
            strategy,
        }
    }

    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    /// Sum of item subtotals, rounded to cents.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Amount due after the discount.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn discount_amount(&self) -> Money {
        self.subtotal - self.total
    }

    pub fn strategy(&self) -> &Arc<dyn DiscountStrategy> {
        &self.strategy
    }

    pub fn strategy_name(&self) -> String {
        self.strategy.describe()
    }
}
