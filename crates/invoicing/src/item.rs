use serde::{Deserialize, Serialize};

use tallybook_core::{DomainResult, Money, ValueObject, line_total, round_money};

/// Invoice line item (value object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    sku: String,
    name: String,
    quantity: i64,
    unit_price: Money,
}

impl InvoiceItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// `quantity × unit_price`, rounded to cents.
    pub fn subtotal(&self) -> DomainResult<Money> {
        line_total(self.quantity, self.unit_price).map(round_money)
    }
}

impl ValueObject for InvoiceItem {}
