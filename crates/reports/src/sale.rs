use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tallybook_core::{DomainResult, Money, line_total, string_id};

string_id!(
    /// Sale identifier (e.g. `"V-001"`).
    SaleId
);

/// Record: one sale line.
///
/// Customer and product are plain names, not references into the other
/// modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    customer: String,
    product: String,
    quantity: i64,
    unit_price: Money,
    date: NaiveDate,
}

impl Sale {
    pub fn new(
        id: impl Into<SaleId>,
        customer: impl Into<String>,
        product: impl Into<String>,
        quantity: i64,
        unit_price: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            product: product.into(),
            quantity,
            unit_price,
            date,
        }
    }

    pub fn id(&self) -> &SaleId {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `quantity × unit_price`, not rounded.
    pub fn total(&self) -> DomainResult<Money> {
        line_total(self.quantity, self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_exact() {
        let sale = Sale::new(
            "V-001",
            "Carlos",
            "Teclado",
            3,
            "0.333".parse().unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 14).unwrap(),
        );
        assert_eq!(sale.total().unwrap(), "0.999".parse::<Money>().unwrap());
    }
}
