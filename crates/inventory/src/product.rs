use serde::{Deserialize, Serialize};

use tallybook_core::{DomainError, DomainResult, Entity, Money, line_total, round_money, string_id};

string_id!(
    /// Stock keeping unit; the product key.
    Sku
);

/// Record: Product.
///
/// Immutable. A stock adjustment produces a new `Product` via
/// [`Product::with_stock_delta`] that replaces the stored one by sku.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    name: String,
    stock: i64,
    price: Money,
}

impl Product {
    /// Build a product without validation; see [`crate::validation`].
    pub fn new(sku: impl Into<Sku>, name: impl Into<String>, stock: i64, price: Money) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            stock,
            price,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// `stock × price`, rounded to cents.
    pub fn inventory_value(&self) -> DomainResult<Money> {
        line_total(self.stock, self.price).map(round_money)
    }

    /// Same product with `stock + delta` units. The result may be negative;
    /// callers decide whether to accept it. Fails with `InvalidState` when the
    /// count leaves the `i64` range.
    pub fn with_stock_delta(&self, delta: i64) -> DomainResult<Self> {
        let stock = self.stock.checked_add(delta).ok_or_else(|| {
            DomainError::invalid_state(format!(
                "stock of {} overflows ({} {delta:+})",
                self.sku, self.stock
            ))
        })?;
        Ok(Self {
            stock,
            ..self.clone()
        })
    }
}

impl Entity for Product {
    type Key = Sku;

    fn key(&self) -> &Self::Key {
        &self.sku
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_value_rounds_to_cents() {
        let p = Product::new("P-001", "Teclado", 3, "25.555".parse().unwrap());
        assert_eq!(p.inventory_value().unwrap(), "76.67".parse::<Money>().unwrap());
    }

    #[test]
    fn stock_delta_builds_a_new_value() {
        let original = Product::new("P-001", "Teclado", 10, "25.5".parse().unwrap());
        let adjusted = original.with_stock_delta(5).unwrap();

        assert_eq!(original.stock(), 10);
        assert_eq!(adjusted.stock(), 15);
        assert_eq!(adjusted.sku(), original.sku());
        assert_eq!(adjusted.name(), original.name());
        assert_eq!(adjusted.price(), original.price());
    }

    #[test]
    fn stock_delta_overflow_is_rejected() {
        let original = Product::new("P-001", "Teclado", 10, "25.5".parse().unwrap());
        let err = original.with_stock_delta(i64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }
}
