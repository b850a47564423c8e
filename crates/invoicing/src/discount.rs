//! Discount strategies.
//!
//! A strategy turns an invoice subtotal into the amount due. The invoicing
//! service only sees the [`DiscountStrategy`] trait, so a new kind of discount
//! is a new implementer here and nothing else.

use rust_decimal::Decimal;

use tallybook_core::{DomainError, DomainResult, Money, round_money};

/// Capability: apply a discount to an amount.
pub trait DiscountStrategy: core::fmt::Debug + Send + Sync {
    /// Discounted amount, rounded to cents.
    ///
    /// Fails with `InvalidState` when the strategy's own parameters are out of
    /// range.
    fn apply(&self, amount: Money) -> DomainResult<Money>;

    /// Short human-readable description, kept on invoices for audit.
    fn describe(&self) -> String;
}

/// No discount: the amount is only rounded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply(&self, amount: Money) -> DomainResult<Money> {
        Ok(round_money(amount))
    }

    fn describe(&self) -> String {
        "no discount".to_string()
    }
}

/// Percentage off, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    percentage: Decimal,
}

impl PercentageDiscount {
    pub fn new(percentage: impl Into<Decimal>) -> Self {
        Self {
            percentage: percentage.into(),
        }
    }

    pub fn percentage(&self) -> Decimal {
        self.percentage
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply(&self, amount: Money) -> DomainResult<Money> {
        if self.percentage < Decimal::ZERO || self.percentage > Decimal::ONE_HUNDRED {
            return Err(DomainError::invalid_state(format!(
                "discount percentage {} is outside 0..=100",
                self.percentage
            )));
        }
        let factor = Decimal::ONE - self.percentage / Decimal::ONE_HUNDRED;
        Ok(round_money(amount * factor))
    }

    fn describe(&self) -> String {
        format!("{}% off", self.percentage.normalize())
    }
}

/// Fixed amount off, never below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDiscount {
    amount_off: Money,
}

impl FixedDiscount {
    pub fn new(amount_off: impl Into<Money>) -> Self {
        Self {
            amount_off: amount_off.into(),
        }
    }

    pub fn amount_off(&self) -> Money {
        self.amount_off
    }
}

impl DiscountStrategy for FixedDiscount {
    fn apply(&self, amount: Money) -> DomainResult<Money> {
        if self.amount_off < Decimal::ZERO {
            return Err(DomainError::invalid_state(format!(
                "fixed discount {} cannot be negative",
                self.amount_off
            )));
        }
        Ok(round_money((amount - self.amount_off).max(Decimal::ZERO)))
    }

    fn describe(&self) -> String {
        format!("{:.2} off", self.amount_off)
    }
}
