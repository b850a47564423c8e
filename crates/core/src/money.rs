//! Monetary amounts.
//!
//! Amounts are exact decimals. Rounding to cents uses half-away-from-zero,
//! so `85.275` becomes `85.28`. Arithmetic that can leave the representable
//! range is checked and reported as `InvalidState`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};

/// Monetary amount (currency-agnostic).
pub type Money = Decimal;

/// Number of decimal places kept when an amount is rounded.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to cents.
pub fn round_money(amount: Money) -> Money {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `quantity × unit_price`, exact.
pub fn line_total(quantity: i64, unit_price: Money) -> DomainResult<Money> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or_else(|| DomainError::invalid_state(format!("{quantity} x {unit_price} overflows")))
}

/// Sum of `amounts`, failing instead of wrapping when the total overflows.
pub fn sum_money(amounts: impl IntoIterator<Item = Money>) -> DomainResult<Money> {
    amounts.into_iter().try_fold(Money::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or_else(|| DomainError::invalid_state("amount total overflows"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(money("85.275")), money("85.28"));
        assert_eq!(round_money(money("-85.275")), money("-85.28"));
        assert_eq!(round_money(money("85.274")), money("85.27"));
    }

    #[test]
    fn line_total_is_exact() {
        assert_eq!(line_total(3, money("5.75")).unwrap(), money("17.25"));
        assert_eq!(line_total(2, money("25.5")).unwrap(), money("51.0"));
    }

    #[test]
    fn line_total_overflow_is_invalid_state() {
        let err = line_total(i64::MAX, money("100000000000")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn sum_money_adds_and_reports_overflow() {
        assert_eq!(sum_money([money("1.25"), money("2.50")]).unwrap(), money("3.75"));
        assert_eq!(sum_money([]).unwrap(), Money::ZERO);

        let err = sum_money([Decimal::MAX, Decimal::ONE]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: rounding is idempotent and never moves more than half a cent.
            #[test]
            fn rounding_is_idempotent(units in -10_000_000i64..10_000_000, scale in 0u32..6) {
                let amount = Decimal::new(units, scale);
                let once = round_money(amount);
                prop_assert_eq!(round_money(once), once);
                prop_assert!((once - amount).abs() <= Decimal::new(5, 3));
            }
        }
    }
}
