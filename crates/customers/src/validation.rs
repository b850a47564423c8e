//! Customer validation rules.
//!
//! Each rule checks one invariant. [`CustomerValidator`] runs its rules in
//! order and stops at the first failure; new rules are added with
//! [`CustomerValidator::with_rule`] without touching the service.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use tallybook_core::{DomainError, DomainResult};

use crate::customer::Customer;

/// Minimum age (in whole years) for registration.
pub const MINIMUM_AGE: i32 = 18;

// `local@domain.tld` shape, anchored at the start only. The pattern is a
// literal, so building it cannot fail at runtime.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

/// A single customer invariant.
pub trait CustomerRule: Send + Sync {
    /// Check `customer` as of `today`.
    fn check(&self, customer: &Customer, today: NaiveDate) -> DomainResult<()>;
}

/// Full name must contain something other than whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameNotBlank;

impl CustomerRule for NameNotBlank {
    fn check(&self, customer: &Customer, _today: NaiveDate) -> DomainResult<()> {
        if customer.full_name().trim().is_empty() {
            return Err(DomainError::invalid_record("full name cannot be empty"));
        }
        Ok(())
    }
}

/// Email must look like `local@domain.tld`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailShape;

impl CustomerRule for EmailShape {
    fn check(&self, customer: &Customer, _today: NaiveDate) -> DomainResult<()> {
        if !EMAIL_SHAPE.is_match(customer.email()) {
            return Err(DomainError::invalid_record("email is not well formed"));
        }
        Ok(())
    }
}

/// Customer must be at least `min_age` years old.
#[derive(Debug, Clone, Copy)]
pub struct MinimumAge {
    pub min_age: i32,
}

impl Default for MinimumAge {
    fn default() -> Self {
        Self {
            min_age: MINIMUM_AGE,
        }
    }
}

impl CustomerRule for MinimumAge {
    fn check(&self, customer: &Customer, today: NaiveDate) -> DomainResult<()> {
        if customer.age_on(today) < self.min_age {
            return Err(DomainError::invalid_record(format!(
                "customer must be at least {} years old",
                self.min_age
            )));
        }
        Ok(())
    }
}

/// Ordered set of customer rules.
pub struct CustomerValidator {
    rules: Vec<Box<dyn CustomerRule>>,
}

impl CustomerValidator {
    /// Validator with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after the existing ones.
    pub fn with_rule(mut self, rule: impl CustomerRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn validate(&self, customer: &Customer, today: NaiveDate) -> DomainResult<()> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(customer, today))
    }
}

impl Default for CustomerValidator {
    /// Name, email and minimum-age rules, in that order.
    fn default() -> Self {
        Self::empty()
            .with_rule(NameNotBlank)
            .with_rule(EmailShape)
            .with_rule(MinimumAge::default())
    }
}

impl core::fmt::Debug for CustomerValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomerValidator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 10, 14)
    }

    fn customer(name: &str, email: &str, birth: NaiveDate) -> Customer {
        Customer::new("1", name, email, birth)
    }

    fn assert_invalid(result: DomainResult<()>) {
        match result {
            Err(DomainError::InvalidRecord(_)) => {}
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_adult() {
        let c = customer("Ana Díaz", "ana@example.com", date(2002, 7, 15));
        assert!(CustomerValidator::default().validate(&c, today()).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let c = customer("   ", "ana@example.com", date(2002, 7, 15));
        assert_invalid(CustomerValidator::default().validate(&c, today()));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "ana", "ana@example", "@example.com", "ana@.com"] {
            let c = customer("Ana Díaz", email, date(2002, 7, 15));
            assert_invalid(CustomerValidator::default().validate(&c, today()));
        }
    }

    #[test]
    fn email_shape_is_anchored_at_start_only() {
        let c = customer("Ana Díaz", "ana@example.com trailing", date(2002, 7, 15));
        assert!(CustomerValidator::default().validate(&c, today()).is_ok());
    }

    #[test]
    fn eighteenth_birthday_is_the_boundary() {
        let validator = CustomerValidator::default();
        let on_birthday = customer("Ana Díaz", "ana@example.com", date(2007, 10, 14));
        let day_after = customer("Ana Díaz", "ana@example.com", date(2007, 10, 15));

        assert!(validator.validate(&on_birthday, today()).is_ok());
        assert_invalid(validator.validate(&day_after, today()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let c = customer("", "bad", date(2020, 1, 1));
        let err = CustomerValidator::default().validate(&c, today()).unwrap_err();
        assert_eq!(err, DomainError::invalid_record("full name cannot be empty"));
    }

    #[test]
    fn extra_rules_extend_the_default_set() {
        struct NoExampleDomain;

        impl CustomerRule for NoExampleDomain {
            fn check(&self, customer: &Customer, _today: NaiveDate) -> DomainResult<()> {
                if customer.email().ends_with("@example.com") {
                    return Err(DomainError::invalid_record("example.com is reserved"));
                }
                Ok(())
            }
        }

        let validator = CustomerValidator::default().with_rule(NoExampleDomain);
        let c = customer("Ana Díaz", "ana@example.com", date(2002, 7, 15));
        assert_invalid(validator.validate(&c, today()));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use chrono::{Days, Months};
        use proptest::prelude::*;

        proptest! {
            /// Property: registration age check agrees with "born on or before
            /// the date exactly 18 years ago".
            #[test]
            fn age_threshold_matches_calendar(offset_days in 0u64..40_000) {
                let today = today();
                let birth = today.checked_sub_days(Days::new(offset_days)).unwrap();
                let cutoff = today.checked_sub_months(Months::new(12 * 18)).unwrap();

                let c = customer("Ana Díaz", "ana@example.com", birth);
                let result = CustomerValidator::default().validate(&c, today);
                prop_assert_eq!(result.is_ok(), birth <= cutoff);
            }
        }
    }
}
