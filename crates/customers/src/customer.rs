use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use tallybook_core::{Clock, Entity, SystemClock, string_id};

string_id!(
    /// Customer identifier.
    CustomerId
);

/// Record: Customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    full_name: String,
    email: String,
    birth_date: NaiveDate,
}

impl Customer {
    pub fn new(
        id: impl Into<CustomerId>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            birth_date,
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Age in whole years on `today`.
    ///
    /// Year difference, minus one if the birthday has not yet come around this
    /// year. Someone born on Feb 29 turns a year older on Mar 1 in common years.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let birth = self.birth_date;
        let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
        today.year() - birth.year() - i32::from(before_birthday)
    }

    /// Age in whole years according to `clock`.
    pub fn age_with(&self, clock: &dyn Clock) -> i32 {
        self.age_on(clock.today())
    }

    /// Age in whole years as of the local system date.
    pub fn age(&self) -> i32 {
        self.age_with(&SystemClock)
    }
}

impl Entity for Customer {
    type Key = CustomerId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
