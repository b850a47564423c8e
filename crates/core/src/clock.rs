//! Source of "today" for date-dependent rules.
//!
//! Services take a clock instead of reading the system date directly, so
//! callers and tests can pin the date (the same way commands carry an explicit
//! timestamp).

use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Provides the current calendar date.
pub trait Clock: core::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

impl<C> Clock for Arc<C>
where
    C: Clock + ?Sized,
{
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Local system date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
