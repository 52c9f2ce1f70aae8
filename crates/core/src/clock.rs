//! Calendar source for date fields.
//!
//! Several record fields (visit dates, vitals dates, policy validity) are relative to "today".
//! Generation reads today's date through [`Clock`] so the anchor can be pinned for reproducible
//! output and for tests.

use chrono::NaiveDate;

/// Supplies the calendar date that generated records are anchored to.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
