//! `Calendar` trait.
//!
//! A calendar knows which days are business days.  It is the single source of
//! truth for "non-working day": the deadline engine never re-implements the
//! test, it only steps through the calendar.

use chrono::NaiveDate;
use fbdh_core::errors::Result;
use tracing::trace;

use crate::date::{is_weekend, next_day};

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"France"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a non-working day: a weekend day or a
    /// public holiday.
    fn is_holiday(&self, date: NaiveDate) -> Result<bool>;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> Result<bool> {
        self.is_holiday(date).map(|h| !h)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Saturday and Sunday by default.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    /// The first business day strictly after `date`.
    ///
    /// Always advances at least one day, even when `date` is itself a
    /// business day.
    fn next_business_day(&self, mut date: NaiveDate) -> Result<NaiveDate> {
        loop {
            date = next_day(date)?;
            if !self.is_holiday(date)? {
                return Ok(date);
            }
            trace!(calendar = self.name(), %date, "skipping non-business day");
        }
    }
}
