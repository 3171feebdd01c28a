//! # fbdh
//!
//! French business-day calendar and working-day deadline engine.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! free functions backed by a process-wide engine (the French calendar with a
//! shared per-year holiday cache, evaluated against the system clock).
//! Applications needing a fixed "now" or a different cache build their own
//! [`DeadlineEngine`](time::DeadlineEngine).
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fbdh = "0.1"
//! ```
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2019, 1, 7, 12, 0, 0).unwrap();
//! let deadline = fbdh::compute_deadline(&start, 2).unwrap();
//! assert_eq!(deadline, Utc.with_ymd_and_hms(2019, 1, 10, 0, 0, 0).unwrap());
//! assert!(fbdh::deadline_exceeded(&start, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};

/// Core types, error definitions, clock, parsers and formatters.
pub use fbdh_core as core;

/// Easter, holidays, calendar, and deadline engine.
pub use fbdh_time as time;

pub use fbdh_core::{Error, Integer, Result, Year};
pub use fbdh_time::{Holiday, HolidayFormat, HolidayValue};

use fbdh_core::SystemClock;
use fbdh_time::{DeadlineEngine, France, YearCache};

static ENGINE: LazyLock<DeadlineEngine<France<YearCache>, SystemClock>> =
    LazyLock::new(DeadlineEngine::default);

/// The process-wide engine behind the free functions of this crate.
pub fn default_engine() -> &'static DeadlineEngine<France<YearCache>, SystemClock> {
    &ENGINE
}

/// Midnight UTC on which `limit` working days counted from `start` run out.
///
/// # Errors
/// [`Error::InvalidArgument`] if `limit` is negative.
pub fn compute_deadline<Tz: TimeZone>(start: &DateTime<Tz>, limit: Integer) -> Result<DateTime<Utc>> {
    ENGINE.compute_deadline(start, limit)
}

/// `true` once the current instant is strictly after the deadline.
pub fn deadline_exceeded<Tz: TimeZone>(start: &DateTime<Tz>, limit: Integer) -> Result<bool> {
    ENGINE.deadline_exceeded(start, limit)
}

/// `true` if the UTC day of `instant` is a weekend or a French public holiday.
pub fn is_holiday<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<bool> {
    ENGINE.is_holiday(instant)
}

/// The first instant, whole days after `instant`, on a business day.
pub fn next_business_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<DateTime<Utc>> {
    ENGINE.next_business_day(instant)
}

/// The holidays of `year` in date order, rendered as `format`.
pub fn holidays_for(year: Year, format: HolidayFormat) -> Result<Vec<(Holiday, HolidayValue)>> {
    Ok(ENGINE.calendar().holidays_for(year)?.render(format))
}

/// The holidays of the current (UTC) year.
pub fn holidays_this_year(format: HolidayFormat) -> Result<Vec<(Holiday, HolidayValue)>> {
    use chrono::Datelike;
    holidays_for(Utc::now().year(), format)
}
