//! Day-granularity helpers over `chrono` dates.
//!
//! Instants are reduced to the calendar day they fall on in the reference
//! timezone (UTC) before any business-day logic runs.  Every helper here is
//! checked: arithmetic that would leave the range `chrono` can represent
//! returns [`Error::Date`] rather than panicking.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use fbdh_core::errors::{Error, Result};
use fbdh_core::Year;

/// Smallest year whose every day is representable.
pub fn min_year() -> Year {
    NaiveDate::MIN.year()
}

/// Largest year whose every day is representable.
pub fn max_year() -> Year {
    NaiveDate::MAX.year()
}

/// Reject years outside [`min_year`, `max_year`].
pub fn check_year(year: Year) -> Result<Year> {
    let (lo, hi) = (min_year(), max_year());
    if !(lo..=hi).contains(&year) {
        return Err(Error::Date(format!("year {year} out of range [{lo}, {hi}]")));
    }
    Ok(year)
}

/// Create a date from year, month (1–12), and day-of-month (1–31).
pub fn from_ymd(year: Year, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Date(format!("{year:04}-{month:02}-{day:02} is not a valid date")))
}

/// Advance `date` by `n` calendar days.
pub fn add_days(date: NaiveDate, n: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(n))
        .ok_or_else(|| Error::Date(format!("date arithmetic: {date} + {n} days out of range")))
}

/// The calendar day following `date`.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    add_days(date, 1)
}

/// Return `true` if `date` is a Saturday or a Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The calendar day `instant` falls on in UTC.
pub fn utc_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Utc).date_naive()
}

/// Midnight UTC at the start of `date`.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Truncate `instant` to midnight UTC of the day it falls on.
pub fn normalize<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<Utc> {
    midnight(utc_day(instant))
}
