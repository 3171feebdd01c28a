//! Gregorian Easter Sunday.
//!
//! Uses the Meeus/Jones/Butcher ("anonymous Gregorian") computus.  The result
//! depends on the year alone: no locale, timezone, or environment variable is
//! consulted.

use chrono::{DateTime, NaiveDate, Utc};
use fbdh_core::errors::Result;
use fbdh_core::Year;

use crate::date::{check_year, from_ymd, midnight};

/// Date of Easter Sunday in the proleptic Gregorian calendar.
///
/// # Errors
/// Returns [`Error::Date`](fbdh_core::Error::Date) if `year` is outside the
/// representable range.
pub fn easter_sunday(year: Year) -> Result<NaiveDate> {
    let y = check_year(year)?;
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    // n / 31 is 3 (March) or 4 (April)
    from_ymd(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

/// Easter Sunday as the instant of its midnight, UTC.
pub fn easter_sunday_midnight(year: Year) -> Result<DateTime<Utc>> {
    easter_sunday(year).map(midnight)
}

/// Number of days from March 21 to Easter Sunday (0–35).
pub fn easter_days(year: Year) -> Result<i64> {
    let easter = easter_sunday(year)?;
    let equinox = from_ymd(year, 3, 21)?;
    Ok((easter - equinox).num_days())
}
