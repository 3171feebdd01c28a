//! Date parsing helpers.
//!
//! Turns user-supplied strings into instants.  Parsing lives at the
//! boundary: the calendar engine only ever sees already-parsed values.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("{s:?} is not a YYYY-MM-DD date: {e}")))
}

/// Parse a date string in `DD/MM/YYYY` format.
pub fn parse_date_slash(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y")
        .map_err(|e| Error::InvalidDate(format!("{s:?} is not a DD/MM/YYYY date: {e}")))
}

/// Parse an instant.
///
/// Accepted forms, tried in order:
/// * RFC 3339 / ISO 8601 with offset (`2019-09-09T12:45:00+02:00`, `...Z`);
/// * ISO 8601 without offset (`2019-01-07T12:00:00`, `2019-01-07 12:00:00`),
///   read as UTC;
/// * a bare date (`2019-01-07` or `07/01/2019`), read as UTC midnight.
pub fn parse_instant(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    let date = parse_iso_date(s)
        .or_else(|_| parse_date_slash(s))
        .map_err(|_| Error::InvalidDate(format!("unrecognised date {s:?}")))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().fixed_offset())
}

/// Parse an instant and convert it to UTC.
pub fn parse_instant_utc(s: &str) -> Result<DateTime<Utc>> {
    parse_instant(s).map(|dt| dt.with_timezone(&Utc))
}
