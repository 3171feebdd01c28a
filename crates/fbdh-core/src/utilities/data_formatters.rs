//! Display formatting helpers.
//!
//! Human-readable rendering of dates and instants.  The calendar engine
//! never formats anything itself; front ends call into this module.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc, Weekday};

use crate::errors::Error;

/// Language used for weekday and month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// French (`fr_FR`).
    #[default]
    French,
    /// English (`en_US`, also used for the `C` locale).
    English,
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `fr`, `fr_FR`, `fr_FR.UTF-8`, `en`, `en_US.UTF-8`, `C`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" => Ok(Locale::French),
            "en" | "c" | "posix" => Ok(Locale::English),
            _ => Err(Error::InvalidArgument(format!("unsupported locale {s:?}"))),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Locale::French => "fr",
            Locale::English => "en",
        })
    }
}

/// Capitalised weekday name.
pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match locale {
        Locale::French => [
            "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
        ][idx],
        Locale::English => [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ][idx],
    }
}

/// Capitalised month name for `month` in `1..=12`.
///
/// # Panics
/// Panics if `month` is outside `1..=12`.
pub fn month_name(month: u32, locale: Locale) -> &'static str {
    let idx = month as usize - 1;
    match locale {
        Locale::French => [
            "Janvier",
            "Février",
            "Mars",
            "Avril",
            "Mai",
            "Juin",
            "Juillet",
            "Août",
            "Septembre",
            "Octobre",
            "Novembre",
            "Décembre",
        ][idx],
        Locale::English => [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][idx],
    }
}

/// Long form `"<Weekday> <dd> <Month> <yyyy>"`, e.g. `"Mardi 01 Janvier 2019"`.
pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    format!(
        "{} {:02} {} {}",
        weekday_name(date.weekday(), locale),
        date.day(),
        month_name(date.month(), locale),
        date.year()
    )
}

/// Cookie-style rendering in UTC, e.g. `"Tuesday, 01-Jan-2019 00:00:00 UTC"`.
pub fn format_cookie(instant: DateTime<Utc>) -> String {
    instant.format("%A, %d-%b-%Y %H:%M:%S UTC").to_string()
}

/// ISO 8601 with a numeric offset and whole seconds,
/// e.g. `"2019-01-07T12:00:00+00:00"`.
pub fn format_atom<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_date_french() {
        assert_eq!(
            format_long_date(ymd(2019, 1, 1), Locale::French),
            "Mardi 01 Janvier 2019"
        );
        assert_eq!(
            format_long_date(ymd(2019, 8, 15), Locale::French),
            "Jeudi 15 Août 2019"
        );
    }

    #[test]
    fn test_long_date_english() {
        assert_eq!(
            format_long_date(ymd(2019, 1, 1), Locale::English),
            "Tuesday 01 January 2019"
        );
    }

    #[test]
    fn test_cookie() {
        let t = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_cookie(t), "Tuesday, 01-Jan-2019 00:00:00 UTC");
    }

    #[test]
    fn test_atom() {
        let t = Utc.with_ymd_and_hms(2019, 1, 7, 12, 0, 0).unwrap();
        assert_eq!(format_atom(&t), "2019-01-07T12:00:00+00:00");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("fr_FR.UTF-8".parse::<Locale>(), Ok(Locale::French));
        assert_eq!("en_US.UTF-8".parse::<Locale>(), Ok(Locale::English));
        assert_eq!("C".parse::<Locale>(), Ok(Locale::English));
        assert_eq!("FR".parse::<Locale>(), Ok(Locale::French));
        assert!("de_DE".parse::<Locale>().is_err());
    }
}
