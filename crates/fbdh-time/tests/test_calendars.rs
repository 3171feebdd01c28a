//! Integration tests for the French holiday calendar.
//!
//! These tests exercise `HolidaySet`, the `France` calendar, and the
//! weekend/holiday predicate across whole years.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use fbdh_time::{Calendar, France, Holiday, HolidaySet, NoCache};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days()
        .take_while(|d| *d <= to)
        .filter(|&d| cal.is_holiday(d).unwrap() && !cal.is_weekend(d))
        .collect()
}

/// Assert that every date in `expected` is a holiday, and every holiday in the
/// range is in `expected`.
fn check_holidays(cal: &dyn Calendar, from: NaiveDate, to: NaiveDate, expected: &[NaiveDate]) {
    let calculated = holiday_list(cal, from, to);
    let calc_set: HashSet<_> = calculated.iter().copied().collect();
    let exp_set: HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Weekday holidays ─────────────────────────────────────────────────────────

#[test]
fn test_france_holidays_2019() {
    // Weekday holidays only; Jul 14 and Whit Sunday fall on a Sunday.
    let expected = vec![
        date(2019, 1, 1),
        date(2019, 4, 22),
        date(2019, 5, 1),
        date(2019, 5, 8),
        date(2019, 5, 30),
        date(2019, 6, 10),
        date(2019, 8, 15),
        date(2019, 11, 1),
        date(2019, 11, 11),
        date(2019, 12, 25),
    ];
    check_holidays(&France::new(), date(2019, 1, 1), date(2019, 12, 31), &expected);
}

#[test]
fn test_france_holidays_2024() {
    let expected = vec![
        date(2024, 1, 1),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 5, 8),
        date(2024, 5, 9),
        date(2024, 5, 20),
        date(2024, 8, 15),
        date(2024, 11, 1),
        date(2024, 11, 11),
        date(2024, 12, 25),
    ];
    check_holidays(
        &France::with_cache(NoCache),
        date(2024, 1, 1),
        date(2024, 12, 31),
        &expected,
    );
}

#[test]
fn test_holidays_across_year_boundary() {
    let expected = vec![date(2019, 12, 25), date(2020, 1, 1)];
    check_holidays(&France::new(), date(2019, 12, 20), date(2020, 1, 10), &expected);
}

#[test]
fn test_reference_days() {
    let cal = France::new();
    let holidays = [
        date(2019, 1, 1),
        date(2019, 5, 1),
        date(2019, 5, 8),
        date(2019, 7, 14),
        date(2019, 8, 15),
        date(2019, 11, 1),
        date(2019, 11, 11),
        date(2019, 12, 25),
        date(2019, 4, 21),
        date(2019, 4, 22),
        date(2019, 5, 30),
        date(2019, 6, 9),
        date(2019, 6, 10),
    ];
    for d in holidays {
        assert!(cal.is_holiday(d).unwrap(), "{d} should not be worked");
    }
    let worked = [date(2019, 9, 9), date(2019, 9, 2), date(2019, 2, 5), date(2019, 3, 7)];
    for d in worked {
        assert!(cal.is_business_day(d).unwrap(), "{d} should be worked");
    }
}

// ─── HolidaySet invariants ────────────────────────────────────────────────────

#[test]
fn test_holiday_sets_1900_2100() {
    for year in 1900..=2100 {
        let set = HolidaySet::for_year(year).unwrap();
        assert_eq!(set.len(), 12, "{year}");
        assert!(
            set.iter().all(|(_, d)| d.year() == year),
            "{year}: holiday outside its year"
        );
        // Ascension may coincide with May 1 or May 8.
        let distinct = set.dates().len();
        assert!(distinct == 11 || distinct == 12, "{year}: {distinct} distinct dates");
        if distinct == 11 {
            let ascension = set.get(Holiday::AscensionThursday).unwrap();
            assert!(
                ascension == date(year, 5, 1) || ascension == date(year, 5, 8),
                "{year}: unexpected collision"
            );
        }
        let whit_monday = set.get(Holiday::WhitMonday).unwrap();
        assert!(whit_monday.month() == 5 || whit_monday.month() == 6);
        assert_eq!(whit_monday.weekday(), Weekday::Mon);
        assert_eq!(set.get(Holiday::EasterMonday).unwrap().weekday(), Weekday::Mon);
        assert_eq!(set.get(Holiday::AscensionThursday).unwrap().weekday(), Weekday::Thu);
        assert_eq!(set.get(Holiday::WhitSunday).unwrap().weekday(), Weekday::Sun);
    }
}

#[test]
fn test_holiday_set_is_sorted() {
    let set = HolidaySet::for_year(2019).unwrap();
    let dates: Vec<_> = set.iter().map(|(_, d)| d).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

proptest! {
    #[test]
    fn weekends_are_never_worked(days in 0u64..200_000) {
        let cal = France::new();
        let d = date(1900, 1, 1) + chrono::Days::new(days);
        if matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            prop_assert!(cal.is_holiday(d).unwrap());
        }
    }

    #[test]
    fn listed_holidays_are_never_worked(year in 1583i32..4000) {
        let cal = France::new();
        let set = cal.holidays_for(year).unwrap();
        for (_, d) in set.iter() {
            prop_assert!(cal.is_holiday(d).unwrap());
        }
    }
}
