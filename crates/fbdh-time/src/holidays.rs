//! French public holidays.
//!
//! A [`HolidaySet`] lists, for one year, the eight fixed-date holidays and the
//! four holidays placed relative to Easter Sunday.  It is a pure function of
//! the year and therefore safe to cache (see [`crate::cache`]).
//!
//! Two holidays can fall on the same day: Ascension Thursday coincides with
//! Labour Day or Victory Day in some years (1913, 2008, 2059, ...).  The set
//! always holds one entry per [`Holiday`]; [`HolidaySet::dates`] yields the
//! distinct days.

use chrono::{DateTime, NaiveDate, Utc};
use fbdh_core::errors::Result;
use fbdh_core::utilities::data_formatters::format_cookie;
use fbdh_core::Year;

use crate::date::{add_days, from_ymd, midnight};
use crate::easter::easter_sunday;

/// A French public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Holiday {
    /// January 1.
    NewYearsDay,
    /// Easter Sunday + 1.
    EasterMonday,
    /// May 1.
    LabourDay,
    /// May 8.
    VictoryDay,
    /// Easter Sunday + 39.
    AscensionThursday,
    /// Easter Sunday + 49.
    WhitSunday,
    /// Easter Sunday + 50.
    WhitMonday,
    /// July 14.
    BastilleDay,
    /// August 15.
    Assumption,
    /// November 1.
    AllSaintsDay,
    /// November 11.
    ArmisticeDay,
    /// December 25.
    ChristmasDay,
}

/// How a holiday is placed in its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// A number of days after Easter Sunday.
    EasterOffset(u64),
}

impl Holiday {
    /// Every holiday observed in France.
    pub const ALL: [Holiday; 12] = [
        Holiday::NewYearsDay,
        Holiday::EasterMonday,
        Holiday::LabourDay,
        Holiday::VictoryDay,
        Holiday::AscensionThursday,
        Holiday::WhitSunday,
        Holiday::WhitMonday,
        Holiday::BastilleDay,
        Holiday::Assumption,
        Holiday::AllSaintsDay,
        Holiday::ArmisticeDay,
        Holiday::ChristmasDay,
    ];

    /// Official French name.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "Jour de l'An",
            Holiday::EasterMonday => "Lundi de Pâques",
            Holiday::LabourDay => "Fête du Travail",
            Holiday::VictoryDay => "Fête de la Victoire 45",
            Holiday::AscensionThursday => "Jeudi de l'Ascension",
            Holiday::WhitSunday => "Pentecôte",
            Holiday::WhitMonday => "Lundi de Pentecôte",
            Holiday::BastilleDay => "Fête Nationale",
            Holiday::Assumption => "Assomption",
            Holiday::AllSaintsDay => "Toussaint",
            Holiday::ArmisticeDay => "Armistice",
            Holiday::ChristmasDay => "Noël",
        }
    }

    /// Placement rule.
    pub fn rule(&self) -> HolidayRule {
        use HolidayRule::{EasterOffset, Fixed};
        match self {
            Holiday::NewYearsDay => Fixed { month: 1, day: 1 },
            Holiday::EasterMonday => EasterOffset(1),
            Holiday::LabourDay => Fixed { month: 5, day: 1 },
            Holiday::VictoryDay => Fixed { month: 5, day: 8 },
            Holiday::AscensionThursday => EasterOffset(39),
            Holiday::WhitSunday => EasterOffset(49),
            Holiday::WhitMonday => EasterOffset(50),
            Holiday::BastilleDay => Fixed { month: 7, day: 14 },
            Holiday::Assumption => Fixed { month: 8, day: 15 },
            Holiday::AllSaintsDay => Fixed { month: 11, day: 1 },
            Holiday::ArmisticeDay => Fixed { month: 11, day: 11 },
            Holiday::ChristmasDay => Fixed { month: 12, day: 25 },
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Output mode for [`HolidaySet::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HolidayFormat {
    /// Midnight UTC instants.
    #[default]
    Instant,
    /// Cookie-style strings (`"Tuesday, 01-Jan-2019 00:00:00 UTC"`).
    Readable,
    /// Unix timestamps in seconds.
    Timestamp,
}

/// A holiday date rendered in one of the [`HolidayFormat`] modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayValue {
    /// See [`HolidayFormat::Instant`].
    Instant(DateTime<Utc>),
    /// See [`HolidayFormat::Readable`].
    Readable(String),
    /// See [`HolidayFormat::Timestamp`].
    Timestamp(i64),
}

impl std::fmt::Display for HolidayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayValue::Instant(t) => write!(f, "{t}"),
            HolidayValue::Readable(s) => f.write_str(s),
            HolidayValue::Timestamp(ts) => write!(f, "{ts}"),
        }
    }
}

/// The holidays of one year, in date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: Year,
    entries: Vec<(Holiday, NaiveDate)>,
}

impl HolidaySet {
    /// Compute the holidays of `year`.
    ///
    /// # Errors
    /// Returns [`Error::Date`](fbdh_core::Error::Date) if `year` is outside the
    /// representable range.
    pub fn for_year(year: Year) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let mut entries = Holiday::ALL
            .iter()
            .map(|&h| {
                let date = match h.rule() {
                    HolidayRule::Fixed { month, day } => from_ymd(year, month, day)?,
                    HolidayRule::EasterOffset(n) => add_days(easter, n)?,
                };
                Ok((h, date))
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by_key(|&(h, d)| (d, h));
        Ok(Self { year, entries })
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Number of holidays (always 12).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(holiday, date)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Holiday, NaiveDate)> + '_ {
        self.entries.iter().copied()
    }

    /// Distinct holiday dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.entries.iter().map(|&(_, d)| d).collect();
        dates.dedup();
        dates
    }

    /// Return `true` if `date` is one of the holidays.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries
            .binary_search_by(|&(_, d)| d.cmp(&date))
            .is_ok()
    }

    /// Date of `holiday` in this year.
    pub fn get(&self, holiday: Holiday) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|&&(h, _)| h == holiday)
            .map(|&(_, d)| d)
    }

    /// Holidays falling on `date` (usually none or one).
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = Holiday> + '_ {
        self.entries
            .iter()
            .filter(move |&&(_, d)| d == date)
            .map(|&(h, _)| h)
    }

    /// Render every holiday in the requested output mode, in date order.
    pub fn render(&self, format: HolidayFormat) -> Vec<(Holiday, HolidayValue)> {
        self.iter()
            .map(|(h, d)| {
                let instant = midnight(d);
                let value = match format {
                    HolidayFormat::Instant => HolidayValue::Instant(instant),
                    HolidayFormat::Readable => HolidayValue::Readable(format_cookie(instant)),
                    HolidayFormat::Timestamp => HolidayValue::Timestamp(instant.timestamp()),
                };
                (h, value)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = (Holiday, NaiveDate);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (Holiday, NaiveDate)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2019() {
        let set = HolidaySet::for_year(2019).unwrap();
        assert_eq!(set.year(), 2019);
        assert_eq!(set.len(), 12);
        let expected = [
            (Holiday::NewYearsDay, date(2019, 1, 1)),
            (Holiday::EasterMonday, date(2019, 4, 22)),
            (Holiday::LabourDay, date(2019, 5, 1)),
            (Holiday::VictoryDay, date(2019, 5, 8)),
            (Holiday::AscensionThursday, date(2019, 5, 30)),
            (Holiday::WhitSunday, date(2019, 6, 9)),
            (Holiday::WhitMonday, date(2019, 6, 10)),
            (Holiday::BastilleDay, date(2019, 7, 14)),
            (Holiday::Assumption, date(2019, 8, 15)),
            (Holiday::AllSaintsDay, date(2019, 11, 1)),
            (Holiday::ArmisticeDay, date(2019, 11, 11)),
            (Holiday::ChristmasDay, date(2019, 12, 25)),
        ];
        assert_eq!(set.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn contains_and_get() {
        let set = HolidaySet::for_year(2019).unwrap();
        assert!(set.contains(date(2019, 7, 14)));
        assert!(!set.contains(date(2019, 7, 15)));
        assert!(!set.contains(date(2019, 4, 21))); // Easter Sunday itself is not listed
        assert_eq!(set.get(Holiday::WhitMonday), Some(date(2019, 6, 10)));
    }

    #[test]
    fn ascension_on_labour_day_2008() {
        // Easter 2008 was March 23, so Ascension fell on May 1.
        let set = HolidaySet::for_year(2008).unwrap();
        assert_eq!(set.len(), 12);
        assert_eq!(set.dates().len(), 11);
        let on_may_first: Vec<_> = set.on(date(2008, 5, 1)).collect();
        assert_eq!(
            on_may_first,
            vec![Holiday::LabourDay, Holiday::AscensionThursday]
        );
        assert!(set.contains(date(2008, 5, 1)));
    }

    #[test]
    fn render_modes() {
        let set = HolidaySet::for_year(2019).unwrap();

        let stamps = set.render(HolidayFormat::Timestamp);
        assert_eq!(stamps[0], (Holiday::NewYearsDay, HolidayValue::Timestamp(1_546_300_800)));

        let readable = set.render(HolidayFormat::Readable);
        assert_eq!(
            readable[0].1,
            HolidayValue::Readable("Tuesday, 01-Jan-2019 00:00:00 UTC".into())
        );

        let instants = set.render(HolidayFormat::Instant);
        assert_eq!(instants.len(), 12);
        for (h, v) in instants {
            match v {
                HolidayValue::Instant(t) => {
                    assert_eq!(Some(t.date_naive()), set.get(h));
                    assert_eq!(t.timestamp() % 86_400, 0);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(Holiday::ChristmasDay.to_string(), "Noël");
        assert_eq!(Holiday::VictoryDay.name(), "Fête de la Victoire 45");
        let set = HolidaySet::for_year(2030).unwrap();
        assert!(set.iter().all(|(_, d)| d.year() == 2030));
    }
}
