//! France calendar.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use fbdh_core::errors::Result;
use fbdh_core::Year;

use crate::cache::{HolidayCache, YearCache};
use crate::calendar::Calendar;
use crate::holidays::HolidaySet;

/// France calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Easter Monday (Easter + 1)
/// * Labour Day (May 1)
/// * Victory Day (May 8)
/// * Ascension Thursday (Easter + 39)
/// * Whit Sunday (Easter + 49)
/// * Whit Monday (Easter + 50)
/// * Bastille Day (Jul 14)
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Armistice Day (Nov 11)
/// * Christmas Day (Dec 25)
///
/// Holiday sets are obtained through the cache `C`.
#[derive(Debug, Clone, Default)]
pub struct France<C = YearCache> {
    cache: C,
}

impl France {
    /// A France calendar with its own [`YearCache`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: HolidayCache> France<C> {
    /// A France calendar reading holidays through `cache`.
    pub fn with_cache(cache: C) -> Self {
        Self { cache }
    }

    /// The holiday cache in use.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The holidays of `year`.
    pub fn holidays_for(&self, year: Year) -> Result<Arc<HolidaySet>> {
        self.cache.holidays_for(year)
    }
}

impl<C: HolidayCache> Calendar for France<C> {
    fn name(&self) -> &str {
        "France"
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        if self.is_weekend(date) {
            return Ok(true);
        }
        Ok(self.holidays_for(date.year())?.contains(date))
    }
}
