//! Holidays command: list the public holidays of a year.

use std::io::{self, Write};

use anyhow::{Context, Result};
use fbdh_core::utilities::data_formatters::format_long_date;
use fbdh_core::{Locale, Year};
use fbdh_time::HolidaySet;
use tracing::info_span;

/// Print one line per holiday of `year`, in date order.
pub fn run(year: Year, locale: Locale) -> Result<()> {
    let _cmd = info_span!("holidays", year).entered();
    let set = HolidaySet::for_year(year).with_context(|| format!("no holidays for year {year}"))?;
    write_holidays(&mut io::stdout().lock(), &set, locale).context("failed to write holidays")
}

fn write_holidays(out: &mut impl Write, set: &HolidaySet, locale: Locale) -> io::Result<()> {
    for (holiday, date) in set {
        writeln!(out, "{}  {}", format_long_date(date, locale), holiday.name())?;
    }
    Ok(())
}
