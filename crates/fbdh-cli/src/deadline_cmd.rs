//! Deadline command: report whether a working-day limit has run out.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use fbdh_core::utilities::data_formatters::{format_atom, format_long_date};
use fbdh_core::utilities::data_parsers::parse_instant;
use fbdh_core::{Clock, Integer, Locale};
use fbdh_time::{Calendar, DeadlineEngine, France};
use tracing::{info, info_span};

use crate::config::Settings;

/// Outcome of one deadline check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Start instant as given.
    pub start: DateTime<FixedOffset>,
    /// Working-days limit.
    pub limit: Integer,
    /// Midnight UTC on which the limit runs out.
    pub deadline: DateTime<Utc>,
    /// Whether the clock is strictly past `deadline`.
    pub exceeded: bool,
}

/// Evaluate `limit` working days from `date` (or from the clock's "now").
pub fn run(limit: Integer, date: Option<&str>, settings: Settings, verbose: bool) -> Result<()> {
    let _cmd = info_span!("deadline", limit).entered();
    let started = Instant::now();

    let start: DateTime<FixedOffset> = match date {
        Some(s) => parse_instant(s).with_context(|| format!("cannot read start date `{s}`"))?,
        None => settings.clock.now().fixed_offset(),
    };
    info!(start = %format_atom(&start), "start instant");

    let engine = DeadlineEngine::new(France::new(), settings.clock);
    let report = evaluate(&engine, start, limit).context("deadline computation failed")?;

    let mut out = io::stdout().lock();
    write_report(&mut out, &report, settings.locale, verbose)?;
    if verbose {
        writeln!(
            out,
            "Elapsed time: {:.2} ms",
            started.elapsed().as_secs_f64() * 1_000.0
        )?;
    }
    Ok(())
}

/// Compute the deadline once and compare it with the engine's clock.
pub fn evaluate<C: Calendar, K: Clock>(
    engine: &DeadlineEngine<C, K>,
    start: DateTime<FixedOffset>,
    limit: Integer,
) -> fbdh_core::Result<Report> {
    let deadline = engine.compute_deadline(&start, limit)?;
    Ok(Report {
        start,
        limit,
        deadline,
        exceeded: engine.has_passed(deadline),
    })
}

/// Verdict line, followed by the long-form deadline when `verbose`.
pub fn write_report(
    out: &mut impl Write,
    report: &Report,
    locale: Locale,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "{}", verdict(&report.start, report.limit, report.exceeded, locale))?;
    if verbose {
        let long_date = format_long_date(report.deadline.date_naive(), locale);
        writeln!(out, "{}", deadline_line(&long_date, locale))?;
    }
    Ok(())
}

/// One-line verdict printed for a deadline check.
pub fn verdict(start: &DateTime<FixedOffset>, limit: Integer, exceeded: bool, locale: Locale) -> String {
    let atom = format_atom(start);
    match locale {
        Locale::French => format!(
            "Date {atom} {}dépassée avec une contrainte de {limit} jours ouvrés",
            if exceeded { "" } else { "non " }
        ),
        Locale::English => format!(
            "Date {atom} {}exceeded with a limit of {limit} working days",
            if exceeded { "" } else { "not " }
        ),
    }
}

fn deadline_line(long_date: &str, locale: Locale) -> String {
    match locale {
        Locale::French => format!("Échéance : {long_date}"),
        Locale::English => format!("Deadline: {long_date}"),
    }
}
