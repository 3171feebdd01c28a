//! # fbdh-time
//!
//! French business-day calendar: Easter computus, public holidays, the
//! business-day predicate, and the working-day deadline engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Per-year holiday caches.
pub mod cache;

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Day-granularity date helpers.
pub mod date;

/// Working-day deadline engine.
pub mod deadline;

/// Easter Sunday computus.
pub mod easter;

/// French public holidays.
pub mod holidays;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::{HolidayCache, NoCache, YearCache};
pub use calendar::Calendar;
pub use calendars::france::France;
pub use deadline::DeadlineEngine;
pub use easter::{easter_days, easter_sunday, easter_sunday_midnight};
pub use holidays::{Holiday, HolidayFormat, HolidayRule, HolidaySet, HolidayValue};
