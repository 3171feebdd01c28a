//! Working-day deadlines.
//!
//! The [`DeadlineEngine`] counts business days forward from a start instant
//! using a [`Calendar`] and compares the resulting deadline against the
//! instant reported by a [`Clock`].
//!
//! # Counting rule
//! * The start instant is truncated to midnight UTC; its time of day is
//!   ignored and the start day itself is never counted.
//! * With a limit of `0` the deadline is the next business day.
//! * With a limit of `n > 0` the engine finds the `n`-th business day after the
//!   start day and the deadline is midnight of the following calendar day,
//!   whatever that day is (weekend and holidays included).
//! * A deadline is exceeded once "now" is strictly later than it.

use chrono::{DateTime, Days, TimeZone, Utc};
use fbdh_core::clock::{Clock, SystemClock};
use fbdh_core::errors::{Error, Result};
use fbdh_core::{ensure, Integer};
use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::calendars::france::France;
use crate::date::{midnight, next_day, utc_day};

/// Deadline computations over a calendar and a clock.
#[derive(Debug, Clone, Default)]
pub struct DeadlineEngine<C = France, K = SystemClock> {
    calendar: C,
    clock: K,
}

impl<C: Calendar, K: Clock> DeadlineEngine<C, K> {
    /// Create an engine from a calendar and a clock.
    pub fn new(calendar: C, clock: K) -> Self {
        Self { calendar, clock }
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The clock in use.
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Return `true` if the UTC day of `instant` is not a business day.
    pub fn is_holiday<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<bool> {
        self.calendar.is_holiday(utc_day(instant))
    }

    /// The first instant, one or more whole days after `instant`, that falls
    /// on a business day.
    ///
    /// The time of day is kept; the input day is never returned.
    pub fn next_business_day<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<DateTime<Utc>> {
        let mut cursor = instant.with_timezone(&Utc);
        loop {
            cursor = cursor.checked_add_days(Days::new(1)).ok_or_else(|| {
                Error::Date(format!("date arithmetic: {cursor} + 1 day out of range"))
            })?;
            if !self.calendar.is_holiday(cursor.date_naive())? {
                return Ok(cursor);
            }
        }
    }

    /// Midnight UTC on which a limit of `limit` working days counted from
    /// `start` runs out.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `limit` is negative, before any date
    /// arithmetic takes place.
    pub fn compute_deadline<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        limit: Integer,
    ) -> Result<DateTime<Utc>> {
        ensure!(
            limit >= 0,
            "working-days limit must be non-negative, got {limit}"
        );
        let start_day = utc_day(start);
        let mut cursor = self.calendar.next_business_day(start_day)?;
        if limit == 0 {
            debug!(%start_day, limit, deadline = %cursor, "deadline computed");
            return Ok(midnight(cursor));
        }
        for remaining in (1..limit).rev() {
            cursor = self.calendar.next_business_day(cursor)?;
            trace!(business_day = %cursor, remaining, "counted business day");
        }
        let deadline = next_day(cursor)?;
        debug!(%start_day, limit, %deadline, "deadline computed");
        Ok(midnight(deadline))
    }

    /// Return `true` if `now` is strictly after the deadline for
    /// (`start`, `limit`).
    pub fn deadline_exceeded_at<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        limit: Integer,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        Ok(now > self.compute_deadline(start, limit)?)
    }

    /// Return `true` if the clock's current instant is strictly after
    /// `deadline`.
    pub fn has_passed(&self, deadline: DateTime<Utc>) -> bool {
        self.clock.now() > deadline
    }

    /// Return `true` if the clock's current instant is strictly after the
    /// deadline for (`start`, `limit`).
    pub fn deadline_exceeded<Tz: TimeZone>(&self, start: &DateTime<Tz>, limit: Integer) -> Result<bool> {
        Ok(self.has_passed(self.compute_deadline(start, limit)?))
    }
}
