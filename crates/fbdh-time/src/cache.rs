//! Per-year holiday caches.
//!
//! [`HolidaySet::for_year`] is pure, so a year's holidays can be computed
//! once and shared.  The cache is a value handed to the calendar rather than
//! global state: tests pick [`NoCache`] or a fresh [`YearCache`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use fbdh_core::errors::Result;
use fbdh_core::Year;
use parking_lot::RwLock;
use tracing::debug;

use crate::holidays::HolidaySet;

/// Source of per-year holiday sets.
pub trait HolidayCache: std::fmt::Debug + Send + Sync {
    /// The holidays of `year`.
    fn holidays_for(&self, year: Year) -> Result<Arc<HolidaySet>>;
}

/// Recomputes the holidays on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl HolidayCache for NoCache {
    fn holidays_for(&self, year: Year) -> Result<Arc<HolidaySet>> {
        HolidaySet::for_year(year).map(Arc::new)
    }
}

/// Computes each year's holidays once and keeps them.
///
/// Lookups take a shared lock; a miss takes the exclusive lock and checks
/// again before computing, so a year is stored at most once.
#[derive(Debug, Default)]
pub struct YearCache {
    sets: RwLock<HashMap<Year, Arc<HolidaySet>>>,
}

impl YearCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of years currently cached.
    pub fn len(&self) -> usize {
        self.sets.read().len()
    }

    /// Return `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.sets.read().is_empty()
    }

    /// Return `true` if `year` is cached.
    pub fn contains(&self, year: Year) -> bool {
        self.sets.read().contains_key(&year)
    }

    /// Drop every cached year.
    pub fn clear(&self) {
        self.sets.write().clear();
    }
}

impl HolidayCache for YearCache {
    fn holidays_for(&self, year: Year) -> Result<Arc<HolidaySet>> {
        if let Some(set) = self.sets.read().get(&year) {
            return Ok(Arc::clone(set));
        }
        match self.sets.write().entry(year) {
            Entry::Occupied(e) => Ok(Arc::clone(e.get())),
            Entry::Vacant(e) => {
                debug!(year, "computing French holidays");
                let set = Arc::new(HolidaySet::for_year(year)?);
                Ok(Arc::clone(e.insert(set)))
            }
        }
    }
}

impl<T: HolidayCache + ?Sized> HolidayCache for Arc<T> {
    fn holidays_for(&self, year: Year) -> Result<Arc<HolidaySet>> {
        (**self).holidays_for(year)
    }
}

impl<T: HolidayCache + ?Sized> HolidayCache for &T {
    fn holidays_for(&self, year: Year) -> Result<Arc<HolidaySet>> {
        (**self).holidays_for(year)
    }
}
