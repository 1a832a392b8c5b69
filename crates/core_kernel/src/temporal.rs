//! Calendar-date handling for billing cycles
//!
//! All billing math works on ISO calendar dates with no time component;
//! the wire contract exchanges plain dates in the student's local context.
//! "Today" is always injected through the [`Clock`] trait so that every
//! date-dependent computation is deterministic under test.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid range: start {start} must not be after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// A half-open calendar-date range `[start, end)`
///
/// Billing periods use half-open ranges so that consecutive periods share
/// a boundary date without overlapping: period n+1 starts on the day
/// period n ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a fixed number of days from `start`
    pub fn from_start(start: NaiveDate, days: u64) -> Self {
        Self {
            start,
            end: start + Days::new(days),
        }
    }

    /// Returns true if `date` falls within `[start, end)`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of days covered by the range
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The range immediately following this one, of the same length
    pub fn next(&self) -> Self {
        Self {
            start: self.end,
            end: self.end + Days::new(self.days() as u64),
        }
    }
}

/// Source of the current date
///
/// Domain computations never read the wall clock directly; callers hand in
/// a clock (or a resolved `today`) instead.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replay
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
