//! Lengths of time between two dates.

use crate::error::TimeError;
use crate::julian::JulianDate;

/// The interval between two dates, in either order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    start: JulianDate,
    end: JulianDate,
}

impl TimeSpan {
    pub fn between(start: JulianDate, end: JulianDate) -> Self {
        Self { start, end }
    }

    /// A span of `days` from `start`; a negative length ends before it.
    pub fn from_length(start: JulianDate, days: f64) -> Result<Self, TimeError> {
        let end = start.offset_days(days)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &JulianDate {
        &self.start
    }

    pub fn end(&self) -> &JulianDate {
        &self.end
    }

    /// Exact length in days, never negative.
    pub fn length_days(&self) -> f64 {
        (self.end.jd() - self.start.jd()).abs()
    }

    /// Whole days.
    pub fn days(&self) -> i64 {
        self.length_days() as i64
    }

    /// Whole weeks.
    pub fn weeks(&self) -> i64 {
        self.days() / 7
    }

    /// Whole Julian years of 365.25 days.
    pub fn years(&self) -> i64 {
        (self.length_days() / 365.25) as i64
    }

    pub fn decades(&self) -> i64 {
        self.years() / 10
    }

    pub fn centuries(&self) -> i64 {
        self.decades() / 10
    }

    /// Calendar months from the earlier endpoint's month to the later one's.
    /// Days of the month are ignored.
    pub fn months(&self) -> i64 {
        let (earlier, later) = if self.start.jd() <= self.end.jd() {
            (self.start.calendar(), self.end.calendar())
        } else {
            (self.end.calendar(), self.start.calendar())
        };
        12 * (later.year as i64 - earlier.year as i64) + later.month as i64 - earlier.month as i64
    }
}
