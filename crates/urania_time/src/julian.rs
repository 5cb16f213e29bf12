//! Julian Day Number ⇄ calendar conversion and the `JulianDate` value.
//!
//! Forward and inverse conversions follow Meeus, *Astronomical Algorithms*
//! ch. 7. The Gregorian correction applies on and after 1582-10-15; earlier
//! dates use the Julian calendar, including proleptic BCE years (astronomical
//! numbering, so year 0 is 1 BCE).

use std::cmp::Ordering;

use crate::calendar::CalendarDate;
use crate::delta_t::DeltaTMethod;
use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium.
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First integer day of the inverse algorithm that lies on the Gregorian calendar.
const GREGORIAN_INVERSE_THRESHOLD: f64 = 2_299_161.0;

/// Calendar date to Julian Day Number. Fields are not validated.
pub fn calendar_to_jd(date: &CalendarDate) -> f64 {
    let (y, m) = if date.month > 2 {
        (date.year, date.month as i32)
    } else {
        (date.year - 1, date.month as i32 + 12)
    };

    let b = if date.is_gregorian() {
        let a = y / 100;
        2 - a + a / 4
    } else {
        0
    };

    // Proleptic BCE years need the extra quarter-day so the truncation
    // below rounds toward the previous year boundary.
    let c = if y < 0 { -0.75 } else { 0.0 };

    (365.25 * y as f64 + c).trunc()
        + (30.6001 * (m + 1) as f64).trunc()
        + date.day as f64
        + date.day_fraction()
        + 1_720_994.5
        + b as f64
}

/// Milliseconds per day, the resolution of the recovered time of day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number to calendar date.
///
/// The time of day is rounded to the nearest millisecond before it is
/// split, so a whole second survives the round trip. A day fraction that
/// rounds up to midnight carries into the next day.
pub fn jd_to_calendar(jd: f64) -> CalendarDate {
    let shifted = jd + 0.5;
    let mut z = shifted.floor();
    let mut millis = ((shifted - z) * MILLIS_PER_DAY).round();
    if millis >= MILLIS_PER_DAY {
        z += 1.0;
        millis -= MILLIS_PER_DAY;
    }

    let a = if z < GREGORIAN_INVERSE_THRESHOLD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let millis = millis as u64;
    let hour = millis / 3_600_000;
    let minute = millis / 60_000 % 60;
    let second = (millis % 60_000) as f64 / 1000.0;

    CalendarDate::new(
        year as i32,
        month as u32,
        day as u32,
        hour as u32,
        minute as u32,
        second,
    )
}

/// A point in time held both as a Julian Day Number and as a calendar date.
///
/// The two views are kept consistent by construction: building from a
/// calendar date computes the JDN, building from a JDN derives the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
    calendar: CalendarDate,
}

impl JulianDate {
    /// Build from a validated calendar date.
    pub fn from_calendar(calendar: CalendarDate) -> Result<Self, TimeError> {
        calendar.validate()?;
        Ok(Self {
            jd: calendar_to_jd(&calendar),
            calendar,
        })
    }

    /// Build from calendar fields, validating them first.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        Self::from_calendar(CalendarDate::new(year, month, day, hour, minute, second))
    }

    /// Midnight at the start of the given day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::from_calendar(CalendarDate::from_ymd(year, month, day))
    }

    /// Build from a Julian Day Number.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite);
        }
        Ok(Self::from_finite_jd(jd))
    }

    pub(crate) fn from_finite_jd(jd: f64) -> Self {
        Self {
            jd,
            calendar: jd_to_calendar(jd),
        }
    }

    /// The J2000.0 epoch.
    pub fn j2000() -> Self {
        Self {
            jd: J2000_JD,
            calendar: CalendarDate::new(2000, 1, 1, 12, 0, 0.0),
        }
    }

    /// Julian Day Number.
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Calendar view of the same instant.
    pub fn calendar(&self) -> &CalendarDate {
        &self.calendar
    }

    /// Calendar year (astronomical numbering).
    pub fn year(&self) -> i32 {
        self.calendar.year
    }

    /// Julian centuries elapsed since `epoch`: (JD − JD_epoch) / 36525.
    pub fn julian_centuries(&self, epoch: &JulianDate) -> f64 {
        (self.jd - epoch.jd) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian centuries since J2000.0, the `t` of most polynomial series.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian millennia since J2000.0, the `t` of VSOP87.
    pub fn millennia_since_j2000(&self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_JULIAN_MILLENNIUM
    }

    /// A date `days` later (or earlier, if negative).
    pub fn offset_days(&self, days: f64) -> Result<Self, TimeError> {
        Self::from_jd(self.jd + days)
    }

    /// Convert a Universal Time date to Dynamical Time: JDE = JD + ΔT/86400.
    pub fn to_dynamical(&self, method: DeltaTMethod) -> Self {
        let delta_t = method.delta_t(self);
        Self::from_finite_jd(self.jd + delta_t / SECONDS_PER_DAY)
    }

    /// Convert a Dynamical Time date back to Universal Time.
    ///
    /// ΔT is evaluated at the dynamical date itself; the error this
    /// introduces is far below the accuracy of any ΔT estimate.
    pub fn from_dynamical(jde: &JulianDate, method: DeltaTMethod) -> Self {
        let delta_t = method.delta_t(jde);
        Self::from_finite_jd(jde.jd - delta_t / SECONDS_PER_DAY)
    }
}

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.jd.partial_cmp(&other.jd)
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (JD {:.6})", self.calendar, self.jd)
    }
}
