//! Calendar date/time value with validation.
//!
//! `CalendarDate` is the civil representation every Julian Day Number
//! converts to and from. Dates before 1582-10-15 are read on the Julian
//! calendar and later ones on the Gregorian calendar; the ten days dropped
//! by the reform (1582-10-05..14) are still accepted and read with the
//! Julian rule.

use crate::error::TimeError;

/// First day of the Gregorian calendar as (year, month, day).
pub const GREGORIAN_START: (i32, u32, u32) = (1582, 10, 15);

/// Calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check month, day and time-of-day ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        let Some(last_day) = days_in_month(self.year, self.month) else {
            return Err(TimeError::InvalidMonth(self.month));
        };
        if self.day == 0 || self.day > last_day {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23
            || self.minute > 59
            || !self.second.is_finite()
            || !(0.0..60.0).contains(&self.second)
        {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(())
    }

    /// True on and after 1582-10-15.
    pub fn is_gregorian(&self) -> bool {
        (self.year, self.month, self.day) >= GREGORIAN_START
    }

    /// Time of day as a fraction of a day.
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0 + self.second / 86_400.0
    }
}

/// Leap-year rule for the calendar in force during `year`.
///
/// Years before 1582 follow the Julian rule (every fourth year). From 1582
/// on the Gregorian rule applies; the reform falls in October, so February
/// 1582 is unaffected either way.
pub fn is_leap_year(year: i32) -> bool {
    if year < GREGORIAN_START.0 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.trunc();
        if (self.second - whole).abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole as u32
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let d = CalendarDate::new(1987, 4, 10, 19, 21, 0.5);
        assert_eq!(d.year, 1987);
        assert_eq!(d.month, 4);
        assert_eq!(d.day, 10);
        assert_eq!(d.hour, 19);
        assert_eq!(d.minute, 21);
        assert!((d.second - 0.5).abs() < 1e-12);
    }

    #[test]
    fn leap_years_switch_rule_at_reform() {
        assert!(is_leap_year(1500), "1500 is a Julian leap year");
        assert!(!is_leap_year(1700));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-3));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1500, 2), Some(29));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert_eq!(
            CalendarDate::from_ymd(2024, 13, 1).validate(),
            Err(TimeError::InvalidMonth(13))
        );
        assert_eq!(
            CalendarDate::from_ymd(2023, 2, 29).validate(),
            Err(TimeError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(CalendarDate::from_ymd(2024, 1, 0).validate().is_err());
        assert!(CalendarDate::new(2024, 1, 1, 24, 0, 0.0).validate().is_err());
        assert!(CalendarDate::new(2024, 1, 1, 0, 60, 0.0).validate().is_err());
        assert!(CalendarDate::new(2024, 1, 1, 0, 0, 60.0).validate().is_err());
        assert!(CalendarDate::new(2024, 1, 1, 0, 0, f64::NAN).validate().is_err());
    }

    #[test]
    fn reform_gap_days_are_accepted() {
        let d = CalendarDate::from_ymd(1582, 10, 10);
        assert!(d.validate().is_ok());
        assert!(!d.is_gregorian());
        assert!(CalendarDate::from_ymd(1582, 10, 15).is_gregorian());
        assert!(!CalendarDate::from_ymd(1582, 10, 14).is_gregorian());
    }

    #[test]
    fn day_fraction_of_noon() {
        let d = CalendarDate::new(2000, 1, 1, 12, 0, 0.0);
        assert!((d.day_fraction() - 0.5).abs() < 1e-15);
        let d = CalendarDate::new(2000, 1, 1, 7, 36, 12.0);
        assert!((d.day_fraction() - 0.316_805_555_555).abs() < 1e-9);
    }

    #[test]
    fn display_whole_seconds() {
        let d = CalendarDate::new(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(d.to_string(), "2000-01-01T12:00:00");
    }

    #[test]
    fn display_fractional_seconds() {
        let d = CalendarDate::new(837, 4, 10, 7, 36, 11.5);
        assert_eq!(d.to_string(), "0837-04-10T07:36:11.500000");
    }
}
