//! Error types for calendar validation and Delta-T table lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar construction or table-indexed Delta-T lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the length of the given month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside its range.
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// Julian Day Number is NaN or infinite.
    NonFinite,
    /// Year lies outside a tabulated Delta-T span.
    DeltaTOutOfRange { year: i32, first: i32, last: i32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "invalid month: {month} (expected 1-12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for {year:04}-{month:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "invalid time of day: {hour:02}:{minute:02}:{second}"),
            Self::NonFinite => write!(f, "Julian Day Number must be finite"),
            Self::DeltaTOutOfRange { year, first, last } => {
                write!(f, "year {year} outside Delta-T table span {first}..={last}")
            }
        }
    }
}

impl Error for TimeError {}
