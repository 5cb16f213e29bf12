//! Time handling for the urania astronomy crates.
//!
//! This crate provides:
//! - Calendar date validation and Julian Day Number conversion (both ways)
//! - `JulianDate`, plus an observable variant that notifies listeners
//! - ΔT estimators and Universal ⇄ Dynamical Time conversion
//! - Greenwich mean sidereal time
//! - Time spans between two dates

pub mod calendar;
pub mod delta_t;
mod delta_t_tables;
pub mod error;
pub mod julian;
pub mod observable;
pub mod sidereal;
pub mod span;

pub use calendar::{CalendarDate, GREGORIAN_START, days_in_month, is_leap_year};
pub use delta_t::{DeltaTMethod, YearWindow, chapront_table_delta_t, meeus_table_delta_t};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, JulianDate, SECONDS_PER_DAY,
    calendar_to_jd, jd_to_calendar,
};
pub use observable::{ListenerId, ObservableJulianDate, Tracked};
pub use sidereal::{gmst_deg, gmst_hms, gmst_hours, local_mean_sidereal_deg};
pub use span::TimeSpan;
