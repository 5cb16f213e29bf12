//! Greenwich mean sidereal time.
//!
//! Meeus, *Astronomical Algorithms* eq. 12.4, valid for any instant of UT:
//!
//! θ₀ = 280.46061837° + 360.98564736629°·(JD − 2451545.0)
//!      + 0.000387933°·T² − T³/38710000
//!
//! with T in Julian centuries from J2000.0.

use urania_math::{Hms, hours_to_hms, reduce_360};

use crate::julian::{J2000_JD, JulianDate};

/// Mean sidereal time at Greenwich in degrees, [0, 360).
pub fn gmst_deg(date: &JulianDate) -> f64 {
    let d = date.jd() - J2000_JD;
    let t = date.centuries_since_j2000();
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    reduce_360(theta)
}

/// Mean sidereal time at Greenwich in decimal hours, [0, 24).
pub fn gmst_hours(date: &JulianDate) -> f64 {
    gmst_deg(date) / 15.0
}

/// Mean sidereal time at Greenwich as truncated hours, minutes, seconds.
pub fn gmst_hms(date: &JulianDate) -> Hms {
    hours_to_hms(gmst_hours(date))
}

/// Local mean sidereal time in degrees for an observer at `east_longitude_deg`.
pub fn local_mean_sidereal_deg(date: &JulianDate, east_longitude_deg: f64) -> f64 {
    reduce_360(gmst_deg(date) + east_longitude_deg)
}
