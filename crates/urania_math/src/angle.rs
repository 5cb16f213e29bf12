//! Angle range reductions and sexagesimal decomposition.
//!
//! Every reduction here is total over finite inputs. Pole folding maps an
//! angle onto a latitude-like range by reflecting values beyond the pole
//! back toward it and restoring the hemisphere sign afterwards; the degree
//! and radian versions share the same steps.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn reduce_modulo(value: f64, modulus: f64) -> f64 {
    let r = value % modulus;
    let r = if r < 0.0 { r + modulus } else { r };
    // -1e-17 + 360.0 rounds to 360.0
    if r >= modulus { 0.0 } else { r }
}

/// Reduce an angle in degrees to [0, 360).
pub fn reduce_360(deg: f64) -> f64 {
    reduce_modulo(deg, 360.0)
}

/// Reduce an hour angle to [0, 24).
pub fn reduce_24(hours: f64) -> f64 {
    reduce_modulo(hours, 24.0)
}

/// Reduce an angle in radians to [0, 2π).
pub fn reduce_2pi(rad: f64) -> f64 {
    reduce_modulo(rad, TAU)
}

/// Fold an angle in degrees onto [-90, 90].
///
/// The angle is first reduced to [0, 360). Values past 180 belong to the
/// southern half and lose 180; values past 90 are then reflected about the
/// pole (`180 - x`). The sign is applied last.
///
/// ```text
/// 135 -> 45    225 -> -45    241.23917 -> -61.23917    -517.9103 -> -22.0897
/// ```
pub fn fold_90(deg: f64) -> f64 {
    let mut x = reduce_360(deg);
    let mut sign = 1.0;
    if x > 180.0 {
        sign = -1.0;
        x -= 180.0;
    }
    if x > 90.0 {
        x = 180.0 - x;
    }
    sign * x
}

/// Fold an angle in radians onto [-π/2, π/2]. Same steps as [`fold_90`].
pub fn fold_half_pi(rad: f64) -> f64 {
    let mut x = reduce_2pi(rad);
    let mut sign = 1.0;
    if x > PI {
        sign = -1.0;
        x -= PI;
    }
    if x > FRAC_PI_2 {
        x = PI - x;
    }
    sign * x
}

/// Degrees, arc-minutes, arc-seconds.
///
/// Produced by truncation toward zero, so a negative angle yields negative
/// minutes and seconds as well (`-61.23917` is `-61° -14′ -21.012″`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
}

/// Hours, minutes, seconds of time. Same truncation rules as [`Dms`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

fn split_sexagesimal(value: f64) -> (i32, i32, f64) {
    let whole = value.trunc();
    let decimal_minutes = (value - whole) * 60.0;
    let minutes = decimal_minutes.trunc();
    let seconds = (decimal_minutes - minutes) * 60.0;
    (whole as i32, minutes as i32, seconds)
}

/// Decompose decimal degrees into degrees, minutes and seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let (degrees, minutes, seconds) = split_sexagesimal(deg);
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Recombine a [`Dms`] into decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Decompose decimal hours into hours, minutes and seconds.
pub fn hours_to_hms(hours: f64) -> Hms {
    let (hours, minutes, seconds) = split_sexagesimal(hours);
    Hms {
        hours,
        minutes,
        seconds,
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}° {}′ {:.3}″", self.degrees, self.minutes, self.seconds)
    }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m {:.2}s", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn reduce_360_cases() {
        assert!((reduce_360(361.0) - 1.0).abs() < EPS);
        assert!((reduce_360(-90.0) - 270.0).abs() < EPS);
        assert_eq!(reduce_360(3600.0), 0.0);
        assert_eq!(reduce_360(-3600.0), 0.0);
        assert_eq!(reduce_360(360.0), 0.0);
    }

    #[test]
    fn reduce_360_is_idempotent() {
        for &x in &[-1e-17, -725.25, 0.0, 13.5, 359.999_999, 1.0e9, -3.3e7] {
            let once = reduce_360(x);
            assert_eq!(reduce_360(once), once, "not idempotent for {x}");
            assert!((0.0..360.0).contains(&once), "{x} reduced to {once}");
        }
    }

    #[test]
    fn reduce_24_cases() {
        assert_eq!(reduce_24(24.0), 0.0);
        assert!((reduce_24(27.0) - 3.0).abs() < EPS);
        assert_eq!(reduce_24(-48.0), 0.0);
        assert!((reduce_24(-1.5) - 22.5).abs() < EPS);
    }

    #[test]
    fn reduce_2pi_cases() {
        assert!((reduce_2pi(PI) - PI).abs() < 1e-12);
        assert!((reduce_2pi(3.0 * PI) - PI).abs() < 1e-12);
        assert!((reduce_2pi(-PI) - PI).abs() < 1e-12);
        assert!(reduce_2pi(4.0 * PI).abs() < 1e-12);
        assert!(reduce_2pi(-TAU).abs() < 1e-12);
    }

    #[test]
    fn fold_90_reflects_about_poles() {
        let cases = [
            (0.0, 0.0),
            (12.31528, 12.31528),
            (45.0, 45.0),
            (90.0, 90.0),
            (100.0, 80.0),
            (-100.0, -80.0),
            (135.0, 45.0),
            (157.9103, 22.0897),
            (180.0, 0.0),
            (225.0, -45.0),
            (241.23917, -61.23917),
            (270.0, -90.0),
            (281.6754, -78.3246),
            (315.0, -45.0),
            (2205.0, 45.0),
            (-517.9103, -22.0897),
        ];
        for (input, expected) in cases {
            let got = fold_90(input);
            assert!(
                (got - expected).abs() < 1e-6,
                "fold_90({input}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn fold_half_pi_matches_degree_fold() {
        for &deg in &[0.0_f64, 45.0, 135.0, 225.0, 241.23917, 281.6754, -517.9103, 2205.0] {
            let rad = fold_half_pi(deg.to_radians()).to_degrees();
            let reference = fold_90(deg);
            assert!(
                (rad - reference).abs() < 1e-9,
                "fold_half_pi({deg}°) = {rad}°, fold_90 = {reference}°"
            );
        }
    }

    #[test]
    fn dms_positive() {
        let d = deg_to_dms(12.31528);
        assert_eq!(d.degrees, 12);
        assert_eq!(d.minutes, 18);
        assert!((d.seconds - 55.008).abs() < 1e-6, "seconds = {}", d.seconds);
    }

    #[test]
    fn dms_negative_truncates_toward_zero() {
        let d = deg_to_dms(-61.23917);
        assert_eq!(d.degrees, -61);
        assert_eq!(d.minutes, -14);
        assert!((d.seconds + 21.012).abs() < 1e-6, "seconds = {}", d.seconds);
    }

    #[test]
    fn dms_recombines() {
        for &v in &[0.0, 22.0897, -78.3246, 359.5] {
            let back = dms_to_deg(&deg_to_dms(v));
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }

    #[test]
    fn hms_of_decimal_hours() {
        let h = hours_to_hms(8.979231);
        assert_eq!(h.hours, 8);
        assert_eq!(h.minutes, 58);
        assert!((h.seconds - 45.2316).abs() < 1e-3, "seconds = {}", h.seconds);
    }
}
