//! Low-precision solar coordinates (Meeus, *Astronomical Algorithms* ch. 25).
//!
//! Accurate to about 0.01°, which is ample for the aberration correction
//! that consumes it.

use urania_math::reduce_360;

/// Mean solar quantities for one instant. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// L₀, geometric mean longitude.
    pub mean_longitude: f64,
    /// M, mean anomaly.
    pub mean_anomaly: f64,
    /// e, eccentricity of the Earth's orbit.
    pub eccentricity: f64,
    /// C, equation of the centre.
    pub equation_of_center: f64,
    /// ⊙ = L₀ + C, in [0, 360).
    pub true_longitude: f64,
    /// π, longitude of the Earth's perihelion.
    pub perihelion: f64,
}

impl SolarCoordinates {
    /// `t` in Julian centuries from J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let mean_longitude = reduce_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2);
        let mean_anomaly = reduce_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2);
        let m = mean_anomaly.to_radians();
        let equation_of_center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();
        Self {
            mean_longitude,
            mean_anomaly,
            eccentricity: 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2,
            equation_of_center,
            true_longitude: reduce_360(mean_longitude + equation_of_center),
            perihelion: 102.937_35 + 1.719_46 * t + 0.000_46 * t2,
        }
    }

    /// Apparent longitude: true longitude corrected for nutation and
    /// aberration with the low-precision node term.
    pub fn apparent_longitude(&self, t: f64) -> f64 {
        let omega = (125.04 - 1934.136 * t).to_radians();
        reduce_360(self.true_longitude - 0.005_69 - 0.004_78 * omega.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        let t = -0.072_183_436;
        let sun = SolarCoordinates::at(t);
        assert!((sun.mean_longitude - 201.807_20).abs() < 1e-5, "L₀ = {}", sun.mean_longitude);
        assert!((sun.mean_anomaly - 278.993_97).abs() < 1e-5, "M = {}", sun.mean_anomaly);
        assert!((sun.eccentricity - 0.016_711_668).abs() < 1e-9, "e = {}", sun.eccentricity);
        assert!((sun.equation_of_center + 1.897_32).abs() < 1e-5, "C = {}", sun.equation_of_center);
        assert!((sun.true_longitude - 199.909_88).abs() < 1e-5, "⊙ = {}", sun.true_longitude);
        let apparent = sun.apparent_longitude(t);
        assert!((apparent - 199.908_94).abs() < 1e-5, "λ = {apparent}");
    }

    #[test]
    fn perihelion_near_j2000() {
        let sun = SolarCoordinates::at(0.0);
        assert_eq!(sun.perihelion, 102.937_35);
        assert!(sun.true_longitude < 360.0 && sun.true_longitude >= 0.0);
    }
}
