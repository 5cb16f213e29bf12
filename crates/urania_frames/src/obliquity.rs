//! Obliquity of the ecliptic.
//!
//! Mean obliquity from Laskar's polynomial (Meeus eq. 22.3), valid to
//! 0.01″ over 1000 years and a few arcseconds over 10000 years either side
//! of J2000.0.

/// Mean obliquity at J2000.0: 23° 26′ 21.448″.
pub const MEAN_OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Laskar coefficients in arcseconds for powers u¹..u¹⁰.
const LASKAR: [f64; 10] = [
    -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Mean obliquity ε₀ in degrees, `t` in Julian centuries from J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let u = t / 100.0;
    let mut correction = 0.0;
    let mut power = u;
    for c in LASKAR {
        correction += c * power;
        power *= u;
    }
    MEAN_OBLIQUITY_J2000_DEG + correction / 3600.0
}

/// True obliquity ε = ε₀ + Δε, with Δε in arcseconds.
pub fn true_obliquity_deg(t: f64, nutation_in_obliquity_arcsec: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_in_obliquity_arcsec / 3600.0
}
