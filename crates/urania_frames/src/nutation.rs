//! Nutation in longitude and obliquity (Meeus, *Astronomical Algorithms* ch. 22).
//!
//! The 63-term series from the 1980 IAU theory, accurate to about 0.5″ in
//! Δψ and 0.1″ in Δε. Fundamental arguments and amplitudes are in degrees
//! and units of 0.0001″ respectively.

use urania_math::{ARGUMENT_COUNT, SeriesTerm, TrigForm, reduce_360, sum_series};
use urania_time::JulianDate;

use crate::obliquity::mean_obliquity_deg;

/// Which nutation theory to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NutationTheory {
    /// Meeus ch. 22, IAU 1980 series.
    #[default]
    Meeus,
}

impl NutationTheory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Meeus => "meeus",
        }
    }

    pub fn compute(self, date: &JulianDate) -> Nutation {
        match self {
            Self::Meeus => {
                let t = date.centuries_since_j2000();
                let (longitude_arcsec, obliquity_arcsec) = nutation_meeus(t);
                let mean_obliquity_deg = mean_obliquity_deg(t);
                log::trace!(
                    "nutation at T = {t:.9}: dpsi = {longitude_arcsec:.5}\", deps = {obliquity_arcsec:.5}\""
                );
                Nutation {
                    longitude_arcsec,
                    obliquity_arcsec,
                    mean_obliquity_deg,
                    true_obliquity_deg: mean_obliquity_deg + obliquity_arcsec / 3600.0,
                }
            }
        }
    }
}

/// Nutation and obliquity of the ecliptic at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ in arcseconds.
    pub longitude_arcsec: f64,
    /// Δε in arcseconds.
    pub obliquity_arcsec: f64,
    /// ε₀ in degrees.
    pub mean_obliquity_deg: f64,
    /// ε = ε₀ + Δε, in degrees.
    pub true_obliquity_deg: f64,
}

impl Nutation {
    /// Evaluate the default theory.
    pub fn compute(date: &JulianDate) -> Self {
        NutationTheory::default().compute(date)
    }
}

/// Fundamental arguments `[D, M, M′, F, Ω]` in degrees, each in [0, 360).
///
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the ascending node of the Moon's mean orbit
pub fn fundamental_arguments(t: f64) -> [f64; ARGUMENT_COUNT] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.85036 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.52772 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.96298 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.27191 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.04452 - 1934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    [
        reduce_360(d),
        reduce_360(m),
        reduce_360(mp),
        reduce_360(f),
        reduce_360(om),
    ]
}

/// Periodic terms of nutation.
///
/// Each row: `([D, M, M′, F, Ω], S, S′, C, C′)`; Δψ uses `(S + S′·T)·sin(arg)`
/// and Δε uses `(C + C′·T)·cos(arg)`, in units of 0.0001″.
#[rustfmt::skip]
static NUTATION_TERMS: [([i8; 5], f64, f64, f64, f64); 63] = [
    //  D   M  M′   F   Ω             S           S′            C           C′
    ([ 0,  0,  0,  0,  1],   -171996.0,      -174.2,     92025.0,         8.9),
    ([-2,  0,  0,  2,  2],    -13187.0,        -1.6,      5736.0,        -3.1),
    ([ 0,  0,  0,  2,  2],     -2274.0,        -0.2,       977.0,        -0.5),
    ([ 0,  0,  0,  0,  2],      2062.0,         0.2,      -895.0,         0.5),
    ([ 0,  1,  0,  0,  0],      1426.0,        -3.4,        54.0,        -0.1),
    ([ 0,  0,  1,  0,  0],       712.0,         0.1,        -7.0,         0.0),
    ([-2,  1,  0,  2,  2],      -517.0,         1.2,       224.0,        -0.6),
    ([ 0,  0,  0,  2,  1],      -386.0,        -0.4,       200.0,         0.0),
    ([ 0,  0,  1,  2,  2],      -301.0,         0.0,       129.0,        -0.1),
    ([-2, -1,  0,  2,  2],       217.0,        -0.5,       -95.0,         0.3),
    ([-2,  0,  1,  0,  0],      -158.0,         0.0,         0.0,         0.0),
    ([-2,  0,  0,  2,  1],       129.0,         0.1,       -70.0,         0.0),
    ([ 0,  0, -1,  2,  2],       123.0,         0.0,       -53.0,         0.0),
    ([ 2,  0,  0,  0,  0],        63.0,         0.0,         0.0,         0.0),
    ([ 0,  0,  1,  0,  1],        63.0,         0.1,       -33.0,         0.0),
    ([ 2,  0, -1,  2,  2],       -59.0,         0.0,        26.0,         0.0),
    ([ 0,  0, -1,  0,  1],       -58.0,        -0.1,        32.0,         0.0),
    ([ 0,  0,  1,  2,  1],       -51.0,         0.0,        27.0,         0.0),
    ([-2,  0,  2,  0,  0],        48.0,         0.0,         0.0,         0.0),
    ([ 0,  0, -2,  2,  1],        46.0,         0.0,       -24.0,         0.0),
    ([ 2,  0,  0,  2,  2],       -38.0,         0.0,        16.0,         0.0),
    ([ 0,  0,  2,  2,  2],       -31.0,         0.0,        13.0,         0.0),
    ([ 0,  0,  2,  0,  0],        29.0,         0.0,         0.0,         0.0),
    ([-2,  0,  1,  2,  2],        29.0,         0.0,       -12.0,         0.0),
    ([ 0,  0,  0,  2,  0],        26.0,         0.0,         0.0,         0.0),
    ([-2,  0,  0,  2,  0],       -22.0,         0.0,         0.0,         0.0),
    ([ 0,  0, -1,  2,  1],        21.0,         0.0,       -10.0,         0.0),
    ([ 0,  2,  0,  0,  0],        17.0,        -0.1,         0.0,         0.0),
    ([ 2,  0, -1,  0,  1],        16.0,         0.0,        -8.0,         0.0),
    ([-2,  2,  0,  2,  2],       -16.0,         0.1,         7.0,         0.0),
    ([ 0,  1,  0,  0,  1],       -15.0,         0.0,         9.0,         0.0),
    ([-2,  0,  1,  0,  1],       -13.0,         0.0,         7.0,         0.0),
    ([ 0, -1,  0,  0,  1],       -12.0,         0.0,         6.0,         0.0),
    ([ 0,  0,  2, -2,  0],        11.0,         0.0,         0.0,         0.0),
    ([ 2,  0, -1,  2,  1],       -10.0,         0.0,         5.0,         0.0),
    ([ 2,  0,  1,  2,  2],        -8.0,         0.0,         3.0,         0.0),
    ([ 0,  1,  0,  2,  2],         7.0,         0.0,        -3.0,         0.0),
    ([-2,  1,  1,  0,  0],        -7.0,         0.0,         0.0,         0.0),
    ([ 0, -1,  0,  2,  2],        -7.0,         0.0,         3.0,         0.0),
    ([ 2,  0,  0,  2,  1],        -7.0,         0.0,         3.0,         0.0),
    ([ 2,  0,  1,  0,  0],         6.0,         0.0,         0.0,         0.0),
    ([-2,  0,  2,  2,  2],         6.0,         0.0,        -3.0,         0.0),
    ([-2,  0,  1,  2,  1],         6.0,         0.0,        -3.0,         0.0),
    ([ 2,  0, -2,  0,  1],        -6.0,         0.0,         3.0,         0.0),
    ([ 2,  0,  0,  0,  1],        -6.0,         0.0,         3.0,         0.0),
    ([ 0, -1,  1,  0,  0],         5.0,         0.0,         0.0,         0.0),
    ([-2, -1,  0,  2,  1],        -5.0,         0.0,         3.0,         0.0),
    ([-2,  0,  0,  0,  1],        -5.0,         0.0,         3.0,         0.0),
    ([ 0,  0,  2,  2,  1],        -5.0,         0.0,         3.0,         0.0),
    ([-2,  0,  2,  0,  1],         4.0,         0.0,         0.0,         0.0),
    ([-2,  1,  0,  2,  1],         4.0,         0.0,         0.0,         0.0),
    ([ 0,  0,  1, -2,  0],         4.0,         0.0,         0.0,         0.0),
    ([-1,  0,  1,  0,  0],        -4.0,         0.0,         0.0,         0.0),
    ([-2,  1,  0,  0,  0],        -4.0,         0.0,         0.0,         0.0),
    ([ 1,  0,  0,  0,  0],        -4.0,         0.0,         0.0,         0.0),
    ([ 0,  0,  1,  2,  0],         3.0,         0.0,         0.0,         0.0),
    ([ 0,  0, -2,  2,  2],        -3.0,         0.0,         0.0,         0.0),
    ([-1, -1,  1,  0,  0],        -3.0,         0.0,         0.0,         0.0),
    ([ 0,  1,  1,  0,  0],        -3.0,         0.0,         0.0,         0.0),
    ([ 0, -1,  1,  2,  2],        -3.0,         0.0,         0.0,         0.0),
    ([ 2, -1, -1,  2,  2],        -3.0,         0.0,         0.0,         0.0),
    ([ 0,  0,  3,  2,  2],        -3.0,         0.0,         0.0,         0.0),
    ([ 2, -1,  0,  2,  2],        -3.0,         0.0,         0.0,         0.0),
];

fn longitude_terms() -> impl Iterator<Item = SeriesTerm> {
    NUTATION_TERMS
        .iter()
        .map(|&(m, s, s1, _, _)| SeriesTerm::with_drift(m, s, s1))
}

fn obliquity_terms() -> impl Iterator<Item = SeriesTerm> {
    NUTATION_TERMS
        .iter()
        .map(|&(m, _, _, c, c1)| SeriesTerm::with_drift(m, c, c1))
}

/// Δψ and Δε in arcseconds for `t` Julian centuries from J2000.0.
pub fn nutation_meeus(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let dpsi = sum_series(longitude_terms(), &args, t, TrigForm::Sine, None);
    let deps = sum_series(obliquity_terms(), &args, t, TrigForm::Cosine, None);
    (dpsi / 10_000.0, deps / 10_000.0)
}
