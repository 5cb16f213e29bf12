//! Geocentric position of the Moon (Meeus, *Astronomical Algorithms* ch. 47).
//!
//! Mean elements are polynomials in Julian centuries from J2000.0. The
//! periodic sums over tables 47.A and 47.B are scaled by the eccentricity
//! factor `E` for terms in the Sun's mean anomaly, then the additive
//! Venus, Jupiter and flattening terms are applied. Accuracy is about 10″
//! in longitude and 4″ in latitude.
//!
//! Every computation starts its sums from zero; a [`LunarPosition`] depends
//! only on the date it was computed for.

use urania_frames::{Nutation, NutationTheory, RaDec, ecliptic_to_radec};
use urania_math::{Eccentricity, SeriesTerm, TrigForm, reduce_360, sum_series};
use urania_time::JulianDate;

use crate::moon_tables::{LATITUDE, LONGITUDE_DISTANCE};

/// Equatorial radius of the Earth in km, for the horizontal parallax.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Mean distance term of the distance series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Which lunar theory to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LunarTheory {
    /// Meeus ch. 47 (abridged ELP-2000/82).
    #[default]
    Meeus,
}

impl LunarTheory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Meeus => "meeus",
        }
    }

    /// Position of the Moon, with nutation from the default theory.
    pub fn compute(self, date: &JulianDate) -> LunarPosition {
        self.compute_with(date, NutationTheory::default())
    }

    pub fn compute_with(self, date: &JulianDate, nutation: NutationTheory) -> LunarPosition {
        match self {
            Self::Meeus => meeus_position(date, &nutation.compute(date)),
        }
    }
}

/// Mean lunar elements in degrees, each in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarElements {
    /// L′, mean longitude referred to the mean equinox of date.
    pub mean_longitude: f64,
    /// D, mean elongation.
    pub mean_elongation: f64,
    /// M, Sun's mean anomaly.
    pub sun_mean_anomaly: f64,
    /// M′, Moon's mean anomaly.
    pub mean_anomaly: f64,
    /// F, argument of latitude.
    pub argument_of_latitude: f64,
}

impl LunarElements {
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: reduce_360(
                218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            ),
            mean_elongation: reduce_360(
                297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            ),
            sun_mean_anomaly: reduce_360(
                357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            ),
            mean_anomaly: reduce_360(
                134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            ),
            argument_of_latitude: reduce_360(
                93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            ),
        }
    }

    /// Series arguments in table order `[D, M, M′, F, 0]`.
    fn series_arguments(&self) -> [f64; 5] {
        [
            self.mean_elongation,
            self.sun_mean_anomaly,
            self.mean_anomaly,
            self.argument_of_latitude,
            0.0,
        ]
    }
}

/// Everything the lunar theory derives for one date. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub elements: LunarElements,
    /// Geocentric ecliptic longitude λ, mean equinox of date.
    pub longitude: f64,
    /// Geocentric ecliptic latitude β.
    pub latitude: f64,
    /// λ + Δψ.
    pub apparent_longitude: f64,
    /// Centre-to-centre distance Earth–Moon in km.
    pub distance_km: f64,
    /// Equatorial horizontal parallax.
    pub parallax: f64,
    pub mean_ascending_node: f64,
    pub true_ascending_node: f64,
    pub mean_perigee: f64,
    /// Apparent right ascension and declination.
    pub radec: RaDec,
    /// Nutation used for the apparent place.
    pub nutation: Nutation,
}

impl LunarPosition {
    /// Evaluate the default lunar theory.
    pub fn compute(date: &JulianDate) -> Self {
        LunarTheory::default().compute(date)
    }
}

fn longitude_terms() -> impl Iterator<Item = SeriesTerm> {
    LONGITUDE_DISTANCE
        .iter()
        .map(|(m, l, _)| SeriesTerm::from_row(m, *l, 0.0))
}

fn distance_terms() -> impl Iterator<Item = SeriesTerm> {
    LONGITUDE_DISTANCE
        .iter()
        .map(|(m, _, r)| SeriesTerm::from_row(m, *r, 0.0))
}

fn latitude_terms() -> impl Iterator<Item = SeriesTerm> {
    LATITUDE
        .iter()
        .map(|(m, b)| SeriesTerm::from_row(m, *b, 0.0))
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn meeus_position(date: &JulianDate, nutation: &Nutation) -> LunarPosition {
    let t = date.centuries_since_j2000();
    let el = LunarElements::at(t);
    let args = el.series_arguments();

    let a1 = reduce_360(119.75 + 131.849 * t);
    let a2 = reduce_360(53.09 + 479_264.29 * t);
    let a3 = reduce_360(313.45 + 481_266.484 * t);
    let eccentricity = Eccentricity {
        factor: 1.0 - 0.002_516 * t - 0.000_007_4 * t * t,
        argument: 1,
    };

    let l_prime = el.mean_longitude;
    let m_prime = el.mean_anomaly;
    let f = el.argument_of_latitude;

    let mut sum_l = sum_series(longitude_terms(), &args, t, TrigForm::Sine, Some(eccentricity));
    let sum_r = sum_series(distance_terms(), &args, t, TrigForm::Cosine, Some(eccentricity));
    let mut sum_b = sum_series(latitude_terms(), &args, t, TrigForm::Sine, Some(eccentricity));

    // Venus, Jupiter and flattening of the Earth
    sum_l += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(l_prime - f) + 318.0 * sin_deg(a2);
    sum_b += -2235.0 * sin_deg(l_prime)
        + 382.0 * sin_deg(a3)
        + 175.0 * sin_deg(a1 - f)
        + 175.0 * sin_deg(a1 + f)
        + 127.0 * sin_deg(l_prime - m_prime)
        - 115.0 * sin_deg(l_prime + m_prime);

    let longitude = reduce_360(l_prime + sum_l / 1_000_000.0);
    let latitude = sum_b / 1_000_000.0;
    let distance_km = MEAN_DISTANCE_KM + sum_r / 1000.0;
    let apparent_longitude = reduce_360(longitude + nutation.longitude_arcsec / 3600.0);

    let mean_ascending_node = mean_ascending_node_deg(t);

    LunarPosition {
        elements: el,
        longitude,
        latitude,
        apparent_longitude,
        distance_km,
        parallax: (EARTH_RADIUS_KM / distance_km).asin().to_degrees(),
        mean_ascending_node,
        true_ascending_node: reduce_360(mean_ascending_node + node_correction_deg(&args)),
        mean_perigee: mean_perigee_deg(t),
        radec: ecliptic_to_radec(apparent_longitude, latitude, nutation.true_obliquity_deg),
        nutation: *nutation,
    }
}

/// Longitude of the mean ascending node, degrees in [0, 360).
pub fn mean_ascending_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    reduce_360(
        125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// Longitude of the mean perigee, degrees in [0, 360).
pub fn mean_perigee_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    reduce_360(
        83.353_246_5 + 4069.013_728_7 * t - 0.010_320_0 * t2 - t3 / 80_053.0
            + t4 / 18_999_000.0,
    )
}

/// Principal periodic terms of the true node, in degrees.
///
/// `args` are `[D, M, M′, F, _]` in degrees.
fn node_correction_deg(args: &[f64; 5]) -> f64 {
    #[rustfmt::skip]
    static TERMS: [([i8; 4], f64); 5] = [
        //  D   M  M′   F   amplitude (deg)
        ([ 2,  0,  0, -2], -1.4979),
        ([ 0,  1,  0,  0], -0.1500),
        ([ 2,  0,  0,  0],  0.1226),
        ([ 0,  0,  0,  2],  0.1176),
        ([ 0,  0,  2, -2], -0.0801),
    ];
    let terms = TERMS
        .iter()
        .map(|(m, amplitude)| SeriesTerm::from_row(m, *amplitude, 0.0));
    sum_series(terms, args, 0.0, TrigForm::Sine, None)
}
