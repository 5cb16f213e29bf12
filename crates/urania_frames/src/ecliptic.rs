//! Ecliptic ⇄ equatorial conversion (Meeus eqs. 13.3, 13.4, 13.1, 13.2).
//!
//! All angles in degrees. Right ascension and longitude are returned in
//! [0, 360).

use urania_math::reduce_360;

use crate::coordinate::RaDec;

/// Ecliptic longitude/latitude to right ascension/declination.
///
/// `obliquity_deg` is the mean obliquity for mean positions or the true
/// obliquity for apparent ones.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (sin_l, cos_l) = lon_deg.to_radians().sin_cos();
    let lat = lat_deg.to_radians();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let ra = (sin_l * cos_e - lat.tan() * sin_e).atan2(cos_l);
    let dec = (lat.sin() * cos_e + lat.cos() * sin_e * sin_l).asin();

    (reduce_360(ra.to_degrees()), dec.to_degrees())
}

/// Same as [`ecliptic_to_equatorial`], wrapped as a [`RaDec`].
pub fn ecliptic_to_radec(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> RaDec {
    let (ra, dec) = ecliptic_to_equatorial(lon_deg, lat_deg, obliquity_deg);
    RaDec::new(ra, dec)
}

/// Right ascension/declination to ecliptic longitude/latitude.
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (sin_a, cos_a) = ra_deg.to_radians().sin_cos();
    let dec = dec_deg.to_radians();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let lon = (sin_a * cos_e + dec.tan() * sin_e).atan2(cos_a);
    let lat = (dec.sin() * cos_e - dec.cos() * sin_e * sin_a).asin();

    (reduce_360(lon.to_degrees()), lat.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183°, ε = 23.4392911°
        let (lon, lat) = equatorial_to_ecliptic(116.328_942, 28.026_183, 23.439_291_1);
        assert!((lon - 113.215_630).abs() < 1e-5, "λ = {lon}");
        assert!((lat - 6.684_170).abs() < 1e-5, "β = {lat}");

        let (ra, dec) = ecliptic_to_equatorial(lon, lat, 23.439_291_1);
        assert!((ra - 116.328_942).abs() < 1e-9, "α = {ra}");
        assert!((dec - 28.026_183).abs() < 1e-9, "δ = {dec}");
    }

    #[test]
    fn equinox_and_solstice() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(ra.abs() < 1e-12 && dec.abs() < 1e-12);
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((ra - 90.0).abs() < 1e-9, "α = {ra}");
        assert!((dec - 23.44).abs() < 1e-9, "δ = {dec}");
        let (ra, _) = ecliptic_to_equatorial(270.0, 0.0, 23.44);
        assert!((ra - 270.0).abs() < 1e-9, "α = {ra}");
    }

    #[test]
    fn radec_wrapper() {
        let p = ecliptic_to_radec(-90.0, 0.0, 23.44);
        assert!((p.ra().degrees() - 270.0).abs() < 1e-9);
        assert!((p.dec().degrees() + 23.44).abs() < 1e-9);
    }
}
