//! Annual aberration in ecliptic coordinates (Meeus eq. 23.2).

use crate::sun::SolarCoordinates;

/// Constant of aberration κ in arcseconds.
pub const ABERRATION_CONSTANT_ARCSEC: f64 = 20.495_52;

/// Corrections `(Δλ, Δβ)` in arcseconds for a body at ecliptic longitude
/// `lon_deg` and latitude `lat_deg`.
pub fn annual_aberration(lon_deg: f64, lat_deg: f64, sun: &SolarCoordinates) -> (f64, f64) {
    let k = ABERRATION_CONSTANT_ARCSEC;
    let e = sun.eccentricity;
    let lat = lat_deg.to_radians();
    let sun_minus_lon = (sun.true_longitude - lon_deg).to_radians();
    let peri_minus_lon = (sun.perihelion - lon_deg).to_radians();

    let d_lon = (-k * sun_minus_lon.cos() + e * k * peri_minus_lon.cos()) / lat.cos();
    let d_lat = -k * lat.sin() * (sun_minus_lon.sin() - e * peri_minus_lon.sin());
    (d_lon, d_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_at_sun_longitude_lags() {
        let sun = SolarCoordinates::at(0.0);
        let (d_lon, d_lat) = annual_aberration(sun.true_longitude, 0.0, &sun);
        let peri = (sun.perihelion - sun.true_longitude).to_radians().cos();
        let expected = -ABERRATION_CONSTANT_ARCSEC * (1.0 - sun.eccentricity * peri);
        assert!((d_lon - expected).abs() < 1e-9, "Δλ = {d_lon}");
        assert_eq!(d_lat, 0.0);
    }

    #[test]
    fn bounded_in_the_ecliptic() {
        let sun = SolarCoordinates::at(0.24);
        for i in 0..36 {
            let lon = i as f64 * 10.0;
            let (d_lon, d_lat) = annual_aberration(lon, 0.0, &sun);
            assert!(d_lon.abs() <= 20.9, "Δλ = {d_lon} at λ = {lon}");
            assert!(d_lat.abs() < 1e-12);
        }
    }

    #[test]
    fn latitude_component_grows_with_latitude() {
        let sun = SolarCoordinates::at(0.0);
        let lon = sun.true_longitude - 90.0;
        let (_, low) = annual_aberration(lon, 10.0, &sun);
        let (_, high) = annual_aberration(lon, 60.0, &sun);
        assert!(high.abs() > low.abs(), "{low} vs {high}");
    }
}
