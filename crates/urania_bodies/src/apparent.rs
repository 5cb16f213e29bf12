//! Apparent geocentric place of a planet from VSOP87 spherical series.
//!
//! Follows Meeus ch. 33: heliocentric positions of planet and Earth are
//! differenced, the planet is moved back by one light-time step, then
//! annual aberration and nutation in longitude are applied and the result
//! is rotated to the equator with the true obliquity. The light-time step
//! is applied exactly once.

use urania_frames::{
    Nutation, NutationTheory, RaDec, cartesian_to_spherical, ecliptic_to_radec, lbr_to_cartesian,
};
use urania_math::{fold_90, reduce_360};
use urania_time::JulianDate;

use crate::aberration::annual_aberration;
use crate::error::BodyError;
use crate::sun::SolarCoordinates;
use crate::vsop87::{Planet, SeriesSource, Spherical, Vsop87};

/// Light travel time per AU, in days.
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Geocentric place of a planet. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    pub planet: Planet,
    /// Ecliptic longitude after light-time, before aberration and nutation.
    pub geometric_longitude: f64,
    pub geometric_latitude: f64,
    /// Apparent ecliptic longitude λ.
    pub longitude: f64,
    /// Apparent ecliptic latitude β.
    pub latitude: f64,
    /// Geocentric distance Δ in AU, after light-time.
    pub distance_au: f64,
    /// τ, light-time in days.
    pub light_time_days: f64,
    pub radec: RaDec,
    pub nutation: Nutation,
}

/// Geocentric ecliptic rectangular vector from two heliocentric positions.
fn geocentric(planet: &Spherical, earth: &Spherical) -> [f64; 3] {
    let p = lbr_to_cartesian(planet.longitude, planet.latitude, planet.radius);
    let e = lbr_to_cartesian(earth.longitude, earth.latitude, earth.radius);
    [p[0] - e[0], p[1] - e[1], p[2] - e[2]]
}

impl<S: SeriesSource> Vsop87<S> {
    /// Apparent place of `planet`, with nutation from the default theory.
    pub fn apparent(&self, planet: Planet, date: &JulianDate) -> Result<ApparentPosition, BodyError> {
        self.apparent_with(planet, date, NutationTheory::default())
    }

    pub fn apparent_with(
        &self,
        planet: Planet,
        date: &JulianDate,
        theory: NutationTheory,
    ) -> Result<ApparentPosition, BodyError> {
        if planet == Planet::Earth {
            return Err(BodyError::InvalidConfig(
                "the Earth has no geocentric position",
            ));
        }
        let earth = self.spherical(Planet::Earth, date)?;
        let first = geocentric(&self.spherical(planet, date)?, &earth);
        let light_time_days = LIGHT_TIME_DAYS_PER_AU * cartesian_to_spherical(&first).distance;

        let retarded = date.offset_days(-light_time_days)?;
        let seen = cartesian_to_spherical(&geocentric(&self.spherical(planet, &retarded)?, &earth));
        let geometric_longitude = seen.lon_deg;
        let geometric_latitude = seen.lat_deg;
        let distance_au = seen.distance;

        let t = date.centuries_since_j2000();
        let sun = SolarCoordinates::at(t);
        let (d_lon, d_lat) = annual_aberration(geometric_longitude, geometric_latitude, &sun);
        let nutation = theory.compute(date);

        let longitude =
            reduce_360(geometric_longitude + (d_lon + nutation.longitude_arcsec) / 3600.0);
        let latitude = fold_90(geometric_latitude + d_lat / 3600.0);
        let radec = ecliptic_to_radec(longitude, latitude, nutation.true_obliquity_deg);

        log::trace!(
            "{planet} at JD {}: tau = {light_time_days:.6} d, lambda = {longitude:.6}, beta = {latitude:.6}",
            date.jd()
        );

        Ok(ApparentPosition {
            planet,
            geometric_longitude,
            geometric_latitude,
            longitude,
            latitude,
            distance_au,
            light_time_days,
            radec,
            nutation,
        })
    }
}
