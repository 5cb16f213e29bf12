//! Observer location on the reference ellipsoid (Meeus ch. 11).

/// Equatorial radius in km.
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Polar radius in km.
pub const POLAR_RADIUS_KM: f64 = 6356.755;

/// A named observing site with its geocentric quantities precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_m: f64,
    geocentric_latitude_deg: f64,
    rho_sin_phi: f64,
    rho_cos_phi: f64,
}

impl Site {
    /// `latitude_deg` is geographic (north positive), `altitude_m` above sea level.
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        let ratio = POLAR_RADIUS_KM / EQUATORIAL_RADIUS_KM;
        let phi = latitude_deg.to_radians();

        // tan is singular at the poles
        let geocentric_latitude_deg = if latitude_deg == 0.0 || latitude_deg.abs() == 90.0 {
            latitude_deg
        } else {
            (ratio * ratio * phi.tan()).atan().to_degrees()
        };

        let u = (ratio * phi.tan()).atan();
        let height = altitude_m / (EQUATORIAL_RADIUS_KM * 1000.0);
        let rho_sin_phi = ratio * u.sin() + height * phi.sin();
        let rho_cos_phi = u.cos() + height * phi.cos();

        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            altitude_m,
            geocentric_latitude_deg,
            rho_sin_phi,
            rho_cos_phi,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    /// φ′, the angle at the Earth's centre.
    pub fn geocentric_latitude_deg(&self) -> f64 {
        self.geocentric_latitude_deg
    }

    /// ρ sin φ′ in units of the equatorial radius.
    pub fn rho_sin_phi(&self) -> f64 {
        self.rho_sin_phi
    }

    /// ρ cos φ′ in units of the equatorial radius.
    pub fn rho_cos_phi(&self) -> f64 {
        self.rho_cos_phi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palomar() {
        let site = Site::new("Palomar", 33.356_111, -116.863_333, 1706.0);
        assert_eq!(site.name(), "Palomar");
        assert!(
            (site.geocentric_latitude_deg() - 33.179_596_109_904_54).abs() < 1e-9,
            "φ′ = {}",
            site.geocentric_latitude_deg()
        );
        assert!((site.rho_sin_phi() - 0.546_861).abs() < 1e-6, "ρ sin φ′ = {}", site.rho_sin_phi());
        assert!((site.rho_cos_phi() - 0.836_339).abs() < 1e-6, "ρ cos φ′ = {}", site.rho_cos_phi());
    }

    #[test]
    fn equator_and_poles_keep_latitude() {
        for lat in [0.0, 90.0, -90.0] {
            let site = Site::new("edge", lat, 0.0, 0.0);
            assert_eq!(site.geocentric_latitude_deg(), lat);
        }
        let equator = Site::new("equator", 0.0, 0.0, 0.0);
        assert!((equator.rho_cos_phi() - 1.0).abs() < 1e-12);
        assert!(equator.rho_sin_phi().abs() < 1e-12);
    }

    #[test]
    fn geocentric_latitude_is_smaller() {
        let site = Site::new("mid", 45.0, 10.0, 0.0);
        let diff = site.latitude_deg() - site.geocentric_latitude_deg();
        assert!(diff > 0.19 && diff < 0.20, "φ − φ′ = {diff}");
    }
}
