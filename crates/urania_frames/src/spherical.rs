//! Cartesian ⇄ spherical coordinate conversion.
//!
//! Distances keep whatever unit the Cartesian input used (AU for the
//! planetary theories).

use std::f64::consts::PI;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from the origin.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lon = y.atan2(x);
    let lat = (z / r).asin();

    SphericalCoords {
        lon_deg: if lon < 0.0 { lon + 2.0 * PI } else { lon }.to_degrees(),
        lat_deg: lat.to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance * cos_lat * cos_lon,
        s.distance * cos_lat * sin_lon,
        s.distance * sin_lat,
    ]
}

/// Cartesian vector from heliocentric longitude, latitude (radians) and radius.
pub fn lbr_to_cartesian(lon_rad: f64, lat_rad: f64, radius: f64) -> [f64; 3] {
    spherical_to_cartesian(&SphericalCoords {
        lon_deg: lon_rad.to_degrees(),
        lat_deg: lat_rad.to_degrees(),
        distance: radius,
    })
}
