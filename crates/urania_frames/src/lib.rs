//! Coordinates and frame conversions for the urania astronomy crates.
//!
//! Provides normalised angular coordinates (right ascension, declination,
//! plain angles), nutation and obliquity of the ecliptic, ecliptic ⇄
//! equatorial conversion, Cartesian ⇄ spherical conversion and observer
//! sites.

pub mod coordinate;
pub mod ecliptic;
pub mod nutation;
pub mod obliquity;
pub mod site;
pub mod spherical;

pub use coordinate::{Coordinate, CoordinateKind, RaDec};
pub use ecliptic::{ecliptic_to_equatorial, ecliptic_to_radec, equatorial_to_ecliptic};
pub use nutation::{Nutation, NutationTheory, fundamental_arguments, nutation_meeus};
pub use obliquity::{MEAN_OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use site::Site;
pub use spherical::{SphericalCoords, cartesian_to_spherical, lbr_to_cartesian, spherical_to_cartesian};
