//! VSOP87 planetary theory over injected coefficient series.
//!
//! Each coordinate is a polynomial of series in `t`, Julian millennia from
//! J2000.0: `S₀ + S₁t + … + S₅t⁵`, where every `Sₖ = Σ A·cos(B + C·t)`.
//! VSOP87A series give heliocentric rectangular X, Y, Z (AU, ecliptic and
//! equinox J2000); VSOP87B series give heliocentric longitude and latitude
//! (radians) and radius vector (AU).
//!
//! The theory never touches storage itself. Coefficients come from a
//! [`SeriesSource`]; [`SeriesTable`] is the in-memory implementation and
//! [`loader`] fills one from `.data` files.

pub mod loader;
pub mod source;

use urania_math::{combine_orders, fold_half_pi, reduce_2pi, sum_cosine_series};
use urania_time::JulianDate;

use crate::error::BodyError;

pub use loader::{VsopConfig, parse_series};
pub use source::{SeriesSource, SeriesTable};

/// Highest power of `t` in any VSOP87 coordinate.
pub const MAX_ORDER: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const fn all() -> [Self; 8] {
        [
            Self::Mercury,
            Self::Venus,
            Self::Earth,
            Self::Mars,
            Self::Jupiter,
            Self::Saturn,
            Self::Uranus,
            Self::Neptune,
        ]
    }

    /// Lowercase name, also the data directory name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Planet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown planet: {s}"))
    }
}

/// Which family of VSOP87 series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VsopVariant {
    /// VSOP87A, heliocentric rectangular.
    Rectangular,
    /// VSOP87B, heliocentric spherical.
    #[default]
    Spherical,
}

impl VsopVariant {
    /// Directory name under the data root.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Rectangular => "vsop87a",
            Self::Spherical => "vsop87b",
        }
    }

    pub const fn axes(self) -> [Axis; 3] {
        match self {
            Self::Rectangular => [Axis::X, Axis::Y, Axis::Z],
            Self::Spherical => [Axis::L, Axis::B, Axis::R],
        }
    }
}

/// One coordinate of a VSOP87 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
    L,
    B,
    R,
}

impl Axis {
    /// Letter used in series file names.
    pub const fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::L => 'l',
            Self::B => 'b',
            Self::R => 'r',
        }
    }

    pub const fn variant(self) -> VsopVariant {
        match self {
            Self::X | Self::Y | Self::Z => VsopVariant::Rectangular,
            Self::L | Self::B | Self::R => VsopVariant::Spherical,
        }
    }
}

/// Heliocentric rectangular position in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangular {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Heliocentric spherical position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Longitude in radians, [0, 2π).
    pub longitude: f64,
    /// Latitude in radians, [-π/2, π/2].
    pub latitude: f64,
    /// Radius vector in AU.
    pub radius: f64,
}

/// Julian millennia from J2000.0, the time argument of VSOP87.
pub fn vsop_time(date: &JulianDate) -> f64 {
    date.millennia_since_j2000()
}

/// Evaluate one coordinate at `t` Julian millennia.
///
/// An absent order contributes nothing; if every order is absent the
/// coordinate cannot be formed and `MissingSeries` is returned.
pub fn evaluate_axis<S>(source: &S, planet: Planet, axis: Axis, t: f64) -> Result<f64, BodyError>
where
    S: SeriesSource + ?Sized,
{
    let mut sums = [0.0; MAX_ORDER + 1];
    let mut found = false;
    for (order, sum) in sums.iter_mut().enumerate() {
        if let Some(terms) = source.series(planet, axis, order) {
            *sum = sum_cosine_series(terms.iter().copied(), t);
            found = true;
        }
    }
    if !found {
        return Err(BodyError::MissingSeries {
            planet: planet.name(),
            axis: axis.letter(),
        });
    }
    Ok(combine_orders(&sums, t))
}

/// VSOP87 evaluated over a coefficient source.
#[derive(Debug, Clone)]
pub struct Vsop87<S> {
    source: S,
}

impl<S: SeriesSource> Vsop87<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Heliocentric X, Y, Z from VSOP87A series.
    pub fn rectangular(&self, planet: Planet, date: &JulianDate) -> Result<Rectangular, BodyError> {
        self.rectangular_at(planet, vsop_time(date))
    }

    pub fn rectangular_at(&self, planet: Planet, t: f64) -> Result<Rectangular, BodyError> {
        Ok(Rectangular {
            x: evaluate_axis(&self.source, planet, Axis::X, t)?,
            y: evaluate_axis(&self.source, planet, Axis::Y, t)?,
            z: evaluate_axis(&self.source, planet, Axis::Z, t)?,
        })
    }

    /// Heliocentric L, B, R from VSOP87B series, normalised.
    pub fn spherical(&self, planet: Planet, date: &JulianDate) -> Result<Spherical, BodyError> {
        self.spherical_at(planet, vsop_time(date))
    }

    pub fn spherical_at(&self, planet: Planet, t: f64) -> Result<Spherical, BodyError> {
        let l = evaluate_axis(&self.source, planet, Axis::L, t)?;
        let b = evaluate_axis(&self.source, planet, Axis::B, t)?;
        let r = evaluate_axis(&self.source, planet, Axis::R, t)?;
        Ok(Spherical {
            longitude: reduce_2pi(l),
            latitude: fold_half_pi(b),
            radius: r,
        })
    }
}
