//! Angular coordinates with derived views.
//!
//! A [`Coordinate`] holds one angle and keeps its decimal-degree, radian and
//! degree/minute/second views consistent. The [`CoordinateKind`] selects the
//! normalisation applied on every construction or update:
//!
//! | kind | range |
//! |---|---|
//! | right ascension | [0, 360) degrees, i.e. [0, 24) hours |
//! | declination | [-90, 90] by pole folding |
//! | simple | [0, 360) |

use urania_math::{Dms, Hms, deg_to_dms, fold_90, hours_to_hms, reduce_360};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    RightAscension,
    Declination,
    Simple,
}

impl CoordinateKind {
    /// Map an arbitrary angle in degrees into this kind's range.
    pub fn normalize(self, deg: f64) -> f64 {
        match self {
            Self::RightAscension | Self::Simple => reduce_360(deg),
            Self::Declination => fold_90(deg),
        }
    }
}

/// A normalised angle with degree, radian and D/M/S views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    kind: CoordinateKind,
    degrees: f64,
    radians: f64,
    dms: Dms,
}

impl Coordinate {
    pub fn new(kind: CoordinateKind, deg: f64) -> Self {
        let mut c = Self {
            kind,
            degrees: 0.0,
            radians: 0.0,
            dms: deg_to_dms(0.0),
        };
        c.set_degrees(deg);
        c
    }

    pub fn right_ascension(deg: f64) -> Self {
        Self::new(CoordinateKind::RightAscension, deg)
    }

    pub fn declination(deg: f64) -> Self {
        Self::new(CoordinateKind::Declination, deg)
    }

    pub fn simple(deg: f64) -> Self {
        Self::new(CoordinateKind::Simple, deg)
    }

    /// Build from radians.
    pub fn from_radians(kind: CoordinateKind, rad: f64) -> Self {
        Self::new(kind, rad.to_degrees())
    }

    /// Replace the angle; every view is re-derived.
    pub fn set_degrees(&mut self, deg: f64) {
        let degrees = self.kind.normalize(deg);
        self.degrees = degrees;
        self.radians = degrees.to_radians();
        self.dms = deg_to_dms(degrees);
    }

    pub fn set_radians(&mut self, rad: f64) {
        self.set_degrees(rad.to_degrees());
    }

    pub fn kind(&self) -> CoordinateKind {
        self.kind
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn dms(&self) -> Dms {
        self.dms
    }

    /// The angle in decimal hours (degrees / 15).
    pub fn decimal_hours(&self) -> f64 {
        self.degrees / 15.0
    }

    /// Whole hours of [`Self::decimal_hours`].
    pub fn hour(&self) -> i32 {
        self.decimal_hours().trunc() as i32
    }

    /// Hours, minutes and seconds of time.
    pub fn hms(&self) -> Hms {
        hours_to_hms(self.decimal_hours())
    }

    /// Set the whole-hour part, keeping the fractional part of the degree value.
    pub fn set_hour(&mut self, hour: i32) {
        self.set_degrees(hour as f64 * 15.0 + self.degrees.fract());
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CoordinateKind::RightAscension => write!(f, "{}", self.hms()),
            CoordinateKind::Declination | CoordinateKind::Simple => write!(f, "{}", self.dms),
        }
    }
}

/// Equatorial position: right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaDec {
    ra: Coordinate,
    dec: Coordinate,
}

impl RaDec {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            ra: Coordinate::right_ascension(ra_deg),
            dec: Coordinate::declination(dec_deg),
        }
    }

    pub fn ra(&self) -> &Coordinate {
        &self.ra
    }

    pub fn dec(&self) -> &Coordinate {
        &self.dec
    }
}

impl std::fmt::Display for RaDec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RA {}  Dec {}", self.ra, self.dec)
    }
}
