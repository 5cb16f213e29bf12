//! Solar-system bodies for the urania astronomy crates.
//!
//! - The Moon from the abridged ELP-2000/82 series of Meeus ch. 47
//! - Planets from VSOP87 series supplied by a [`SeriesSource`]
//! - Low-precision Sun and annual aberration
//! - Apparent geocentric planet positions

pub mod aberration;
pub mod apparent;
pub mod error;
pub mod moon;
mod moon_tables;
pub mod sun;
pub mod vsop87;

pub use aberration::{ABERRATION_CONSTANT_ARCSEC, annual_aberration};
pub use apparent::{ApparentPosition, LIGHT_TIME_DAYS_PER_AU};
pub use error::BodyError;
pub use moon::{LunarElements, LunarPosition, LunarTheory, mean_ascending_node_deg, mean_perigee_deg};
pub use sun::SolarCoordinates;
pub use vsop87::{
    Axis, MAX_ORDER, Planet, Rectangular, SeriesSource, SeriesTable, Spherical, Vsop87,
    VsopConfig, VsopVariant, evaluate_axis,
};
