//! Numeric building blocks shared by the urania crates.
//!
//! - Angle reductions ([0,360), [0,24), [0,2π)) and pole folding
//! - Degree/minute/second and hour/minute/second decomposition
//! - Periodic-series evaluation for argument series and VSOP87 series

pub mod angle;
pub mod series;

pub use angle::{
    Dms, Hms, deg_to_dms, dms_to_deg, fold_90, fold_half_pi, hours_to_hms, reduce_24, reduce_2pi,
    reduce_360,
};
pub use series::{
    ARGUMENT_COUNT, Eccentricity, SeriesTerm, TrigForm, VsopTerm, combine_orders,
    sum_cosine_series, sum_series,
};
