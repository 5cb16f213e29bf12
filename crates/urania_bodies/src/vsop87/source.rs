//! Coefficient storage seam for the VSOP87 evaluator.

use std::collections::HashMap;

use urania_math::VsopTerm;

use super::{Axis, Planet};

/// Anything that can hand out VSOP87 series by planet, axis and order.
pub trait SeriesSource {
    /// Terms of the series multiplying `t^order`, or `None` if absent.
    fn series(&self, planet: Planet, axis: Axis, order: usize) -> Option<&[VsopTerm]>;
}

impl<S: SeriesSource + ?Sized> SeriesSource for &S {
    fn series(&self, planet: Planet, axis: Axis, order: usize) -> Option<&[VsopTerm]> {
        (**self).series(planet, axis, order)
    }
}

/// In-memory series keyed by `(planet, axis, order)`.
#[derive(Debug, Clone, Default)]
pub struct SeriesTable {
    series: HashMap<(Planet, Axis, usize), Vec<VsopTerm>>,
}

impl SeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a series, replacing any previous one for the same key.
    pub fn insert(&mut self, planet: Planet, axis: Axis, order: usize, terms: Vec<VsopTerm>) {
        self.series.insert((planet, axis, order), terms);
    }

    /// Move every series of `other` into `self`.
    pub fn merge(&mut self, other: SeriesTable) {
        self.series.extend(other.series);
    }

    /// Number of stored series (not terms).
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of terms across all series.
    pub fn term_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Whether any order of `axis` is stored for `planet`.
    pub fn has_axis(&self, planet: Planet, axis: Axis) -> bool {
        self.series.keys().any(|&(p, a, _)| p == planet && a == axis)
    }
}

impl SeriesSource for SeriesTable {
    fn series(&self, planet: Planet, axis: Axis, order: usize) -> Option<&[VsopTerm]> {
        self.series.get(&(planet, axis, order)).map(Vec::as_slice)
    }
}
