//! Periodic-series evaluation.
//!
//! Two shapes of series appear in the solar-system theories:
//!
//! - **Argument series** (nutation, lunar longitude/latitude/distance):
//!   `Σ A(t) · trig(Σ mᵢ·aᵢ)`, where the `aᵢ` are fundamental arguments in
//!   degrees, `mᵢ` small integer multipliers, and `A(t) = A + A'·t`. Terms
//!   involving the Sun's mean anomaly may be scaled by the eccentricity
//!   factor `E` (multiplier ±1) or `E²` (multiplier ±2).
//! - **Polynomial of series** (VSOP87): six cosine series
//!   `Sₖ = Σ A·cos(B + C·t)` combined as `S₀ + S₁t + … + S₅t⁵`.
//!
//! Both sum terms strictly in the order given; reference outputs are only
//! reproducible to their published precision in that order.

/// Number of fundamental arguments a term may reference.
pub const ARGUMENT_COUNT: usize = 5;

/// Trigonometric function applied to each term's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrigForm {
    Sine,
    Cosine,
}

impl TrigForm {
    fn apply(self, rad: f64) -> f64 {
        match self {
            Self::Sine => rad.sin(),
            Self::Cosine => rad.cos(),
        }
    }
}

/// One row of an argument series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm {
    /// Multipliers of the fundamental arguments, in argument order.
    pub multipliers: [i8; ARGUMENT_COUNT],
    /// Amplitude at `t = 0`.
    pub amplitude: f64,
    /// Secular change of the amplitude per unit of `t`.
    pub drift: f64,
}

impl SeriesTerm {
    pub const fn new(multipliers: [i8; ARGUMENT_COUNT], amplitude: f64) -> Self {
        Self {
            multipliers,
            amplitude,
            drift: 0.0,
        }
    }

    pub const fn with_drift(multipliers: [i8; ARGUMENT_COUNT], amplitude: f64, drift: f64) -> Self {
        Self {
            multipliers,
            amplitude,
            drift,
        }
    }

    /// Build a term from a table row prefix of up to five multipliers.
    /// Missing trailing multipliers are zero.
    pub fn from_row(multipliers: &[i8], amplitude: f64, drift: f64) -> Self {
        let mut m = [0; ARGUMENT_COUNT];
        for (slot, value) in m.iter_mut().zip(multipliers) {
            *slot = *value;
        }
        Self::with_drift(m, amplitude, drift)
    }

    /// Combined argument `Σ mᵢ·aᵢ` in degrees.
    pub fn argument_deg(&self, args: &[f64; ARGUMENT_COUNT]) -> f64 {
        let mut arg = 0.0;
        for (m, a) in self.multipliers.iter().zip(args) {
            arg += f64::from(*m) * a;
        }
        arg
    }

    /// Amplitude including its secular drift.
    pub fn amplitude_at(&self, t: f64) -> f64 {
        self.amplitude + self.drift * t
    }
}

/// Eccentricity correction keyed on one argument's multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eccentricity {
    /// The factor `E`.
    pub factor: f64,
    /// Index of the argument whose multiplier selects the power of `E`.
    pub argument: usize,
}

impl Eccentricity {
    /// `E` when the multiplier is ±1, `E²` when ±2, otherwise 1.
    pub fn scale(&self, term: &SeriesTerm) -> f64 {
        match term.multipliers[self.argument].unsigned_abs() {
            1 => self.factor,
            2 => self.factor * self.factor,
            _ => 1.0,
        }
    }
}

/// Evaluate an argument series.
///
/// `args` are the fundamental arguments in degrees, `t` the time argument
/// used for amplitude drift.
pub fn sum_series<I>(
    terms: I,
    args: &[f64; ARGUMENT_COUNT],
    t: f64,
    form: TrigForm,
    eccentricity: Option<Eccentricity>,
) -> f64
where
    I: IntoIterator<Item = SeriesTerm>,
{
    let mut sum = 0.0;
    for term in terms {
        let mut amplitude = term.amplitude_at(t);
        if let Some(e) = eccentricity {
            amplitude *= e.scale(&term);
        }
        sum += amplitude * form.apply(term.argument_deg(args).to_radians());
    }
    sum
}

/// One VSOP87 term `A·cos(B + C·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VsopTerm {
    /// Amplitude `A` (AU or radians).
    pub amplitude: f64,
    /// Phase `B` in radians.
    pub phase: f64,
    /// Frequency `C` in radians per Julian millennium.
    pub rate: f64,
}

impl VsopTerm {
    pub const fn new(amplitude: f64, phase: f64, rate: f64) -> Self {
        Self {
            amplitude,
            phase,
            rate,
        }
    }
}

/// Sum `Σ A·cos(B + C·t)` over one VSOP87 series.
pub fn sum_cosine_series<I>(terms: I, t: f64) -> f64
where
    I: IntoIterator<Item = VsopTerm>,
{
    let mut sum = 0.0;
    for term in terms {
        sum += term.amplitude * (term.phase + term.rate * t).cos();
    }
    sum
}

/// Combine per-order series sums as `S₀ + S₁t + S₂t² + …`.
pub fn combine_orders(sums: &[f64], t: f64) -> f64 {
    let mut total = 0.0;
    let mut power = 1.0;
    for s in sums {
        total += s * power;
        power *= t;
    }
    total
}
