//! Parameter records of the classic curves and surfaces and their
//! evaluation.  Every record has a [`Default`] holding the values the
//! interactive programs propose; missing fields of a parameter file
//! take these values too.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use serde::{Deserialize, Serialize};
use crate::Sampling;

/// Largest number of points a parameter record may ask for.  Records
/// above it are rejected by parameter files and get their default
/// sample counts back when read from the console.
pub const MAX_POINTS: usize = 10_000_000;

/// A curve or surface fully described by a record of numbers.
pub trait Shape: Sized {
    /// Name of the shape, also the section of the parameter file
    /// holding its parameters.
    const NAME: &'static str;

    /// Evaluate the shape at evenly spaced values of its parameter(s).
    ///
    /// # Panics
    /// If the number of points does not fit in a `usize` (see
    /// [`Shape::point_count`]).
    fn sample(&self) -> Sampling;

    /// Number of points [`Shape::sample`] produces, or `None` if it
    /// overflows.
    fn point_count(&self) -> Option<usize>;

    /// The same record with the sample counts set to their default.
    fn with_default_counts(self) -> Self;

    /// Whether the record asks for at most [`MAX_POINTS`] points.
    fn within_limit(&self) -> bool {
        matches!(self.point_count(), Some(n) if n <= MAX_POINTS)
    }

    /// Return the name of the first field that is not finite, if any.
    /// Samplers require finite bounds.
    fn non_finite_field(&self) -> Option<&'static str>;
}

macro_rules! first_non_finite {
    ($self: ident, $($field: ident),*) => {{
        $( if !$self.$field.is_finite() { return Some(stringify!($field)) } )*
        None
    }}
}

/// Graph of `sin` between two angles given in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SineWave {
    pub start_deg: f64,
    pub end_deg: f64,
    /// Number of points.
    pub n: usize,
}

impl Default for SineWave {
    fn default() -> Self {
        Self { start_deg: -360., end_deg: 360., n: 1000 }
    }
}

impl Shape for SineWave {
    const NAME: &'static str = "sine";

    /// x = θ, y = sin θ, z = 0.
    fn sample(&self) -> Sampling {
        Sampling::uniform(f64::sin, self.start_deg.to_radians(),
                          self.end_deg.to_radians())
            .n(self.n).build()
    }

    fn point_count(&self) -> Option<usize> { Some(self.n.max(1)) }

    fn with_default_counts(self) -> Self {
        Self { n: Self::default().n, ..self }
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        first_non_finite!(self, start_deg, end_deg)
    }
}

/// Three dimensional Lissajous curve
/// t ↦ (A sin(a t + δx), B sin(b t + δy), C sin(c t + δz)), t ∈ \[0, 2π\].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lissajous {
    pub amp_x: f64,
    pub amp_y: f64,
    pub amp_z: f64,
    pub freq_x: f64,
    pub freq_y: f64,
    pub freq_z: f64,
    pub phase_x: f64,
    pub phase_y: f64,
    pub phase_z: f64,
    pub n: usize,
}

impl Default for Lissajous {
    fn default() -> Self {
        Self { amp_x: 1.,  amp_y: 1.,  amp_z: 1.,
               freq_x: 3.,  freq_y: 2.,  freq_z: 5.,
               phase_x: 0.,  phase_y: FRAC_PI_2,  phase_z: FRAC_PI_2,
               n: 1000 }
    }
}

impl Shape for Lissajous {
    const NAME: &'static str = "lissajous";

    fn sample(&self) -> Sampling {
        let p = *self;
        Sampling::param(move |t| [p.amp_x * (p.freq_x * t + p.phase_x).sin(),
                                  p.amp_y * (p.freq_y * t + p.phase_y).sin(),
                                  p.amp_z * (p.freq_z * t + p.phase_z).sin()],
                        0., TAU)
            .n(self.n).build()
    }

    fn point_count(&self) -> Option<usize> { Some(self.n.max(1)) }

    fn with_default_counts(self) -> Self {
        Self { n: Self::default().n, ..self }
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        first_non_finite!(self, amp_x, amp_y, amp_z, freq_x, freq_y, freq_z,
                          phase_x, phase_y, phase_z)
    }
}

/// The trefoil knot
/// t ↦ (sin t + 2 sin 2t, cos t − 2 cos 2t, −sin 3t).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Trefoil {
    pub t_start: f64,
    pub t_end: f64,
    pub n: usize,
}

impl Default for Trefoil {
    fn default() -> Self {
        Self { t_start: 0., t_end: 2. * PI, n: 500 }
    }
}

/// Point of the trefoil knot at `t`.
pub fn trefoil(t: f64) -> [f64; 3] {
    [t.sin() + 2. * (2. * t).sin(),
     t.cos() - 2. * (2. * t).cos(),
     - (3. * t).sin()]
}

impl Shape for Trefoil {
    const NAME: &'static str = "trefoil";

    fn sample(&self) -> Sampling {
        Sampling::param(trefoil, self.t_start, self.t_end).n(self.n).build()
    }

    fn point_count(&self) -> Option<usize> { Some(self.n.max(1)) }

    fn with_default_counts(self) -> Self {
        Self { n: Self::default().n, ..self }
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        first_non_finite!(self, t_start, t_end)
    }
}

/// Hyperboloid of one sheet
/// (u, v) ↦ (a cosh u cos v, b cosh u sin v, c sinh u), sampled as a
/// wireframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hyperboloid {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub u_min: f64,
    pub u_max: f64,
    pub v_min: f64,
    pub v_max: f64,
    pub u_steps: usize,
    pub v_steps: usize,
}

impl Default for Hyperboloid {
    fn default() -> Self {
        Self { a: 1.,  b: 1.,  c: 1.,
               u_min: -2.,  u_max: 2.,
               v_min: 0.,  v_max: 2. * PI,
               u_steps: 50,  v_steps: 50 }
    }
}

impl Shape for Hyperboloid {
    const NAME: &'static str = "hyperboloid";

    fn sample(&self) -> Sampling {
        let Hyperboloid { a, b, c, .. } = *self;
        Sampling::grid(move |u, v| [a * u.cosh() * v.cos(),
                                    b * u.cosh() * v.sin(),
                                    c * u.sinh()],
                       (self.u_min, self.u_max), (self.v_min, self.v_max))
            .steps(self.u_steps, self.v_steps).build()
    }

    fn point_count(&self) -> Option<usize> {
        self.u_steps.checked_add(1)?.checked_mul(self.v_steps.checked_add(1)?)
    }

    fn with_default_counts(self) -> Self {
        let d = Self::default();
        Self { u_steps: d.u_steps,  v_steps: d.v_steps,  ..self }
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        first_non_finite!(self, a, b, c, u_min, u_max, v_min, v_max)
    }
}

/// Circular helix of radius `radius` rising by `pitch` at each turn.
/// The last point is the one just before completing the last turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Spiral {
    pub pitch: f64,
    pub radius: f64,
    pub turns: usize,
    pub points_per_turn: usize,
}

impl Default for Spiral {
    fn default() -> Self {
        Self { pitch: 1.,  radius: 5.,  turns: 5,  points_per_turn: 100 }
    }
}

impl Shape for Spiral {
    const NAME: &'static str = "spiral";

    fn sample(&self) -> Sampling {
        let Spiral { pitch, radius, turns, points_per_turn } = *self;
        let n = match turns.checked_mul(points_per_turn) {
            Some(n) => n,
            None => panic!("parametric_curves::Spiral: {} turns of {} \
                            points overflow", turns, points_per_turn),
        };
        // The parameter counts turns.
        Sampling::param(move |t| {
            let theta = TAU * t;
            [radius * theta.cos(), radius * theta.sin(), pitch * t]
        }, 0., turns as f64)
            .n(n).half_open().build()
    }

    fn point_count(&self) -> Option<usize> {
        Some(self.turns.checked_mul(self.points_per_turn)?.max(1))
    }

    fn with_default_counts(self) -> Self {
        let d = Self::default();
        Self { turns: d.turns,  points_per_turn: d.points_per_turn,  ..self }
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        first_non_finite!(self, pitch, radius)
    }
}
