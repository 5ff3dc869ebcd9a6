//! Uniform sampling of parametric curves and surfaces.
//!
//! A [`Sampling`] is the ordered list of 3D points obtained by
//! evaluating a function at evenly spaced values of its parameter(s),
//! together with the [`Topology`] saying which points are joined by a
//! line segment.  Samplings can be written in a form suitable for
//! Gnuplot, PGF/TikZ or any viewer reading JSON polydata.
//!
//! The [`shapes`] module provides the classic curves (sine wave,
//! Lissajous curve, trefoil knot, spiral) and the hyperboloid
//! wireframe; [`input`] and [`config`] read their parameters.

use std::{fmt::{self, Display, Formatter},
          io::{self, Write}};
use rgb::*;
use serde::Serialize;

pub mod config;
pub mod input;
pub mod layers;
pub mod shapes;
mod topology;

pub use topology::{grid_index, Segments, Topology};

/// A box \[`xmin`, `xmax`\] × \[`ymin`, `ymax`\] × \[`zmin`, `zmax`\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl BoundingBox {
    /// Return `true` if the bounding box contains no point at all.
    /// A flat box (e.g. the one of a plane curve) is not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        // NAN ⟹ empty
        !(self.xmin <= self.xmax && self.ymin <= self.ymax
          && self.zmin <= self.zmax)
    }

    /// Return `true` if the point `p` belongs to `self` (possibly on
    /// the boundary).
    #[inline]
    pub fn contains(&self, [x, y, z]: [f64; 3]) -> bool {
        self.xmin <= x && x <= self.xmax
            && self.ymin <= y && y <= self.ymax
            && self.zmin <= z && z <= self.zmax
    }
}


////////////////////////////////////////////////////////////////////////
//
// Sampling datastructure

/// A sampling of a curve or a surface: points in the order of the
/// parameter traversal and the way they are connected.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    points: Vec<[f64; 3]>,
    topology: Topology,
}

impl Sampling {
    /// Return `true` if the sampling has no point.
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Number of points of the sampling.
    pub fn len(&self) -> usize { self.points.len() }

    /// The points, in the order the parameter was traversed.
    pub fn points(&self) -> &[[f64; 3]] { &self.points }

    pub fn topology(&self) -> Topology { self.topology }

    /// Iterate on the points of the sampling.
    pub fn iter(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.points.iter().copied()
    }

    /// Iterate on the segments of the sampling as pairs of indices in
    /// [`Sampling::points`].
    pub fn segments(&self) -> Segments {
        self.topology.segments(self.points.len())
    }

    /// Number of segments, without iterating on them.
    pub fn segment_count(&self) -> usize {
        self.topology.segment_count(self.points.len())
    }

    /// Iterate on the continuous paths making up the sampling: the
    /// whole list of points for a curve.  For a grid, the constant-`u`
    /// lines then the constant-`v` lines, each running only along
    /// cells, so that the segments walked by the paths are exactly
    /// [`Sampling::segments`].
    pub fn paths(&self)
                 -> impl Iterator<Item = impl Iterator<Item = [f64; 3]> + '_>
                 + '_ {
        self.topology.paths(self.points.len()).into_iter()
            .map(move |p| p.indices().map(move |i| self.points[i]))
    }

    /// Return the smallest box enclosing all the points of the
    /// sampling `self`.  If the sampling is empty, the "min" fields of
    /// the bounding box are set to +∞ and "max" fields to -∞.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox {
            xmin: f64::INFINITY,  xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,  ymax: f64::NEG_INFINITY,
            zmin: f64::INFINITY,  zmax: f64::NEG_INFINITY };
        for [x, y, z] in self.iter() {
            if x < bb.xmin { bb.xmin = x }
            if bb.xmax < x { bb.xmax = x }
            if y < bb.ymin { bb.ymin = y }
            if bb.ymax < y { bb.ymax = y }
            if z < bb.zmin { bb.zmin = z }
            if bb.zmax < z { bb.zmax = z }
        }
        bb
    }
}

impl<T> From<T> for Sampling
where T: IntoIterator<Item = [f64; 3]> {
    /// Return a polyline through the given points, in order.
    fn from(points: T) -> Self {
        Sampling { points: points.into_iter().collect(),
                   topology: Topology::Polyline }
    }
}

/// `n` evenly spaced values starting at `a`.  The last one is `b`
/// unless `half_open` is set, in which case the step is `(b - a) / n`.
/// If the step would be a division by zero (`n ≤ 1` for a closed
/// range, `n = 0` for a half-open one), the single value `a` is
/// returned.
fn linspace(a: f64, b: f64, n: usize, half_open: bool)
            -> impl Iterator<Item = f64> {
    let div = if half_open { n } else { n.saturating_sub(1) };
    let (n, dt) = if div == 0 { (1, 0.) }
                  else { (n, (b - a) / div as f64) };
    (0 .. n).map(move |i| a + i as f64 * dt)
}

#[inline]
fn check_finite(fun: &str, name: &str, x: f64) {
    if !x.is_finite() {
        panic!("parametric_curves::{}: {} = {} must be finite", fun, name, x);
    }
}

////////////////////////////////////////////////////////////////////////
//
// Defining a sampling with standard options & checks

/// Define a structure with standard fields, standard options, and a
/// function to generate it.
macro_rules! new_sampling_fn {
    // Function to init the struct.
    ($(#[$docfn: meta])*, $(#[$docfn_extra: meta])* $fun: ident -> $ft: ty,
     // The structure to hold the options (and other fields).
     $(#[$doc: meta])* $struct: ident
    ) => {
        impl Sampling {
            $(#[$docfn])*
            ///
            /// Panics if `a` or `b` is not finite.
            ///
            $(#[$docfn_extra])*
            #[must_use]
            pub fn $fun<F>(f: F, a: f64, b: f64) -> $struct<F>
            where F: FnMut(f64) -> $ft {
                check_finite(stringify!($fun), "a", a);
                check_finite(stringify!($fun), "b", b);
                $struct { f, a, b,  // Order of `a`, `b` reflect orientation
                          n: 100,
                          half_open: false }
            }
        }

        $(#[$doc])*
        pub struct $struct<F> {
            f: F,  a: f64,  b: f64,
            n: usize,
            half_open: bool,
        }

        impl<F> $struct<F> {
            /// Set the number of evaluations of the function.  Default:
            /// 100.  With `n ≤ 1` the sampling is reduced to the single
            /// point at `a`.
            pub fn n(mut self, n: usize) -> Self {
                self.n = n;
                self
            }

            /// Do not evaluate the function at `b`: the interval
            /// \[`a`, `b`\[ is cut into `n` equal parts and the function
            /// is evaluated at the start of each.  This is the natural
            /// choice for periodic functions.
            pub fn half_open(mut self) -> Self {
                self.half_open = true;
                self
            }

            /// The values of the parameter at which to evaluate.
            fn ts(&self) -> impl Iterator<Item = f64> {
                linspace(self.a, self.b, self.n, self.half_open)
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////
//
// Uniform sampling

new_sampling_fn!(
    /// Create a sampling for the graph of `f` on the interval
    /// \[`a`, `b`\] with evenly spaced values of the argument.  The
    /// graph lies in the plane `z = 0`.
    ,
    /// # Example
    ///
    /// ```
    /// use std::fs::File;
    /// use parametric_curves::Sampling;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let s = Sampling::uniform(|x| x.sin(), 0., 4.).build();
    /// s.write(&mut File::create("target/uniform.dat")?)?;
    /// # Ok(()) }
    /// ```
    uniform -> f64,
    /// Uniform sampling options.  See [`Sampling::uniform`].
    Uniform);

impl<F> Uniform<F>
where F: FnMut(f64) -> f64 {
    /// Return the sampling.
    pub fn build(&mut self) -> Sampling {
        let ts: Vec<f64> = self.ts().collect();
        let f = &mut self.f;
        Sampling { points: ts.into_iter().map(|t| [t, f(t), 0.]).collect(),
                   topology: Topology::Polyline }
    }
}

new_sampling_fn!(
    /// Create a sampling of the *image* of `f` on the interval
    /// \[`a`, `b`\] by evaluating `f` at evenly spaced values.
    ,
    /// # Example
    ///
    /// ```
    /// use std::{f64::consts::TAU, fs::File};
    /// use parametric_curves::Sampling;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let s = Sampling::param(|t| [t.cos(), t.sin(), t], 0., TAU)
    ///     .n(200).build();
    /// s.write(&mut File::create("target/param.dat")?)?;
    /// # Ok(()) }
    /// ```
    param -> [f64; 3],
    /// Options for sampling a function ℝ → ℝ³.  See [`Sampling::param`].
    Param);

impl<F> Param<F>
where F: FnMut(f64) -> [f64; 3] {
    /// Return the sampling.
    pub fn build(&mut self) -> Sampling {
        let ts: Vec<f64> = self.ts().collect();
        Sampling { points: ts.into_iter().map(&mut self.f).collect(),
                   topology: Topology::Polyline }
    }
}

////////////////////////////////////////////////////////////////////////
//
// Grid sampling

impl Sampling {
    /// Create a wireframe sampling of the image of `f` on the
    /// rectangle `u` × `v` where `u = (umin, umax)` and
    /// `v = (vmin, vmax)`.  The points are stored row by row, `v`
    /// varying fastest (see [`grid_index`]).
    ///
    /// Panics if one of the bounds is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use parametric_curves::Sampling;
    /// let s = Sampling::grid(|u, v| [u, v, u * v], (0., 1.), (0., 1.))
    ///     .steps(4, 3).build();
    /// assert_eq!(s.len(), 5 * 4);
    /// assert_eq!(s.segment_count(), 2 * 4 * 3);
    /// ```
    #[must_use]
    pub fn grid<F>(f: F, u: (f64, f64), v: (f64, f64)) -> Grid<F>
    where F: FnMut(f64, f64) -> [f64; 3] {
        check_finite("grid", "umin", u.0);
        check_finite("grid", "umax", u.1);
        check_finite("grid", "vmin", v.0);
        check_finite("grid", "vmax", v.1);
        Grid { f, u, v, u_steps: 50, v_steps: 50 }
    }
}

/// Options for sampling a function ℝ² → ℝ³ on a rectangle.
/// See [`Sampling::grid`].
pub struct Grid<F> {
    f: F,
    u: (f64, f64),
    v: (f64, f64),
    u_steps: usize,
    v_steps: usize,
}

impl<F> Grid<F>
where F: FnMut(f64, f64) -> [f64; 3] {
    /// Set the number of intervals in each direction.  Default: 50 ×
    /// 50.  A direction with 0 steps is reduced to its minimum value.
    pub fn steps(mut self, u_steps: usize, v_steps: usize) -> Self {
        self.u_steps = u_steps;
        self.v_steps = v_steps;
        self
    }

    /// Return the sampling.
    ///
    /// # Panics
    /// If the number of nodes `(u_steps + 1) × (v_steps + 1)` does not
    /// fit in a `usize`.
    pub fn build(&mut self) -> Sampling {
        let nodes = self.u_steps.checked_add(1)
            .zip(self.v_steps.checked_add(1))
            .and_then(|(u, v)| u.checked_mul(v));
        if nodes.is_none() {
            panic!("parametric_curves::Sampling::grid: {} × {} steps \
                    overflow the number of nodes", self.u_steps, self.v_steps)
        }
        let us: Vec<f64> =
            linspace(self.u.0, self.u.1, self.u_steps + 1, false).collect();
        let vs: Vec<f64> =
            linspace(self.v.0, self.v.1, self.v_steps + 1, false).collect();
        let mut points = Vec::with_capacity(us.len() * vs.len());
        for &u in &us {
            for &v in &vs {
                points.push((self.f)(u, v));
            }
        }
        Sampling { points,
                   topology: Topology::Grid { u_steps: self.u_steps,
                                              v_steps: self.v_steps } }
    }
}

////////////////////////////////////////////////////////////////////////
//
// Output

/// LaTeX output of the projection of the sampling on the `xy` plane.
///
/// # Example
///
/// ```
/// use std::fs::File;
/// use parametric_curves::Sampling;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let s = Sampling::from([[0., 0., 0.], [1., 1., 0.]]);
/// s.latex().write(&mut File::create("target/sampling.tex")?)?;
/// # Ok(()) }
/// ```
pub struct LaTeX<'a> {
    sampling: &'a Sampling,
    n: usize,
    color: Option<RGB8>,
}

impl<'a> LaTeX<'a> {
    #[inline]
    fn new(s: &'a Sampling) -> Self {
        Self { sampling: s,  n: 20_000,  color: None }
    }

    /// Set the maximum number of points of a PGF path to `n`.  If it
    /// contains more than `n` points, the sampling curve is drawn as
    /// several PGF paths.  Default: 20_000.
    pub fn n(&mut self, n: usize) -> &mut Self {
        self.n = n;
        self
    }

    /// Set the color of the curve to `color`.  If not specified the
    /// active LaTeX color will be used.
    pub fn color(&mut self, color: RGB8) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Write each path of the sampling as a PGF path.
    fn write_with_lines(&self, f: &mut impl Write) -> Result<(), io::Error> {
        for path in self.sampling.paths() {
            let mut n = 0;
            for (i, [x, y, _]) in path.enumerate() {
                n += 1;
                if i == 0 {
                    write!(f, "\\pgfpathmoveto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n", x, y)?
                } else if n >= self.n {
                    write!(f, "\\pgfpathlineto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n\
                               \\pgfusepath{{stroke}}\n\
                               \\pgfpathmoveto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n", x, y, x, y)?;
                    n = 0;
                } else {
                    write!(f, "\\pgfpathlineto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n", x, y)?
                }
            }
            write!(f, "\\pgfusepath{{stroke}}\n")?;
        }
        Ok(())
    }

    /// Write the sampling to the formatter as PGF/TikZ commands.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        write!(f, "% Written by the Rust parametric_curves crate.\n")?;
        write!(f, "\\begin{{pgfscope}}\n")?;
        if let Some(RGB8 {r, g, b}) = self.color {
            write!(f, "\\definecolor{{RustCurveColor}}{{RGB}}\
                       {{{},{},{}}}\n\
                       \\pgfsetstrokecolor{{RustCurveColor}}\n",
                   r, g, b)?;
        }
        self.write_with_lines(f)?;
        write!(f, "\\end{{pgfscope}}\n")
    }
}

/// Points and segments, the way polydata viewers expect them.
#[derive(Serialize)]
struct Polydata<'a> {
    points: &'a [[f64; 3]],
    lines: Vec<[usize; 2]>,
}

/// # Output
impl Sampling {
    /// Write the sampling `self` using PGF/TikZ commands.
    pub fn latex(&self) -> LaTeX<'_> { LaTeX::new(self) }

    /// Write the sampling to `f` in a tabular form: each point is
    /// written as "x y z" on a single line (in scientific notation).
    /// The paths of a grid (see [`Sampling::paths`]) are separated by
    /// two blank lines: Gnuplot draws each one as its own block and
    /// adds no mesh line of its own.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        for (i, path) in self.paths().enumerate() {
            if i > 0 { write!(f, "\n\n")? }
            for [x, y, z] in path {
                write!(f, "{:e} {:e} {:e}\n", x, y, z)?
            }
        }
        Ok(())
    }

    /// Write the sampling to `f` as a JSON object with a `points`
    /// array of `[x, y, z]` and a `lines` array of index pairs.
    pub fn write_json(&self, f: &mut impl Write) -> Result<(), io::Error> {
        let data = Polydata { points: &self.points,
                              lines: self.segments().collect() };
        serde_json::to_writer(&mut *f, &data)?;
        write!(f, "\n")
    }
}

impl Display for Sampling {
    /// Display the sampling in a tabular form.
    /// See [`Sampling::write`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for (i, path) in self.paths().enumerate() {
            if i > 0 { write!(f, "\n\n")? }
            for [x, y, z] in path {
                write!(f, "{:e} {:e} {:e}\n", x, y, z)?
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
//
// Tests

#[cfg(test)]
mod tests {
    use crate::{Sampling, Topology};

    fn xs(s: &Sampling) -> Vec<f64> {
        s.iter().map(|p| p[0]).collect()
    }

    #[test]
    fn uniform1() {
        let s = Sampling::uniform(|x| 2. * x, 0., 4.).n(3).build();
        assert_eq!(s.points(), &[[0., 0., 0.], [2., 4., 0.], [4., 8., 0.]]);
        assert_eq!(s.segments().collect::<Vec<_>>(), vec![[0, 1], [1, 2]]);
    }

    #[test]
    fn uniform_reversed() {
        let s = Sampling::uniform(|x| x, 1., -1.).n(3).build();
        assert_eq!(xs(&s), vec![1., 0., -1.]);
    }

    #[test]
    fn degenerate_n() {
        for n in [0, 1] {
            let s = Sampling::param(|t| [t, 2. * t, 3.], 1.5, 7.).n(n).build();
            assert_eq!(s.points(), &[[1.5, 3., 3.]]);
            assert_eq!(s.segment_count(), 0);
            assert_eq!(s.segments().count(), 0);
        }
    }

    #[test]
    fn zero_width_range() {
        let s = Sampling::uniform(|x| x, 2., 2.).n(5).build();
        assert_eq!(xs(&s), vec![2.; 5]);
        assert_eq!(s.segment_count(), 4);
    }

    #[test]
    fn half_open() {
        let s = Sampling::param(|t| [t, 0., 0.], 0., 1.).n(4).half_open()
            .build();
        assert_eq!(xs(&s), vec![0., 0.25, 0.5, 0.75]);
        let s = Sampling::param(|t| [t, 0., 0.], 0., 1.).n(0).half_open()
            .build();
        assert_eq!(xs(&s), vec![0.]);
    }

    #[test]
    #[should_panic]
    fn non_finite_bound() {
        let _ = Sampling::uniform(|x| x, 0., f64::INFINITY);
    }

    #[test]
    fn grid() {
        let s = Sampling::grid(|u, v| [u, v, 0.], (0., 2.), (0., 1.))
            .steps(2, 1).build();
        assert_eq!(s.points(), &[[0., 0., 0.], [0., 1., 0.],
                                 [1., 0., 0.], [1., 1., 0.],
                                 [2., 0., 0.], [2., 1., 0.]]);
        assert_eq!(s.topology(), Topology::Grid { u_steps: 2, v_steps: 1 });
        assert_eq!(s.segment_count(), 4);
        // Two constant-u lines and one constant-v line.
        assert_eq!(s.paths().count(), 3);
    }

    #[test]
    fn grid_zero_steps() {
        let s = Sampling::grid(|u, v| [u, v, 0.], (-1., 1.), (3., 4.))
            .steps(0, 0).build();
        assert_eq!(s.points(), &[[-1., 3., 0.]]);
        assert_eq!(s.segment_count(), 0);
    }

    #[test]
    #[should_panic]
    fn grid_steps_overflow() {
        let _ = Sampling::grid(|u, v| [u, v, 0.], (0., 1.), (0., 1.))
            .steps(usize::MAX, 1).build();
    }

    #[test]
    fn bounding_box() {
        let s = Sampling::from([[0., -1., 2.], [3., 1., -2.], [1., 0., 0.]]);
        let bb = s.bounding_box();
        assert_eq!((bb.xmin, bb.xmax), (0., 3.));
        assert_eq!((bb.ymin, bb.ymax), (-1., 1.));
        assert_eq!((bb.zmin, bb.zmax), (-2., 2.));
        assert!(bb.contains([1., 0., 0.]));
        assert!(!bb.contains([1., 0., 3.]));
        assert!(Sampling::from(Vec::<[f64; 3]>::new()).bounding_box().is_empty());
    }

    #[test]
    fn write_grid_paths() {
        let s = Sampling::grid(|u, v| [u, v, 0.], (0., 1.), (0., 1.))
            .steps(1, 1).build();
        let mut out = vec![];
        s.write(&mut out).unwrap();
        // Segments [0, 1] then [0, 2]; nothing joins (1, 0) to (1, 1).
        let table = "0e0 0e0 0e0\n0e0 1e0 0e0\n\n\n0e0 0e0 0e0\n1e0 0e0 0e0\n";
        assert_eq!(String::from_utf8(out).unwrap(), table);
        assert_eq!(s.to_string(), table);
    }

    /// Segments drawn by PGF `moveto`/`lineto` commands, as pairs of
    /// xy points.
    fn latex_segments(tex: &str) -> Vec<[[f64; 2]; 2]> {
        let xy = |line: &str| -> [f64; 2] {
            let inner = line.split("\\pgfpointxy{").nth(1).unwrap();
            let mut coords = inner.split(['{', '}'])
                .filter(|c| !c.is_empty())
                .map(|c| c.parse::<f64>().unwrap());
            [coords.next().unwrap(), coords.next().unwrap()]
        };
        let mut segs = vec![];
        let mut last = None;
        for line in tex.lines() {
            if line.starts_with("\\pgfpathmoveto") {
                last = Some(xy(line));
            } else if line.starts_with("\\pgfpathlineto") {
                let p = xy(line);
                segs.push([last.unwrap(), p]);
                last = Some(p);
            }
        }
        segs
    }

    fn assert_latex_matches_segments(s: &Sampling) {
        let mut out = vec![];
        s.latex().write(&mut out).unwrap();
        let drawn = latex_segments(&String::from_utf8(out).unwrap());
        let xy = |i: usize| [s.points()[i][0], s.points()[i][1]];
        let expected: Vec<_> =
            s.segments().map(|[a, b]| [xy(a), xy(b)]).collect();
        assert_eq!(drawn.len(), expected.len());
        for seg in &expected {
            assert!(drawn.contains(seg), "segment {:?} not drawn", seg);
        }
    }

    #[test]
    fn latex_grid_follows_segments() {
        let s = Sampling::grid(|u, v| [u, v, 0.], (0., 1.), (0., 1.))
            .steps(1, 1).build();
        let mut out = vec![];
        s.latex().write(&mut out).unwrap();
        let drawn = latex_segments(&String::from_utf8(out).unwrap());
        assert_eq!(drawn, vec![[[0., 0.], [0., 1.]], [[0., 0.], [1., 0.]]]);
        assert!(!drawn.contains(&[[1., 0.], [1., 1.]]));

        assert_latex_matches_segments(
            &Sampling::grid(|u, v| [u, v, 0.], (0., 2.), (0., 3.))
                .steps(2, 3).build());
        assert_latex_matches_segments(
            &Sampling::uniform(|x| x * x, 0., 1.).n(5).build());
    }

    #[test]
    fn write_json() {
        let s = Sampling::from([[0., 0., 0.], [1., 2., 3.]]);
        let mut out = vec![];
        s.write_json(&mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["points"][1][2], 3.);
        assert_eq!(v["lines"], serde_json::json!([[0, 1]]));
    }

    #[test]
    fn latex_color() {
        let s = Sampling::from([[0., 0., 0.], [1., 1., 5.]]);
        let mut out = vec![];
        s.latex().color(rgb::RGB8 { r: 255, g: 0, b: 10 })
            .write(&mut out).unwrap();
        let tex = String::from_utf8(out).unwrap();
        assert!(tex.contains("{RGB}{255,0,10}"));
        assert_eq!(tex.matches("\\pgfpathmoveto").count(), 1);
        assert_eq!(tex.matches("\\pgfpathlineto").count(), 1);
    }

    #[test]
    fn latex_split_paths() {
        let s = Sampling::uniform(|x| x, 0., 1.).n(10).build();
        let mut out = vec![];
        s.latex().n(4).write(&mut out).unwrap();
        let tex = String::from_utf8(out).unwrap();
        assert!(tex.matches("\\pgfpathmoveto").count() > 1);
    }
}
