//! Connectivity of a sampling: which pairs of points are joined by a
//! line segment.  Segments are never stored, they are derived from the
//! [`Topology`] and the number of points.

/// Linear index of the grid node (`i`, `j`), `i` running along the
/// first parameter and `j` along the second one, in a grid whose rows
/// hold `v_steps + 1` nodes.
#[inline]
pub fn grid_index(i: usize, j: usize, v_steps: usize) -> usize {
    i * (v_steps + 1) + j
}

/// How the points of a [`Sampling`][crate::Sampling] are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Open path through consecutive points.  The last point is never
    /// joined back to the first one.
    Polyline,
    /// Wireframe of a `(u_steps + 1) × (v_steps + 1)` grid stored row
    /// by row (see [`grid_index`]).
    Grid { u_steps: usize, v_steps: usize },
}

impl Topology {
    /// Number of segments joining `len` points.
    pub fn segment_count(&self, len: usize) -> usize {
        match *self {
            Topology::Polyline => len.saturating_sub(1),
            Topology::Grid { u_steps, v_steps } =>
                u_steps.saturating_mul(v_steps).saturating_mul(2),
        }
    }

    /// Iterate on the segments joining `len` points, as pairs of
    /// point indices.
    ///
    /// For a grid, each cell (`i`, `j`) with `i < u_steps` and
    /// `j < v_steps` contributes the segment to its `v` neighbour
    /// followed by the segment to its `u` neighbour.
    pub fn segments(&self, len: usize) -> Segments {
        Segments { topology: *self,  k: 0,  count: self.segment_count(len) }
    }

    /// The continuous paths whose consecutive points are exactly the
    /// segments: the whole sampling for a polyline.  For a grid, the
    /// constant-`u` lines `i < u_steps` followed by the constant-`v`
    /// lines `j < v_steps`; a grid without cells gives one single-node
    /// path per point.
    pub(crate) fn paths(&self, len: usize) -> Vec<Path> {
        match *self {
            Topology::Polyline => {
                if len == 0 { vec![] }
                else { vec![Path { start: 0, stride: 1, len }] }
            }
            Topology::Grid { u_steps, v_steps } => {
                if u_steps == 0 || v_steps == 0 {
                    return (0 .. len).map(|k| Path { start: k, stride: 1,
                                                     len: 1 })
                        .collect()
                }
                let rows = (0 .. u_steps).map(|i| {
                    Path { start: grid_index(i, 0, v_steps),
                           stride: 1,  len: v_steps + 1 }
                });
                let columns = (0 .. v_steps).map(|j| {
                    Path { start: j,  stride: v_steps + 1,  len: u_steps + 1 }
                });
                rows.chain(columns).collect()
            }
        }
    }
}

/// Evenly strided run of point indices.  See [`Topology::paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Path {
    start: usize,
    stride: usize,
    len: usize,
}

impl Path {
    pub(crate) fn indices(self) -> impl Iterator<Item = usize> {
        (0 .. self.len).map(move |k| self.start + k * self.stride)
    }
}

/// Iterator on the segments of a sampling.
/// See [`Topology::segments`].
#[derive(Debug, Clone)]
pub struct Segments {
    topology: Topology,
    k: usize, // Index of the next segment.
    count: usize,
}

impl Iterator for Segments {
    type Item = [usize; 2];

    fn next(&mut self) -> Option<Self::Item> {
        if self.k >= self.count { return None }
        let k = self.k;
        self.k += 1;
        match self.topology {
            Topology::Polyline => Some([k, k + 1]),
            Topology::Grid { v_steps, .. } => {
                // `count > 0` ⟹ `v_steps > 0`.
                let cell = k / 2;
                let (i, j) = (cell / v_steps, cell % v_steps);
                let current = grid_index(i, j, v_steps);
                if k % 2 == 0 {
                    Some([current, current + 1])
                } else {
                    Some([current, grid_index(i + 1, j, v_steps)])
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.k;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Segments {}
