//! Stack-allocated simplex and expanding polytope storage.

use crate::foundation::math::Vec2;

/// Iteration cap for the GJK simplex search.
pub const GJK_MAX_ITERATIONS: usize = 20;
/// Iteration cap for EPA polytope expansion.
pub const EPA_MAX_ITERATIONS: usize = 40;

/// At most three points of the Minkowski difference; the newest point
/// is always the last one pushed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Simplex {
    points: [Vec2; 3],
    len: usize,
}

impl Simplex {
    pub(crate) fn new() -> Self {
        Self {
            points: [Vec2::zeros(); 3],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, point: Vec2) {
        debug_assert!(self.len < 3);
        self.points[self.len] = point;
        self.len += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    /// Drops the point at `index`, preserving the order of the rest.
    pub(crate) fn remove(&mut self, index: usize) {
        debug_assert!(index < self.len);
        for i in index..self.len - 1 {
            self.points[i] = self.points[i + 1];
        }
        self.len -= 1;
    }
}

/// Fixed-capacity polytope for EPA. Starts from the final GJK simplex
/// and grows by at most one vertex per iteration, so the capacity is
/// exact.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Polytope {
    points: [Vec2; 3 + EPA_MAX_ITERATIONS],
    len: usize,
}

impl Polytope {
    pub(crate) fn from_simplex(simplex: &Simplex) -> Self {
        let mut points = [Vec2::zeros(); 3 + EPA_MAX_ITERATIONS];
        points[..simplex.len()].copy_from_slice(simplex.points());
        Self {
            points,
            len: simplex.len(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    /// Inserts a vertex between positions `index` and `index + 1`,
    /// keeping the boundary ordered.
    pub(crate) fn insert_after(&mut self, index: usize, point: Vec2) {
        debug_assert!(self.len < self.points.len());
        let at = index + 1;
        for i in (at..self.len).rev() {
            self.points[i + 1] = self.points[i];
        }
        self.points[at] = point;
        self.len += 1;
    }
}
