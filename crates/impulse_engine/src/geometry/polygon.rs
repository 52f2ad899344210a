//! Convex polygon shape.

use crate::foundation::math::{cross, rotate, Vec2, EPSILON};

use super::aabb::{Aabb, BoundingCircle};

/// A convex polygon with vertices stored in counter-clockwise order.
///
/// Construction runs a gift-wrapping pass, so arbitrary point sets are
/// accepted: interior and duplicate points are dropped and the winding
/// is normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Builds the convex hull of the given points.
    ///
    /// Fewer than three points, or a fully collinear set, cannot form a
    /// hull; such input is stored unmodified. The resulting polygon is
    /// degenerate (see [`Polygon::is_degenerate`]) and the collision
    /// pipeline treats it as non-collidable; anything else the caller
    /// does with it is the caller's responsibility.
    pub fn new(points: &[Vec2]) -> Self {
        match convex_hull(points) {
            Some(vertices) => Self { vertices },
            None => Self {
                vertices: points.to_vec(),
            },
        }
    }

    /// Axis-aligned rectangle centered at `center`.
    pub fn rectangle(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width * 0.5, height * 0.5);
        Self::new(&[
            Vec2::new(center.x - half.x, center.y - half.y),
            Vec2::new(center.x + half.x, center.y - half.y),
            Vec2::new(center.x + half.x, center.y + half.y),
            Vec2::new(center.x - half.x, center.y + half.y),
        ])
    }

    /// Triangle from three points.
    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::new(&[a, b, c])
    }

    /// True when the stored vertices enclose no area (fewer than three
    /// points or a collinear set).
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.area() <= EPSILON
    }

    /// Vertices in counter-clockwise order.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Enclosed area via the shoelace formula.
    pub fn area(&self) -> f32 {
        let mut sum = 0.0;
        for (i, &v) in self.vertices.iter().enumerate() {
            let next = self.vertices[(i + 1) % self.vertices.len()];
            sum += cross(v, next);
        }
        sum * 0.5
    }

    /// Area-weighted centroid.
    pub fn centroid(&self) -> Vec2 {
        if self.vertices.is_empty() {
            return Vec2::zeros();
        }
        let mut centroid = Vec2::zeros();
        let mut area_sum = 0.0;
        for (i, &v) in self.vertices.iter().enumerate() {
            let next = self.vertices[(i + 1) % self.vertices.len()];
            let a = cross(v, next);
            area_sum += a;
            centroid += (v + next) * a;
        }
        if area_sum.abs() < EPSILON {
            return self.vertices.iter().sum::<Vec2>() / self.vertices.len() as f32;
        }
        centroid / (3.0 * area_sum)
    }

    /// Outward unit normal of each edge, ordered with the vertices.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        let n = self.vertices.len();
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let edge = self.vertices[(i + 1) % n] - self.vertices[i];
            let len = edge.norm().max(EPSILON);
            // CCW winding puts the outward normal on the right of the edge.
            normals.push(Vec2::new(edge.y / len, -edge.x / len));
        }
        normals
    }

    /// Vertex farthest in the given direction; the origin for an empty
    /// vertex set.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        let Some(&first) = self.vertices.first() else {
            return Vec2::zeros();
        };
        let mut best = first;
        let mut best_dot = best.dot(&direction);
        for &v in &self.vertices[1..] {
            let d = v.dot(&direction);
            if d > best_dot {
                best_dot = d;
                best = v;
            }
        }
        best
    }

    /// Tests whether a point lies inside the polygon (boundary inclusive).
    /// Degenerate polygons contain nothing.
    pub fn contains(&self, point: Vec2) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let n = self.vertices.len();
        for i in 0..n {
            let edge = self.vertices[(i + 1) % n] - self.vertices[i];
            if cross(edge, point - self.vertices[i]) < -EPSILON {
                return false;
            }
        }
        true
    }

    /// Moment of inertia about the centroid for the given mass.
    pub fn angular_mass(&self, mass: f32) -> f32 {
        // Sum triangle contributions about the origin, then shift to the
        // centroid with the parallel axis theorem.
        let mut numer = 0.0;
        let mut denom = 0.0;
        for (i, &v) in self.vertices.iter().enumerate() {
            let next = self.vertices[(i + 1) % self.vertices.len()];
            let a = cross(v, next);
            numer += a * (v.dot(&v) + v.dot(&next) + next.dot(&next));
            denom += a;
        }
        if denom.abs() < EPSILON {
            return 0.0;
        }
        let inertia_about_origin = mass * numer / (6.0 * denom);
        let c = self.centroid();
        inertia_about_origin - mass * c.norm_squared()
    }

    /// Translated copy.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v + offset).collect(),
        }
    }

    /// Copy rotated about an arbitrary pivot.
    pub fn rotated_about(&self, angle: f32, pivot: Vec2) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| pivot + rotate(v - pivot, angle))
                .collect(),
        }
    }

    /// Copy scaled about the centroid.
    pub fn scaled(&self, factor: f32) -> Self {
        let c = self.centroid();
        Self {
            vertices: self.vertices.iter().map(|v| c + (v - c) * factor).collect(),
        }
    }

    /// Tight bounding box; collapses to a point at the origin for an
    /// empty vertex set.
    pub fn bounding_box(&self) -> Aabb {
        let Some(&first) = self.vertices.first() else {
            return Aabb::new(Vec2::zeros(), Vec2::zeros());
        };
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Aabb::new(min, max)
    }

    /// Circle around the centroid reaching the farthest vertex.
    pub fn bounding_circle(&self) -> BoundingCircle {
        let c = self.centroid();
        let radius = self
            .vertices
            .iter()
            .map(|v| (v - c).norm())
            .fold(0.0_f32, f32::max);
        BoundingCircle::new(c, radius)
    }
}

/// Gift-wrapping convex hull producing counter-clockwise winding.
fn convex_hull(points: &[Vec2]) -> Option<Vec<Vec2>> {
    if points.len() < 3 {
        return None;
    }

    // Start from the lexicographically smallest point, which is always
    // on the hull.
    let start = points
        .iter()
        .copied()
        .reduce(|a, b| {
            if (b.x, b.y) < (a.x, a.y) {
                b
            } else {
                a
            }
        })?;

    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);
        if hull.len() > points.len() {
            return None;
        }
        let mut next = points[0];
        for &p in points {
            if p == current {
                continue;
            }
            if next == current {
                next = p;
                continue;
            }
            let turn = cross(next - current, p - current);
            // Keep the most clockwise candidate; on collinear ties keep
            // the farther one so interior points are skipped.
            if turn < -EPSILON
                || (turn.abs() <= EPSILON
                    && (p - current).norm_squared() > (next - current).norm_squared())
            {
                next = p;
            }
        }
        if next == start {
            break;
        }
        current = next;
    }

    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}
