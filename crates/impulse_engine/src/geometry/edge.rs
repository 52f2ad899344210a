//! One-sided edge (line segment) shape.

use crate::foundation::math::{cross, rotate, Vec2, EPSILON};

use super::aabb::{Aabb, BoundingCircle};

/// A line segment from `start` to `end`.
///
/// Edges are infinitely thin; containment means lying on the segment
/// within tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint in world space.
    pub start: Vec2,
    /// Second endpoint in world space.
    pub end: Vec2,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Edges enclose no area.
    pub fn area(&self) -> f32 {
        0.0
    }

    /// Midpoint of the segment.
    pub fn center(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Whichever endpoint extends farthest in the given direction.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        if self.start.dot(&direction) >= self.end.dot(&direction) {
            self.start
        } else {
            self.end
        }
    }

    /// Tests whether a point lies on the segment within tolerance.
    pub fn contains(&self, point: Vec2) -> bool {
        let ab = self.end - self.start;
        let ap = point - self.start;
        if cross(ab, ap).abs() > EPSILON * (1.0 + ab.norm()) {
            return false;
        }
        let t = ap.dot(&ab);
        t >= -EPSILON && t <= ab.norm_squared() + EPSILON
    }

    /// Point on the segment closest to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let ab = self.end - self.start;
        let len_sq = ab.norm_squared();
        if len_sq < EPSILON {
            return self.start;
        }
        let t = ((point - self.start).dot(&ab) / len_sq).clamp(0.0, 1.0);
        self.start + ab * t
    }

    /// Moment of inertia of a thin rod about its midpoint.
    pub fn angular_mass(&self, mass: f32) -> f32 {
        mass * (self.end - self.start).norm_squared() / 12.0
    }

    /// Translated copy.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Copy rotated about an arbitrary pivot.
    pub fn rotated_about(&self, angle: f32, pivot: Vec2) -> Self {
        Self::new(
            pivot + rotate(self.start - pivot, angle),
            pivot + rotate(self.end - pivot, angle),
        )
    }

    /// Tight bounding box.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.start, self.end)
    }

    /// Circle through both endpoints centered on the midpoint.
    pub fn bounding_circle(&self) -> BoundingCircle {
        BoundingCircle::new(self.center(), self.length() * 0.5)
    }
}
