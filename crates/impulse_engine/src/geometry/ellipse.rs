//! Axis-pair ellipse shape.

use crate::foundation::math::{rotate, Vec2, EPSILON};

use super::aabb::{Aabb, BoundingCircle};

/// An ellipse with semi-axes `a` (local x) and `b` (local y), rotated by
/// `rotation` radians about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center position in world space.
    pub center: Vec2,
    /// Semi-axis along the local x direction.
    pub a: f32,
    /// Semi-axis along the local y direction.
    pub b: f32,
    /// Orientation in radians.
    pub rotation: f32,
}

impl Ellipse {
    /// Creates a new ellipse.
    pub fn new(center: Vec2, a: f32, b: f32, rotation: f32) -> Self {
        Self {
            center,
            a,
            b,
            rotation,
        }
    }

    /// Area of the ellipse.
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.a * self.b
    }

    /// Farthest point on the boundary in the given direction.
    ///
    /// Works in the local frame where the support of the unit direction
    /// `(dx, dy)` is `(a²dx, b²dy) / sqrt((a·dx)² + (b·dy)²)`.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        if direction.norm_squared() < EPSILON {
            return self.center + rotate(Vec2::new(self.a, 0.0), self.rotation);
        }
        let local = rotate(direction, -self.rotation);
        let denom = ((self.a * local.x).powi(2) + (self.b * local.y).powi(2)).sqrt();
        if denom < EPSILON {
            return self.center + rotate(Vec2::new(self.a, 0.0), self.rotation);
        }
        let support_local = Vec2::new(
            self.a * self.a * local.x / denom,
            self.b * self.b * local.y / denom,
        );
        self.center + rotate(support_local, self.rotation)
    }

    /// Tests whether a point lies inside the ellipse (boundary inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let local = rotate(point - self.center, -self.rotation);
        let (a, b) = (self.a.max(EPSILON), self.b.max(EPSILON));
        (local.x / a).powi(2) + (local.y / b).powi(2) <= 1.0 + EPSILON
    }

    /// Moment of inertia about the center for the given mass.
    pub fn angular_mass(&self, mass: f32) -> f32 {
        0.25 * mass * (self.a * self.a + self.b * self.b)
    }

    /// Tight axis-aligned bounding box of the rotated ellipse.
    pub fn bounding_box(&self) -> Aabb {
        let (sin, cos) = self.rotation.sin_cos();
        let half_w = ((self.a * cos).powi(2) + (self.b * sin).powi(2)).sqrt();
        let half_h = ((self.a * sin).powi(2) + (self.b * cos).powi(2)).sqrt();
        let half = Vec2::new(half_w, half_h);
        Aabb::new(self.center - half, self.center + half)
    }

    /// Bounding circle with radius equal to the major semi-axis.
    pub fn bounding_circle(&self) -> BoundingCircle {
        BoundingCircle::new(self.center, self.a.max(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn support_point_on_axes() {
        let e = Ellipse::new(Vec2::zeros(), 2.0, 1.0, 0.0);
        let s = e.support_point(Vec2::new(1.0, 0.0));
        assert_relative_eq!(s.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(s.y, 0.0, epsilon = 1e-5);
        let s = e.support_point(Vec2::new(0.0, -1.0));
        assert_relative_eq!(s.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn support_point_respects_rotation() {
        let e = Ellipse::new(Vec2::zeros(), 2.0, 1.0, std::f32::consts::FRAC_PI_2);
        // Major axis now lies along y.
        let s = e.support_point(Vec2::new(0.0, 1.0));
        assert_relative_eq!(s.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn contains_boundary_and_interior() {
        let e = Ellipse::new(Vec2::new(1.0, 0.0), 2.0, 1.0, 0.0);
        assert!(e.contains(Vec2::new(3.0, 0.0)));
        assert!(e.contains(Vec2::new(1.0, 0.5)));
        assert!(!e.contains(Vec2::new(3.0, 1.0)));
    }

    #[test]
    fn bounding_box_of_rotated_ellipse() {
        let e = Ellipse::new(Vec2::zeros(), 2.0, 1.0, std::f32::consts::FRAC_PI_2);
        let bb = e.bounding_box();
        assert_relative_eq!(bb.max.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bb.max.y, 2.0, epsilon = 1e-5);
    }
}
