//! Circle shape.

use crate::foundation::math::{Vec2, EPSILON};

use super::aabb::{Aabb, BoundingCircle};

/// A circle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center position in world space.
    pub center: Vec2,
    /// Radius of the circle.
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Area of the circle.
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Farthest point on the boundary in the given direction.
    ///
    /// A zero direction yields the rightmost point rather than panicking.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        let len_sq = direction.norm_squared();
        if len_sq < EPSILON {
            return self.center + Vec2::new(self.radius, 0.0);
        }
        self.center + direction * (self.radius / len_sq.sqrt())
    }

    /// Tests whether a point lies inside the circle (boundary inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius + EPSILON
    }

    /// Moment of inertia about the center for the given mass.
    pub fn angular_mass(&self, mass: f32) -> f32 {
        0.5 * mass * self.radius * self.radius
    }

    /// Tight bounding box.
    pub fn bounding_box(&self) -> Aabb {
        let r = Vec2::new(self.radius, self.radius);
        Aabb::new(self.center - r, self.center + r)
    }

    /// The circle is its own bounding circle.
    pub fn bounding_circle(&self) -> BoundingCircle {
        BoundingCircle::new(self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn support_point_follows_direction() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 3.0);
        let s = c.support_point(Vec2::new(0.0, 10.0));
        assert_relative_eq!(s.x, 1.0);
        assert_relative_eq!(s.y, 5.0);
        // Zero direction falls back to +x.
        let s = c.support_point(Vec2::zeros());
        assert_relative_eq!(s.x, 4.0);
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let c = Circle::new(Vec2::zeros(), 1.0);
        assert!(c.contains(Vec2::new(1.0, 0.0)));
        assert!(c.contains(Vec2::new(0.5, 0.5)));
        assert!(!c.contains(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn angular_mass_matches_disk_formula() {
        let c = Circle::new(Vec2::zeros(), 2.0);
        assert_relative_eq!(c.angular_mass(10.0), 20.0);
    }
}
