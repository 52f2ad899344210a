//! Math utilities and types
//!
//! Provides fundamental 2D math types and the small set of planar
//! operations the collision and dynamics code is built on.

pub use nalgebra::{Matrix2, Unit, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2x2 matrix type
pub type Mat2 = Matrix2<f32>;

/// Float tolerance used across geometric tests.
pub const EPSILON: f32 = 1e-6;

/// 2D cross product (the z component of the 3D cross of the embedded vectors).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Left-hand perpendicular: rotates `v` by +90 degrees.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Vector triple product `(a x b) x c = b(a.c) - a(b.c)`, evaluated in 2D.
///
/// Used by GJK to derive a direction perpendicular to a simplex edge that
/// points toward the origin.
#[inline]
pub fn triple_product(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    b * a.dot(&c) - a * b.dot(&c)
}

/// Rotates `v` by `angle` radians counterclockwise.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Wraps an angle in radians to the range [-PI, PI].
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.sin().atan2(angle.cos())
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_relative_eq!(cross(Vec2::x(), Vec2::y()), 1.0);
        assert_relative_eq!(cross(Vec2::y(), Vec2::x()), -1.0);
        assert_relative_eq!(cross(Vec2::new(2.0, 3.0), Vec2::new(2.0, 3.0)), 0.0);
    }

    #[test]
    fn perp_is_ccw_rotation() {
        let p = perp(Vec2::x());
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 1.0);
        assert_relative_eq!(perp(Vec2::new(3.0, 4.0)).dot(&Vec2::new(3.0, 4.0)), 0.0);
    }

    #[test]
    fn triple_product_is_perpendicular_to_outer_operand() {
        let ab = Vec2::new(2.0, 1.0);
        let ao = Vec2::new(-1.0, 3.0);
        let d = triple_product(ab, ao, ab);
        // Perpendicular to ab, on the same side as ao.
        assert_relative_eq!(d.dot(&ab), 0.0, epsilon = 1e-4);
        assert!(d.dot(&ao) > 0.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = rotate(Vec2::x(), constants::HALF_PI);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        // Rounding can land on either sign of the boundary at odd
        // multiples of PI.
        assert_relative_eq!(wrap_angle(3.0 * constants::PI).abs(), constants::PI, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(constants::TAU), 0.0, epsilon = 1e-5);
        assert_relative_eq!(
            wrap_angle(constants::PI + 0.1),
            -constants::PI + 0.1,
            epsilon = 1e-5
        );
    }
}
