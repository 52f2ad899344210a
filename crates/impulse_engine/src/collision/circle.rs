//! Closed-form circle-circle collision.

use crate::foundation::math::{Vec2, EPSILON};
use crate::geometry::Circle;

use super::manifold::Manifold;

/// Circle-circle test.
///
/// Touching circles (distance exactly equal to the radius sum) count
/// as colliding with zero depth. Coincident centers have no meaningful
/// normal; a fixed +x normal with full overlap depth is reported so the
/// solver can still separate the pair.
pub fn collide_circles(a: &Circle, b: &Circle) -> Option<Manifold> {
    let radius_sum = a.radius + b.radius;
    let between = b.center - a.center;
    let dist_sq = between.norm_squared();
    if dist_sq > radius_sum * radius_sum {
        return None;
    }

    let dist = dist_sq.sqrt();
    let (normal, depth) = if dist < EPSILON {
        (Vec2::new(1.0, 0.0), radius_sum)
    } else {
        (between / dist, radius_sum - dist)
    };

    // Midpoint of the two deepest points.
    let contact = a.center + normal * (a.radius - depth * 0.5);
    Some(Manifold::single(normal, depth, contact))
}
