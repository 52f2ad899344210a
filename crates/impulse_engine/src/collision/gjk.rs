//! GJK intersection test on the Minkowski difference.

use crate::foundation::math::{perp, triple_product, Vec2, EPSILON};
use crate::geometry::Shape;

use super::simplex::{Simplex, GJK_MAX_ITERATIONS};

/// Support point of the Minkowski difference A − B in a direction.
pub(crate) fn support(a: &Shape, b: &Shape, direction: Vec2) -> Vec2 {
    a.support_point(direction) - b.support_point(-direction)
}

/// Tests two convex shapes for intersection.
///
/// Returns the final simplex enclosing the origin on success so EPA
/// can expand it into a penetration. Iteration exhaustion is reported
/// as no intersection.
pub(crate) fn intersect(a: &Shape, b: &Shape) -> Option<Simplex> {
    let mut direction = b.center() - a.center();
    if direction.norm_squared() < EPSILON {
        direction = Vec2::new(1.0, 0.0);
    }

    let mut simplex = Simplex::new();
    simplex.push(support(a, b, direction));
    direction = -simplex.points()[0];
    if direction.norm_squared() < EPSILON {
        // First support is the origin itself; the shapes touch.
        return Some(simplex);
    }

    for _ in 0..GJK_MAX_ITERATIONS {
        let point = support(a, b, direction);
        if point.dot(&direction) < 0.0 {
            // The difference never crosses the origin along this axis.
            return None;
        }
        simplex.push(point);
        if advance(&mut simplex, &mut direction) {
            return Some(simplex);
        }
    }
    None
}

/// Refines the simplex toward the origin. Returns true once the
/// simplex contains it.
fn advance(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    match simplex.len() {
        2 => {
            let a = simplex.points()[1];
            let b = simplex.points()[0];
            let ab = b - a;
            let ao = -a;
            let mut d = triple_product(ab, ao, ab);
            if d.norm_squared() < EPSILON {
                // Origin lies on the segment's line; any perpendicular
                // works.
                d = perp(ab);
            }
            *direction = d;
            false
        }
        _ => {
            let a = simplex.points()[2];
            let b = simplex.points()[1];
            let c = simplex.points()[0];
            let ab = b - a;
            let ac = c - a;
            let ao = -a;

            let ab_perp = triple_product(ac, ab, ab);
            if ab_perp.dot(&ao) > 0.0 {
                simplex.remove(0);
                *direction = ab_perp;
                return false;
            }
            let ac_perp = triple_product(ab, ac, ac);
            if ac_perp.dot(&ao) > 0.0 {
                simplex.remove(1);
                *direction = ac_perp;
                return false;
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::geometry::{Circle, Ellipse, Polygon};

    #[test]
    fn overlapping_ellipses_intersect() {
        let a = Shape::from(Ellipse::new(Vec2::zeros(), 2.0, 1.0, 0.0));
        let b = Shape::from(Ellipse::new(Vec2::new(2.5, 0.0), 2.0, 1.0, 0.3));
        assert!(intersect(&a, &b).is_some());
    }

    #[test]
    fn separated_ellipses_do_not_intersect() {
        let a = Shape::from(Ellipse::new(Vec2::zeros(), 2.0, 1.0, 0.0));
        let b = Shape::from(Ellipse::new(Vec2::new(5.0, 0.0), 2.0, 1.0, 0.0));
        assert!(intersect(&a, &b).is_none());
    }

    #[test]
    fn agrees_with_sat_on_square_pairs() {
        use crate::collision::sat;
        let cases = [
            (Vec2::new(0.5, 0.0), true),
            (Vec2::new(0.9, 0.9), true),
            (Vec2::new(1.5, 0.0), false),
            (Vec2::new(1.2, 1.2), false),
        ];
        let a = Polygon::rectangle(Vec2::zeros(), 1.0, 1.0);
        for (offset, expected) in cases {
            let b = Polygon::rectangle(offset, 1.0, 1.0);
            let sat_hit = sat::polygon_polygon(&a, &b).is_some();
            let gjk_hit =
                intersect(&Shape::from(a.clone()), &Shape::from(b.clone())).is_some();
            assert_eq!(sat_hit, expected, "SAT disagrees at offset {offset:?}");
            assert_eq!(gjk_hit, expected, "GJK disagrees at offset {offset:?}");
        }
    }

    #[test]
    fn concentric_shapes_intersect() {
        let a = Shape::from(Circle::new(Vec2::zeros(), 1.0));
        let b = Shape::from(Ellipse::new(Vec2::zeros(), 2.0, 0.5, 0.0));
        assert!(intersect(&a, &b).is_some());
    }
}
