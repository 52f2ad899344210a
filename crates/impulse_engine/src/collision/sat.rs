//! Separating Axis Theorem tests for small polygons and circles.

use crate::foundation::math::{Vec2, EPSILON};
use crate::geometry::{Circle, Edge, Polygon};

use super::manifold::{clipped_face_contacts, Manifold};

/// Projection of a polygon onto an axis.
fn project(polygon: &Polygon, axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in polygon.vertices() {
        let d = v.dot(&axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Polygon-polygon SAT over every edge normal of both polygons.
///
/// Tracks the minimum-overlap axis; an equal overlap keeps the
/// first-seen axis, which is deterministic for a given input order.
/// Touching polygons (zero overlap) count as colliding.
pub fn polygon_polygon(a: &Polygon, b: &Polygon) -> Option<Manifold> {
    let mut min_overlap = f32::INFINITY;
    let mut min_axis = Vec2::new(1.0, 0.0);

    for axis in a.edge_normals().into_iter().chain(b.edge_normals()) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        let overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap < 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            min_axis = axis;
        }
    }

    // Orient the minimum translation axis from A toward B.
    let between = b.centroid() - a.centroid();
    let normal = if min_axis.dot(&between) < 0.0 {
        -min_axis
    } else {
        min_axis
    };

    clipped_face_contacts(a, b, normal, min_overlap)
}

/// Circle-polygon test via the nearest boundary point.
///
/// For a center outside the polygon the closest boundary point gives
/// the axis and depth directly; a center inside falls back to the
/// least-penetrated face. The manifold normal points from the circle
/// toward the polygon.
pub fn circle_polygon(circle: &Circle, polygon: &Polygon) -> Option<Manifold> {
    let verts = polygon.vertices();
    let n = verts.len();
    if n == 0 {
        return None;
    }

    if polygon.contains(circle.center) {
        // Deep case: push out along the face the center is least
        // behind.
        let normals = polygon.edge_normals();
        let mut best = 0;
        let mut best_separation = f32::NEG_INFINITY;
        for i in 0..n {
            let separation = normals[i].dot(&(circle.center - verts[i]));
            if separation > best_separation {
                best_separation = separation;
                best = i;
            }
        }
        let face_normal = normals[best];
        let depth = circle.radius - best_separation;
        let contact = circle.center - face_normal * best_separation;
        return Some(Manifold::single(-face_normal, depth, contact));
    }

    let mut closest = verts[0];
    let mut closest_dist_sq = f32::INFINITY;
    for i in 0..n {
        let edge = Edge::new(verts[i], verts[(i + 1) % n]);
        let p = edge.closest_point(circle.center);
        let d = (p - circle.center).norm_squared();
        if d < closest_dist_sq {
            closest_dist_sq = d;
            closest = p;
        }
    }

    let dist = closest_dist_sq.sqrt();
    if dist > circle.radius {
        return None;
    }
    let normal = if dist < EPSILON {
        // Center exactly on the boundary; aim at the interior.
        let inward = polygon.centroid() - circle.center;
        let len = inward.norm();
        if len < EPSILON {
            return None;
        }
        inward / len
    } else {
        (closest - circle.center) / dist
    };
    let depth = circle.radius - dist;
    let contact = (circle.center + normal * circle.radius + closest) * 0.5;
    Some(Manifold::single(normal, depth, contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn overlapping_unit_squares_match_worked_example() {
        let a = Polygon::rectangle(Vec2::zeros(), 1.0, 1.0);
        let b = Polygon::rectangle(Vec2::new(0.5, 0.0), 1.0, 1.0);
        let m = polygon_polygon(&a, &b).unwrap();
        assert_relative_eq!(m.depth, 0.5, epsilon = 1e-5);
        assert_relative_eq!(m.normal.x, 1.0, epsilon = 1e-5);
        assert_eq!(m.contacts().len(), 2);
        let mut ys: Vec<f32> = m.contacts().iter().map(|c| c.y).collect();
        ys.sort_by(f32::total_cmp);
        assert_relative_eq!(ys[0], -0.5, epsilon = 1e-5);
        assert_relative_eq!(ys[1], 0.5, epsilon = 1e-5);
    }

    #[test]
    fn separated_squares_have_a_separating_axis() {
        let a = Polygon::rectangle(Vec2::zeros(), 1.0, 1.0);
        let b = Polygon::rectangle(Vec2::new(1.5, 1.5), 1.0, 1.0);
        assert!(polygon_polygon(&a, &b).is_none());
    }

    #[test]
    fn touching_squares_collide_with_zero_depth() {
        let a = Polygon::rectangle(Vec2::zeros(), 1.0, 1.0);
        let b = Polygon::rectangle(Vec2::new(1.0, 0.0), 1.0, 1.0);
        let m = polygon_polygon(&a, &b).unwrap();
        assert_relative_eq!(m.depth, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn circle_resting_on_square_face() {
        let square = Polygon::rectangle(Vec2::zeros(), 2.0, 2.0);
        let circle = Circle::new(Vec2::new(0.0, 1.8), 1.0);
        let m = circle_polygon(&circle, &square).unwrap();
        assert_relative_eq!(m.normal.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(m.depth, 0.2, epsilon = 1e-5);
        assert_relative_eq!(m.contacts()[0].y, 0.9, epsilon = 1e-5);
    }

    #[test]
    fn circle_off_corner_uses_vertex_axis() {
        let square = Polygon::rectangle(Vec2::zeros(), 2.0, 2.0);
        let circle = Circle::new(Vec2::new(1.7, 1.7), 1.0);
        let m = circle_polygon(&circle, &square).unwrap();
        // Nearest feature is the (1, 1) corner.
        let expected = Vec2::new(-1.0, -1.0).normalize();
        assert_relative_eq!(m.normal.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(m.normal.y, expected.y, epsilon = 1e-4);
    }

    #[test]
    fn circle_center_inside_polygon_still_separates() {
        let square = Polygon::rectangle(Vec2::zeros(), 2.0, 2.0);
        let circle = Circle::new(Vec2::new(0.0, 0.9), 0.5);
        let m = circle_polygon(&circle, &square).unwrap();
        // Closest face is the top; push the circle up and out.
        assert_relative_eq!(m.normal.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(m.depth, 0.6, epsilon = 1e-5);
    }

    #[test]
    fn distant_circle_misses_polygon() {
        let square = Polygon::rectangle(Vec2::zeros(), 2.0, 2.0);
        let circle = Circle::new(Vec2::new(5.0, 0.0), 1.0);
        assert!(circle_polygon(&circle, &square).is_none());
    }
}
