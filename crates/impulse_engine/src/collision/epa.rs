//! Expanding Polytope Algorithm for penetration depth.

use crate::foundation::math::{Vec2, EPSILON};
use crate::geometry::Shape;

use super::gjk::support;
use super::simplex::{Polytope, Simplex, EPA_MAX_ITERATIONS};

/// Penetration direction and depth on the Minkowski difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Penetration {
    pub normal: Vec2,
    pub depth: f32,
}

/// Edge of the polytope closest to the origin.
struct ClosestEdge {
    index: usize,
    normal: Vec2,
    distance: f32,
}

fn closest_edge(polytope: &Polytope) -> Option<ClosestEdge> {
    let points = polytope.points();
    let n = points.len();
    let mut best: Option<ClosestEdge> = None;
    for i in 0..n {
        let v1 = points[i];
        let v2 = points[(i + 1) % n];
        let edge = v2 - v1;
        let len = edge.norm();
        if len < EPSILON {
            continue;
        }
        // Perpendicular oriented away from the origin.
        let mut normal = Vec2::new(edge.y, -edge.x) / len;
        if normal.dot(&v1) < 0.0 {
            normal = -normal;
        }
        let distance = normal.dot(&v1);
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(ClosestEdge {
                index: i,
                normal,
                distance,
            });
        }
    }
    best
}

/// Expands a GJK simplex that encloses the origin into a penetration
/// normal and depth.
///
/// The returned depth carries a `+ EPSILON` margin so a positional
/// correction by the full depth strictly separates the shapes.
/// Exhausting the iteration cap without converging yields `None`.
pub(crate) fn penetration(a: &Shape, b: &Shape, simplex: &Simplex) -> Option<Penetration> {
    if simplex.len() < 3 {
        // Touching contact found during GJK warm-up; zero depth, the
        // manifold builder orients the normal.
        return Some(Penetration {
            normal: Vec2::new(1.0, 0.0),
            depth: 0.0,
        });
    }

    let mut polytope = Polytope::from_simplex(simplex);
    for _ in 0..EPA_MAX_ITERATIONS {
        let edge = closest_edge(&polytope)?;
        let point = support(a, b, edge.normal);
        let extent = point.dot(&edge.normal);
        if extent - edge.distance < EPSILON {
            return Some(Penetration {
                normal: edge.normal,
                depth: edge.distance + EPSILON,
            });
        }
        polytope.insert_after(edge.index, point);
    }
    None
}
