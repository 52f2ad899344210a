//! Contact manifolds and reference/incident edge clipping.

use crate::foundation::math::{Vec2, EPSILON};
use crate::geometry::{Polygon, Shape};

/// Contact information for one colliding pair.
///
/// The normal is a unit vector pointing from shape A toward shape B;
/// the depth is the overlap along it. A manifold always carries at
/// least one contact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    /// Unit collision normal from A toward B.
    pub normal: Vec2,
    /// Penetration depth along the normal.
    pub depth: f32,
    contacts: [Vec2; 2],
    contact_count: usize,
}

impl Manifold {
    /// Single-contact manifold.
    pub fn single(normal: Vec2, depth: f32, contact: Vec2) -> Self {
        Self {
            normal,
            depth,
            contacts: [contact, Vec2::zeros()],
            contact_count: 1,
        }
    }

    /// Two-contact manifold.
    pub fn pair(normal: Vec2, depth: f32, first: Vec2, second: Vec2) -> Self {
        Self {
            normal,
            depth,
            contacts: [first, second],
            contact_count: 2,
        }
    }

    /// Contact points in world space.
    pub fn contacts(&self) -> &[Vec2] {
        &self.contacts[..self.contact_count]
    }

    /// Same contacts with the normal pointing the other way, for when
    /// the caller's A/B order is swapped relative to the detector's.
    pub fn flipped(mut self) -> Self {
        self.normal = -self.normal;
        self
    }
}

/// The polygon edge most anti-parallel to a search direction, with the
/// farthest vertex along that direction.
#[derive(Debug, Clone, Copy)]
struct Feature {
    v1: Vec2,
    v2: Vec2,
    farthest: Vec2,
}

/// Picks the edge incident to the farthest vertex that is most
/// perpendicular to `direction`, keeping winding order.
fn best_edge(polygon: &Polygon, direction: Vec2) -> Feature {
    let verts = polygon.vertices();
    let n = verts.len();
    let mut index = 0;
    let mut best_dot = verts[0].dot(&direction);
    for (i, v) in verts.iter().enumerate().skip(1) {
        let d = v.dot(&direction);
        if d > best_dot {
            best_dot = d;
            index = i;
        }
    }

    let v = verts[index];
    let prev = verts[(index + n - 1) % n];
    let next = verts[(index + 1) % n];
    // Compare the two adjacent edges; the one whose direction is more
    // perpendicular to the search direction is the contact edge.
    let toward_prev = (v - prev).normalize();
    let toward_next = (v - next).normalize();
    if toward_prev.dot(&direction).abs() <= toward_next.dot(&direction).abs() {
        Feature {
            v1: prev,
            v2: v,
            farthest: v,
        }
    } else {
        Feature {
            v1: v,
            v2: next,
            farthest: v,
        }
    }
}

/// Clips a segment against the half-plane `p · direction >= offset`.
fn clip(v1: Vec2, v2: Vec2, direction: Vec2, offset: f32) -> ([Vec2; 2], usize) {
    let mut out = [Vec2::zeros(); 2];
    let mut count = 0;
    let d1 = v1.dot(&direction) - offset;
    let d2 = v2.dot(&direction) - offset;
    if d1 >= 0.0 {
        out[count] = v1;
        count += 1;
    }
    if d2 >= 0.0 {
        out[count] = v2;
        count += 1;
    }
    // One endpoint past the plane: keep the crossing point.
    if d1 * d2 < 0.0 && count < 2 {
        let t = d1 / (d1 - d2);
        out[count] = v1 + (v2 - v1) * t;
        count += 1;
    }
    (out, count)
}

/// Builds a one- or two-point manifold for two overlapping polygons by
/// clipping the incident edge against the reference edge's side planes.
///
/// Returns `None` when no clipped point survives inside the reference
/// face, which the caller treats as no collision.
pub(crate) fn clipped_face_contacts(
    a: &Polygon,
    b: &Polygon,
    normal: Vec2,
    depth: f32,
) -> Option<Manifold> {
    let edge_a = best_edge(a, normal);
    let edge_b = best_edge(b, -normal);

    // The reference edge is the one more perpendicular to the normal;
    // the other is clipped against it.
    let a_align = (edge_a.v2 - edge_a.v1).dot(&normal).abs();
    let b_align = (edge_b.v2 - edge_b.v1).dot(&normal).abs();
    let (reference, incident, ref_normal) = if a_align <= b_align {
        (edge_a, edge_b, normal)
    } else {
        (edge_b, edge_a, -normal)
    };

    let ref_dir = (reference.v2 - reference.v1).normalize();

    let (points, count) = clip(
        incident.v1,
        incident.v2,
        ref_dir,
        ref_dir.dot(&reference.v1),
    );
    if count < 2 {
        return None;
    }
    let (points, count) = clip(points[0], points[1], -ref_dir, -ref_dir.dot(&reference.v2));
    if count < 2 {
        return None;
    }

    // Drop clipped points that ended up outside the reference face.
    let face_offset = ref_normal.dot(&reference.farthest);
    let mut contacts = [Vec2::zeros(); 2];
    let mut kept = 0;
    for p in &points[..count] {
        if ref_normal.dot(p) - face_offset <= EPSILON {
            contacts[kept] = *p;
            kept += 1;
        }
    }
    match kept {
        0 => None,
        1 => Some(Manifold::single(normal, depth, contacts[0])),
        _ => Some(Manifold::pair(normal, depth, contacts[0], contacts[1])),
    }
}

/// Builds a manifold for a confirmed penetration between two shapes.
///
/// Polygon pairs get clipped face contacts; any pairing involving a
/// round shape or an edge gets a single contact at the midpoint of the
/// two deepest points.
pub(crate) fn build(a: &Shape, b: &Shape, normal: Vec2, depth: f32) -> Option<Manifold> {
    // Orient the normal from A toward B.
    let between = b.center() - a.center();
    let normal = if normal.dot(&between) < 0.0 {
        -normal
    } else {
        normal
    };

    if let (Shape::Polygon(pa), Shape::Polygon(pb)) = (a, b) {
        return clipped_face_contacts(pa, pb, normal, depth);
    }

    let deepest_a = a.support_point(normal);
    let deepest_b = b.support_point(-normal);
    Some(Manifold::single(
        normal,
        depth,
        (deepest_a + deepest_b) * 0.5,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn overlapping_unit_squares_clip_to_two_contacts() {
        let a = Polygon::rectangle(Vec2::zeros(), 1.0, 1.0);
        let b = Polygon::rectangle(Vec2::new(0.5, 0.0), 1.0, 1.0);
        let m = clipped_face_contacts(&a, &b, Vec2::new(1.0, 0.0), 0.5).unwrap();
        assert_eq!(m.contacts().len(), 2);
        let mut ys: Vec<f32> = m.contacts().iter().map(|c| c.y).collect();
        ys.sort_by(f32::total_cmp);
        assert_relative_eq!(ys[0], -0.5, epsilon = 1e-5);
        assert_relative_eq!(ys[1], 0.5, epsilon = 1e-5);
    }

    #[test]
    fn rotated_square_on_face_gives_single_contact() {
        let a = Polygon::rectangle(Vec2::zeros(), 2.0, 2.0);
        // Diamond resting corner-first on the right face of the square.
        let b = Polygon::rectangle(Vec2::new(2.2, 0.0), 2.0, 2.0)
            .rotated_about(std::f32::consts::FRAC_PI_4, Vec2::new(2.2, 0.0));
        let m = clipped_face_contacts(&a, &b, Vec2::new(1.0, 0.0), 0.214).unwrap();
        assert_eq!(m.contacts().len(), 1);
        assert_relative_eq!(m.contacts()[0].y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn flipped_reverses_normal_only() {
        let m = Manifold::single(Vec2::new(1.0, 0.0), 0.25, Vec2::new(0.5, 0.0));
        let f = m.flipped();
        assert_relative_eq!(f.normal.x, -1.0);
        assert_relative_eq!(f.depth, 0.25);
        assert_relative_eq!(f.contacts()[0].x, 0.5);
    }
}
