//! Ray casting against shapes.

use crate::foundation::math::{cross, rotate, Vec2, EPSILON};

use super::{Circle, Edge, Ellipse, Polygon};

/// A ray with an origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point in world space.
    pub origin: Vec2,
    /// Unit direction of travel.
    pub direction: Vec2,
}

/// Result of a successful ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersection {
    /// Point where the ray enters the shape.
    pub point: Vec2,
    /// Surface normal at the hit point, facing the ray origin.
    pub normal: Vec2,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    ///
    /// Returns `None` for a zero direction.
    pub fn new(origin: Vec2, direction: Vec2) -> Option<Self> {
        let len = direction.norm();
        if len < EPSILON {
            return None;
        }
        Some(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Point along the ray at the given distance.
    pub fn point_at(&self, distance: f32) -> Vec2 {
        self.origin + self.direction * distance
    }

    /// Nearest intersection with a circle, if any.
    ///
    /// A ray starting inside reports the exit point.
    pub fn intersect_circle(&self, circle: &Circle) -> Option<RayIntersection> {
        let to_center = circle.center - self.origin;
        let proj = to_center.dot(&self.direction);
        let discriminant =
            circle.radius * circle.radius - (to_center.norm_squared() - proj * proj);
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let mut distance = proj - sqrt_d;
        if distance < 0.0 {
            distance = proj + sqrt_d;
        }
        if distance < 0.0 {
            return None;
        }
        let point = self.point_at(distance);
        let normal = (point - circle.center) / circle.radius.max(EPSILON);
        Some(RayIntersection {
            point,
            normal,
            distance,
        })
    }

    /// Nearest intersection with a single segment, if any.
    pub fn intersect_edge(&self, edge: &Edge) -> Option<RayIntersection> {
        let seg = edge.end - edge.start;
        let denom = cross(self.direction, seg);
        if denom.abs() < EPSILON {
            return None;
        }
        let diff = edge.start - self.origin;
        let distance = cross(diff, seg) / denom;
        let u = cross(diff, self.direction) / denom;
        if distance < 0.0 || !(0.0..=1.0).contains(&u) {
            return None;
        }
        let len = seg.norm().max(EPSILON);
        let mut normal = Vec2::new(seg.y / len, -seg.x / len);
        if normal.dot(&self.direction) > 0.0 {
            normal = -normal;
        }
        Some(RayIntersection {
            point: self.point_at(distance),
            normal,
            distance,
        })
    }

    /// Nearest intersection with a polygon boundary, if any.
    pub fn intersect_polygon(&self, polygon: &Polygon) -> Option<RayIntersection> {
        let verts = polygon.vertices();
        let n = verts.len();
        let mut best: Option<RayIntersection> = None;
        for i in 0..n {
            let edge = Edge::new(verts[i], verts[(i + 1) % n]);
            if let Some(hit) = self.intersect_edge(&edge) {
                if best.map_or(true, |b| hit.distance < b.distance) {
                    best = Some(hit);
                }
            }
        }
        best
    }

    /// Nearest intersection with an ellipse, if any.
    ///
    /// Solved in the ellipse's local frame where the boundary is the
    /// unit circle after scaling by the semi-axes.
    pub fn intersect_ellipse(&self, ellipse: &Ellipse) -> Option<RayIntersection> {
        let (a, b) = (ellipse.a.max(EPSILON), ellipse.b.max(EPSILON));
        let local_origin = rotate(self.origin - ellipse.center, -ellipse.rotation);
        let local_dir = rotate(self.direction, -ellipse.rotation);

        let o = Vec2::new(local_origin.x / a, local_origin.y / b);
        let d = Vec2::new(local_dir.x / a, local_dir.y / b);

        let qa = d.norm_squared();
        let qb = 2.0 * o.dot(&d);
        let qc = o.norm_squared() - 1.0;
        let discriminant = qb * qb - 4.0 * qa * qc;
        if discriminant < 0.0 || qa < EPSILON {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let mut t = (-qb - sqrt_d) / (2.0 * qa);
        if t < 0.0 {
            t = (-qb + sqrt_d) / (2.0 * qa);
        }
        if t < 0.0 {
            return None;
        }
        // t is parametric in the scaled frame; recover world distance
        // from the unscaled local hit point.
        let local_hit = local_origin + local_dir * t;
        let distance = (local_hit - local_origin).norm();
        let point = self.point_at(distance);
        // Gradient of the implicit ellipse equation gives the normal.
        let local_normal =
            Vec2::new(local_hit.x / (a * a), local_hit.y / (b * b));
        let mut normal = rotate(local_normal, ellipse.rotation);
        let len = normal.norm();
        if len < EPSILON {
            return None;
        }
        normal /= len;
        if normal.dot(&self.direction) > 0.0 {
            normal = -normal;
        }
        Some(RayIntersection {
            point,
            normal,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ray_hits_circle_head_on() {
        let ray = Ray::new(Vec2::zeros(), Vec2::new(1.0, 0.0)).unwrap();
        let circle = Circle::new(Vec2::new(5.0, 0.0), 1.0);
        let hit = ray.intersect_circle(&circle).unwrap();
        assert_relative_eq!(hit.point.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.normal.x, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn ray_misses_circle_behind_origin() {
        let ray = Ray::new(Vec2::zeros(), Vec2::new(1.0, 0.0)).unwrap();
        let circle = Circle::new(Vec2::new(-5.0, 0.0), 1.0);
        assert!(ray.intersect_circle(&circle).is_none());
    }

    #[test]
    fn ray_inside_circle_reports_exit() {
        let ray = Ray::new(Vec2::zeros(), Vec2::new(1.0, 0.0)).unwrap();
        let circle = Circle::new(Vec2::zeros(), 2.0);
        let hit = ray.intersect_circle(&circle).unwrap();
        assert_relative_eq!(hit.distance, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn ray_hits_nearest_polygon_edge() {
        let ray = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0)).unwrap();
        let square = Polygon::rectangle(Vec2::zeros(), 2.0, 2.0);
        let hit = ray.intersect_polygon(&square).unwrap();
        assert_relative_eq!(hit.point.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.normal.x, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn ray_parallel_to_edge_misses() {
        let ray = Ray::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)).unwrap();
        let edge = Edge::new(Vec2::zeros(), Vec2::new(5.0, 0.0));
        assert!(ray.intersect_edge(&edge).is_none());
    }

    #[test]
    fn ray_hits_ellipse_on_major_axis() {
        let ray = Ray::new(Vec2::new(-10.0, 0.0), Vec2::new(1.0, 0.0)).unwrap();
        let ellipse = Ellipse::new(Vec2::zeros(), 3.0, 1.0, 0.0);
        let hit = ray.intersect_ellipse(&ellipse).unwrap();
        assert_relative_eq!(hit.point.x, -3.0, epsilon = 1e-4);
        assert_relative_eq!(hit.distance, 7.0, epsilon = 1e-4);
        assert_relative_eq!(hit.normal.x, -1.0, epsilon = 1e-4);
    }
}
