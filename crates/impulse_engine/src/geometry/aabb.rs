//! Axis-aligned bounding boxes and bounding circles for broad-phase tests.

use crate::foundation::math::Vec2;

/// An axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new AABB, normalizing the corners so `min <= max` per axis.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates an AABB that encompasses a set of points.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    /// Closed-interval overlap test on both axes.
    ///
    /// Touching boxes count as overlapping so the narrow phase gets a chance
    /// to report grazing contacts.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }

    /// Tests whether a point lies inside the box (boundary inclusive).
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Center of the box.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// A bounding circle for coarse overlap and distance queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// Center position in world space.
    pub center: Vec2,
    /// Radius of the circle.
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Checks if this circle overlaps another (boundary inclusive).
    pub fn overlaps(&self, other: &Self) -> bool {
        let radius_sum = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= radius_sum * radius_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_closed_interval() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let touching = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        let apart = Aabb::new(Vec2::new(1.1, 0.0), Vec2::new(2.0, 1.0));
        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn from_points_covers_extremes() {
        let aabb = Aabb::from_points(&[
            Vec2::new(1.0, -2.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec2::new(-3.0, -2.0));
        assert_eq!(aabb.max, Vec2::new(1.0, 4.0));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn bounding_circle_overlap() {
        let a = BoundingCircle::new(Vec2::new(0.0, 0.0), 1.0);
        let b = BoundingCircle::new(Vec2::new(2.0, 0.0), 1.0);
        let c = BoundingCircle::new(Vec2::new(2.1, 0.0), 1.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
