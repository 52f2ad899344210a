//! Broad-phase overlap test.

use crate::geometry::Shape;

/// Cheap closed-interval AABB test used to gate the narrow phase.
///
/// Touching boxes count as overlapping so that resting contacts are
/// never dropped by the broad phase.
pub fn aabbs_overlap(a: &Shape, b: &Shape) -> bool {
    a.bounding_box().overlaps(&b.bounding_box())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::geometry::Circle;

    #[test]
    fn touching_boxes_overlap() {
        let a = Shape::from(Circle::new(Vec2::zeros(), 1.0));
        let b = Shape::from(Circle::new(Vec2::new(2.0, 0.0), 1.0));
        assert!(aabbs_overlap(&a, &b));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = Shape::from(Circle::new(Vec2::zeros(), 1.0));
        let b = Shape::from(Circle::new(Vec2::new(2.1, 0.0), 1.0));
        assert!(!aabbs_overlap(&a, &b));
    }
}
