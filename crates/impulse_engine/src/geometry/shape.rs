//! Closed set of collidable shapes.

use crate::foundation::math::{rotate, Vec2};

use super::aabb::{Aabb, BoundingCircle};
use super::{Circle, Edge, Ellipse, Polygon, Ray, RayIntersection};

/// Every shape the collision pipeline understands.
///
/// Shapes are world-space value objects: transforms return new shapes
/// rather than mutating a local-space template.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A rotated ellipse.
    Ellipse(Ellipse),
    /// A convex polygon.
    Polygon(Polygon),
    /// A one-dimensional segment.
    Edge(Edge),
}

impl Shape {
    /// Enclosed area; zero for edges.
    pub fn area(&self) -> f32 {
        match self {
            Self::Circle(c) => c.area(),
            Self::Ellipse(e) => e.area(),
            Self::Polygon(p) => p.area(),
            Self::Edge(e) => e.area(),
        }
    }

    /// Geometric center: circle/ellipse center, polygon centroid, edge
    /// midpoint.
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Circle(c) => c.center,
            Self::Ellipse(e) => e.center,
            Self::Polygon(p) => p.centroid(),
            Self::Edge(e) => e.center(),
        }
    }

    /// Farthest point on the shape in the given direction.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        match self {
            Self::Circle(c) => c.support_point(direction),
            Self::Ellipse(e) => e.support_point(direction),
            Self::Polygon(p) => p.support_point(direction),
            Self::Edge(e) => e.support_point(direction),
        }
    }

    /// Tests whether a point lies inside the shape (boundary inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(c) => c.contains(point),
            Self::Ellipse(e) => e.contains(point),
            Self::Polygon(p) => p.contains(point),
            Self::Edge(e) => e.contains(point),
        }
    }

    /// Moment of inertia about the shape's center for the given mass.
    pub fn angular_mass(&self, mass: f32) -> f32 {
        match self {
            Self::Circle(c) => c.angular_mass(mass),
            Self::Ellipse(e) => e.angular_mass(mass),
            Self::Polygon(p) => p.angular_mass(mass),
            Self::Edge(e) => e.angular_mass(mass),
        }
    }

    /// Tight axis-aligned bounding box.
    pub fn bounding_box(&self) -> Aabb {
        match self {
            Self::Circle(c) => c.bounding_box(),
            Self::Ellipse(e) => e.bounding_box(),
            Self::Polygon(p) => p.bounding_box(),
            Self::Edge(e) => e.bounding_box(),
        }
    }

    /// Bounding circle around the shape's center.
    pub fn bounding_circle(&self) -> BoundingCircle {
        match self {
            Self::Circle(c) => c.bounding_circle(),
            Self::Ellipse(e) => e.bounding_circle(),
            Self::Polygon(p) => p.bounding_circle(),
            Self::Edge(e) => e.bounding_circle(),
        }
    }

    /// Copy moved by the given offset.
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            Self::Circle(c) => Self::Circle(Circle::new(c.center + offset, c.radius)),
            Self::Ellipse(e) => {
                Self::Ellipse(Ellipse::new(e.center + offset, e.a, e.b, e.rotation))
            }
            Self::Polygon(p) => Self::Polygon(p.translated(offset)),
            Self::Edge(e) => Self::Edge(e.translated(offset)),
        }
    }

    /// Copy rotated about its own center.
    pub fn rotated(&self, angle: f32) -> Self {
        self.rotated_about(angle, self.center())
    }

    /// Copy rotated about an arbitrary pivot.
    pub fn rotated_about(&self, angle: f32, pivot: Vec2) -> Self {
        match self {
            Self::Circle(c) => Self::Circle(Circle::new(
                pivot + rotate(c.center - pivot, angle),
                c.radius,
            )),
            Self::Ellipse(e) => Self::Ellipse(Ellipse::new(
                pivot + rotate(e.center - pivot, angle),
                e.a,
                e.b,
                e.rotation + angle,
            )),
            Self::Polygon(p) => Self::Polygon(p.rotated_about(angle, pivot)),
            Self::Edge(e) => Self::Edge(e.rotated_about(angle, pivot)),
        }
    }

    /// Copy scaled about its center by a uniform factor.
    pub fn scaled(&self, factor: f32) -> Self {
        match self {
            Self::Circle(c) => Self::Circle(Circle::new(c.center, c.radius * factor)),
            Self::Ellipse(e) => Self::Ellipse(Ellipse::new(
                e.center,
                e.a * factor,
                e.b * factor,
                e.rotation,
            )),
            Self::Polygon(p) => Self::Polygon(p.scaled(factor)),
            Self::Edge(e) => {
                let c = e.center();
                Self::Edge(Edge::new(
                    c + (e.start - c) * factor,
                    c + (e.end - c) * factor,
                ))
            }
        }
    }

    /// Nearest ray intersection with this shape, if any.
    pub fn raycast(&self, ray: &Ray) -> Option<RayIntersection> {
        match self {
            Self::Circle(c) => ray.intersect_circle(c),
            Self::Ellipse(e) => ray.intersect_ellipse(e),
            Self::Polygon(p) => ray.intersect_polygon(p),
            Self::Edge(e) => ray.intersect_edge(e),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Self::Ellipse(e)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

impl From<Edge> for Shape {
    fn from(e: Edge) -> Self {
        Self::Edge(e)
    }
}
