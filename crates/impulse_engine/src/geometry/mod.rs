//! Geometric primitives for collision detection
//!
//! All shapes store world-space geometry and behave as value objects:
//! transformations return new instances rather than mutating in place.

pub mod aabb;
pub mod circle;
pub mod edge;
pub mod ellipse;
pub mod polygon;
pub mod ray;
pub mod shape;

pub use aabb::{Aabb, BoundingCircle};
pub use circle::Circle;
pub use edge::Edge;
pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use ray::{Ray, RayIntersection};
pub use shape::Shape;
