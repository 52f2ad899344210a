//! # Impulse Engine
//!
//! A 2D rigid-body collision detection and impulse resolution core.
//!
//! ## Features
//!
//! - **Tiered Narrow Phase**: closed-form circles, SAT with contact
//!   clipping for small polygons, GJK + EPA for everything else
//! - **Impulse Resolution**: restitution, Coulomb friction and
//!   positional correction per contact manifold
//! - **Collision Events**: start/continue/stop callbacks with trigger
//!   volume support
//! - **Layer Filtering**: bitmask layer/mask pair gating
//! - **Ray Casting**: nearest-hit queries against every shape kind
//!
//! ## Quick Start
//!
//! ```rust
//! use impulse_engine::prelude::*;
//!
//! let mut world = PhysicsWorld::new();
//!
//! // Static ground.
//! let ground = Polygon::rectangle(Vec2::new(0.0, -0.5), 20.0, 1.0);
//! world.add_collision_body(Collider::new(Shape::from(ground)));
//!
//! // A ball dropped from above.
//! let ball_shape = Shape::from(Circle::new(Vec2::new(0.0, 5.0), 0.5));
//! let ball = world.add_physics_body(
//!     Collider::new(ball_shape),
//!     RigidBody::new(1.0, Vec2::zeros()),
//! );
//!
//! for _ in 0..120 {
//!     world.step(1.0 / 60.0);
//! }
//!
//! let resting = world.body(ball).unwrap();
//! assert!(resting.position.y < 5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod config;
pub mod dynamics;
pub mod foundation;
pub mod geometry;
pub mod world;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        collision::{CollisionFilter, CollisionHandler, Manifold, Transition},
        config::{Config, ConfigError, PhysicsConfig},
        dynamics::{BodyFlags, PhysicsMaterial, RigidBody},
        foundation::math::Vec2,
        geometry::{Circle, Edge, Ellipse, Polygon, Ray, RayIntersection, Shape},
        world::{Collider, ColliderKey, PhysicsWorld},
    };
}
