//! Rigid-body dynamics: materials, bodies, integration and contact
//! resolution.

pub mod body;
pub mod integrator;
pub mod material;
pub mod solver;

pub use body::{BodyFlags, RigidBody};
pub use material::PhysicsMaterial;
pub use solver::ContactBody;
