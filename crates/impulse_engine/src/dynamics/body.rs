//! Rigid body state.

use bitflags::bitflags;

use crate::foundation::math::{cross, Vec2};

use super::material::PhysicsMaterial;

bitflags! {
    /// Behavior switches for a rigid body.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BodyFlags: u32 {
        /// Gravity is applied during force integration.
        const FOLLOWS_GRAVITY = 1 << 0;
        /// Rotation is locked; torques and angular impulses are ignored.
        const FIXED_ROTATION = 1 << 1;
    }
}

impl Default for BodyFlags {
    fn default() -> Self {
        Self::FOLLOWS_GRAVITY
    }
}

/// Dynamic state of a simulated body.
///
/// A zero mass (and therefore zero inverse mass) marks the body as
/// static: it never moves, and the integrator skips it entirely.
/// Angular mass comes from the attached shape when the body enters a
/// world.
#[derive(Debug, Clone)]
pub struct RigidBody {
    mass: f32,
    inv_mass: f32,
    angular_mass: f32,
    inv_angular_mass: f32,
    /// World-space position of the body's center.
    pub position: Vec2,
    /// Orientation in radians.
    pub rotation: f32,
    /// Linear velocity.
    pub linear_velocity: Vec2,
    /// Angular velocity in radians per second.
    pub angular_velocity: f32,
    /// Accumulated force, cleared every force-integration pass.
    pub force: Vec2,
    /// Accumulated torque, cleared every force-integration pass.
    pub torque: f32,
    /// Linear damping coefficient.
    pub linear_drag: f32,
    /// Angular damping coefficient.
    pub angular_drag: f32,
    /// Surface material used when resolving contacts.
    pub material: PhysicsMaterial,
    /// Behavior flags.
    pub flags: BodyFlags,
}

impl RigidBody {
    /// Creates a dynamic body. A non-positive mass produces a static
    /// body.
    pub fn new(mass: f32, position: Vec2) -> Self {
        let (mass, inv_mass) = if mass > 0.0 {
            (mass, 1.0 / mass)
        } else {
            (0.0, 0.0)
        };
        Self {
            mass,
            inv_mass,
            angular_mass: 0.0,
            inv_angular_mass: 0.0,
            position,
            rotation: 0.0,
            linear_velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            force: Vec2::zeros(),
            torque: 0.0,
            linear_drag: 0.0,
            angular_drag: 0.0,
            material: PhysicsMaterial::default(),
            flags: BodyFlags::default(),
        }
    }

    /// Immovable body anchored at a position.
    pub fn fixed(position: Vec2) -> Self {
        let mut body = Self::new(0.0, position);
        body.flags = BodyFlags::empty();
        body
    }

    /// Builder-style material override.
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    /// Builder-style drag override.
    pub fn with_drag(mut self, linear: f32, angular: f32) -> Self {
        self.linear_drag = linear;
        self.angular_drag = angular;
        self
    }

    /// Builder-style flags override.
    pub fn with_flags(mut self, flags: BodyFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mass; zero for static bodies.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Inverse mass; zero for static bodies.
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Moment of inertia about the center.
    pub fn angular_mass(&self) -> f32 {
        self.angular_mass
    }

    /// Inverse moment of inertia; zero when static or rotation-locked.
    pub fn inv_angular_mass(&self) -> f32 {
        if self.flags.contains(BodyFlags::FIXED_ROTATION) {
            0.0
        } else {
            self.inv_angular_mass
        }
    }

    /// True when the body never moves.
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Sets the moment of inertia, usually derived from the attached
    /// shape.
    pub fn set_angular_mass(&mut self, angular_mass: f32) {
        if angular_mass > 0.0 && !self.is_static() {
            self.angular_mass = angular_mass;
            self.inv_angular_mass = 1.0 / angular_mass;
        } else {
            self.angular_mass = 0.0;
            self.inv_angular_mass = 0.0;
        }
    }

    /// Adds a force through the center of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Adds a force at a world-space point, inducing torque about the
    /// center.
    pub fn apply_force_at_point(&mut self, force: Vec2, point: Vec2) {
        self.force += force;
        self.torque += cross(point - self.position, force);
    }

    /// Adds a torque.
    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Instant velocity change through the center of mass.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.linear_velocity += impulse * self.inv_mass;
    }

    /// Instant velocity change at a contact offset `r` from the center.
    pub fn apply_impulse_at(&mut self, impulse: Vec2, r: Vec2) {
        self.linear_velocity += impulse * self.inv_mass;
        self.angular_velocity += cross(r, impulse) * self.inv_angular_mass();
    }

    /// Zeroes the force and torque accumulators.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::zeros();
        self.torque = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_mass_body_is_static() {
        let body = RigidBody::new(0.0, Vec2::zeros());
        assert!(body.is_static());
        assert_relative_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    fn impulse_at_offset_spins_the_body() {
        let mut body = RigidBody::new(2.0, Vec2::zeros());
        body.set_angular_mass(4.0);
        body.apply_impulse_at(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0));
        assert_relative_eq!(body.linear_velocity.y, 1.0);
        assert_relative_eq!(body.angular_velocity, 0.5);
    }

    #[test]
    fn fixed_rotation_ignores_angular_impulse() {
        let mut body = RigidBody::new(2.0, Vec2::zeros())
            .with_flags(BodyFlags::FOLLOWS_GRAVITY | BodyFlags::FIXED_ROTATION);
        body.set_angular_mass(4.0);
        body.apply_impulse_at(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0));
        assert_relative_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn force_at_point_accumulates_torque() {
        let mut body = RigidBody::new(1.0, Vec2::zeros());
        body.apply_force_at_point(Vec2::new(0.0, 10.0), Vec2::new(2.0, 0.0));
        assert_relative_eq!(body.force.y, 10.0);
        assert_relative_eq!(body.torque, 20.0);
    }
}
