//! Explicit two-stage integration.

use crate::foundation::math::{wrap_angle, Vec2};
use crate::geometry::Shape;

use super::body::{BodyFlags, RigidBody};

/// Default squared-speed threshold below which drag snaps velocity to
/// zero, so damped bodies come to rest instead of creeping forever.
pub const VELOCITY_SNAP_THRESHOLD: f32 = 0.0005;

/// Force stage: accumulated forces, gravity and drag become velocity
/// changes, then the accumulators are cleared. Velocities with a
/// squared magnitude below `snap_threshold` are zeroed. Static bodies
/// are skipped entirely.
pub fn integrate_forces(body: &mut RigidBody, gravity: Vec2, snap_threshold: f32, dt: f32) {
    if body.is_static() {
        return;
    }

    if body.flags.contains(BodyFlags::FOLLOWS_GRAVITY) {
        body.linear_velocity += gravity * dt;
    }
    body.linear_velocity += body.force * (body.inv_mass() * dt);

    if body.linear_velocity.norm_squared() < snap_threshold {
        body.linear_velocity = Vec2::zeros();
    } else {
        let v = body.linear_velocity;
        body.linear_velocity -= v * (body.linear_drag * dt);
    }

    if !body.flags.contains(BodyFlags::FIXED_ROTATION) {
        body.angular_velocity += body.torque * body.inv_angular_mass() * dt;
        if body.angular_velocity * body.angular_velocity < snap_threshold {
            body.angular_velocity = 0.0;
        } else {
            body.angular_velocity -= body.angular_velocity * body.angular_drag * dt;
        }
    }

    body.clear_accumulators();
}

/// Velocity stage: positions advance and the collider's shape moves in
/// lockstep so geometry and body state never diverge.
pub fn integrate_velocities(body: &mut RigidBody, shape: &mut Shape, dt: f32) {
    if body.is_static() {
        return;
    }

    let delta = body.linear_velocity * dt;
    body.position += delta;
    *shape = shape.translated(delta);

    if !body.flags.contains(BodyFlags::FIXED_ROTATION) && body.angular_velocity != 0.0 {
        let turn = body.angular_velocity * dt;
        body.rotation = wrap_angle(body.rotation + turn);
        *shape = shape.rotated_about(turn, body.position);
    }
}
