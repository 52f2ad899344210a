//! Impulse-based contact resolution.

use crate::collision::Manifold;
use crate::foundation::math::{cross, perp, Vec2, EPSILON};
use crate::geometry::Shape;

use super::body::RigidBody;
use super::material::PhysicsMaterial;

/// Mutable view of one side of a contact: the collider's shape plus
/// its dynamics, if it has any. Static level geometry participates
/// with infinite mass and a default material.
pub struct ContactBody<'a> {
    /// The collider's world-space shape.
    pub shape: &'a mut Shape,
    /// Dynamic state; `None` for pure collision geometry.
    pub body: Option<&'a mut RigidBody>,
}

impl ContactBody<'_> {
    fn inv_mass(&self) -> f32 {
        self.body.as_ref().map_or(0.0, |b| b.inv_mass())
    }

    fn inv_angular_mass(&self) -> f32 {
        self.body.as_ref().map_or(0.0, |b| b.inv_angular_mass())
    }

    fn material(&self) -> PhysicsMaterial {
        self.body
            .as_ref()
            .map_or_else(PhysicsMaterial::default, |b| b.material)
    }

    fn center(&self) -> Vec2 {
        self.body
            .as_ref()
            .map_or_else(|| self.shape.center(), |b| b.position)
    }

    /// Velocity of the material point at offset `r` from the center.
    fn velocity_at(&self, r: Vec2) -> Vec2 {
        self.body.as_ref().map_or_else(Vec2::zeros, |b| {
            b.linear_velocity + perp(r) * b.angular_velocity
        })
    }

    fn apply_impulse_at(&mut self, impulse: Vec2, r: Vec2) {
        if let Some(body) = self.body.as_mut() {
            body.apply_impulse_at(impulse, r);
        }
    }

    /// Moves the body and its shape together.
    fn displace(&mut self, delta: Vec2) {
        *self.shape = self.shape.translated(delta);
        if let Some(body) = self.body.as_mut() {
            body.position += delta;
        }
    }
}

/// Resolves one contact manifold: normal impulses with restitution,
/// Coulomb friction, then a single positional correction. The manifold
/// normal must point from `a` toward `b`.
///
/// Pairs where both sides have infinite mass are skipped.
pub fn resolve(a: &mut ContactBody<'_>, b: &mut ContactBody<'_>, manifold: &Manifold) {
    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum < EPSILON {
        return;
    }

    let normal = manifold.normal;
    let material = a.material().combine(&b.material());
    let contact_share = 1.0 / manifold.contacts().len() as f32;
    let center_a = a.center();
    let center_b = b.center();

    for &contact in manifold.contacts() {
        let r1 = contact - center_a;
        let r2 = contact - center_b;

        let relative = b.velocity_at(r2) - a.velocity_at(r1);
        let approach = relative.dot(&normal);
        // Contacts already separating keep their outgoing velocity.
        if approach >= 0.0 {
            continue;
        }

        let normal_denom = inv_mass_sum
            + a.inv_angular_mass() * cross(r1, normal).powi(2)
            + b.inv_angular_mass() * cross(r2, normal).powi(2);
        if normal_denom < EPSILON {
            continue;
        }
        let jn = -(1.0 + material.restitution) * approach / normal_denom * contact_share;
        let normal_impulse = normal * jn;
        a.apply_impulse_at(-normal_impulse, r1);
        b.apply_impulse_at(normal_impulse, r2);

        // Friction against the post-impulse sliding direction.
        let relative = b.velocity_at(r2) - a.velocity_at(r1);
        let tangential = relative - normal * relative.dot(&normal);
        let slide_speed = tangential.norm();
        if slide_speed < EPSILON {
            continue;
        }
        let tangent = tangential / slide_speed;

        let tangent_denom = inv_mass_sum
            + a.inv_angular_mass() * cross(r1, tangent).powi(2)
            + b.inv_angular_mass() * cross(r2, tangent).powi(2);
        if tangent_denom < EPSILON {
            continue;
        }
        let mut jt = -relative.dot(&tangent) / tangent_denom * contact_share;
        // Coulomb cone: stick below the static threshold, otherwise
        // slide with kinetic friction.
        // The tangent points along the slide, so jt is always a brake.
        if jt.abs() > jn * material.static_friction {
            jt = -jn * material.kinetic_friction;
        }
        let tangent_impulse = tangent * jt;
        a.apply_impulse_at(-tangent_impulse, r1);
        b.apply_impulse_at(tangent_impulse, r2);
    }

    // One-shot positional correction proportional to inverse mass.
    if manifold.depth > 0.0 {
        let correction = manifold.normal * (manifold.depth / inv_mass_sum);
        a.displace(-correction * a.inv_mass());
        b.displace(correction * b.inv_mass());
    }
}
