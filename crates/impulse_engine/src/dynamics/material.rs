//! Surface materials and pairwise combination rules.

use serde::{Deserialize, Serialize};

/// Friction and restitution properties of a collider surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Friction coefficient while sliding.
    pub kinetic_friction: f32,
    /// Friction coefficient at rest; at least the kinetic value in any
    /// sensible material.
    pub static_friction: f32,
    /// Bounciness in `[0, 1]`; 0 is perfectly inelastic.
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            kinetic_friction: 0.3,
            static_friction: 0.5,
            restitution: 0.2,
        }
    }
}

impl PhysicsMaterial {
    /// Creates a material, clamping restitution into `[0, 1]` and
    /// friction to non-negative.
    pub fn new(kinetic_friction: f32, static_friction: f32, restitution: f32) -> Self {
        Self {
            kinetic_friction: kinetic_friction.max(0.0),
            static_friction: static_friction.max(0.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Frictionless, perfectly elastic surface.
    pub fn bouncy() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// High-friction, dead surface.
    pub fn rough() -> Self {
        Self::new(0.6, 0.9, 0.0)
    }

    /// Frictionless, inelastic surface.
    pub fn slippery() -> Self {
        Self::new(0.0, 0.02, 0.1)
    }

    /// Combined coefficients for a contact between two materials:
    /// geometric mean for friction, arithmetic mean for restitution.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            kinetic_friction: (self.kinetic_friction * other.kinetic_friction).sqrt(),
            static_friction: (self.static_friction * other.static_friction).sqrt(),
            restitution: 0.5 * (self.restitution + other.restitution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn combine_uses_geometric_mean_friction() {
        let a = PhysicsMaterial::new(0.4, 0.9, 0.0);
        let b = PhysicsMaterial::new(0.1, 0.4, 1.0);
        let c = a.combine(&b);
        assert_relative_eq!(c.kinetic_friction, 0.2, epsilon = 1e-5);
        assert_relative_eq!(c.static_friction, 0.6, epsilon = 1e-5);
        assert_relative_eq!(c.restitution, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn any_frictionless_surface_kills_friction() {
        let ice = PhysicsMaterial::bouncy();
        let rubber = PhysicsMaterial::rough();
        assert_relative_eq!(ice.combine(&rubber).kinetic_friction, 0.0);
    }

    #[test]
    fn constructor_clamps_out_of_range_values() {
        let m = PhysicsMaterial::new(-1.0, -1.0, 2.0);
        assert_relative_eq!(m.kinetic_friction, 0.0);
        assert_relative_eq!(m.restitution, 1.0);
    }
}
