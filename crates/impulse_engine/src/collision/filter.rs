//! Layer/mask collision filtering.

/// Common layer assignments. Games may define their own bits beyond
/// these.
pub mod layers {
    /// Default layer for uncategorized colliders.
    pub const DEFAULT: u32 = 1 << 0;
    /// Static level geometry.
    pub const TERRAIN: u32 = 1 << 1;
    /// Player-controlled bodies.
    pub const PLAYER: u32 = 1 << 2;
    /// AI-controlled bodies.
    pub const ENEMY: u32 = 1 << 3;
    /// Short-lived projectiles.
    pub const PROJECTILE: u32 = 1 << 4;
    /// Trigger volumes.
    pub const SENSOR: u32 = 1 << 5;
    /// Collides with everything.
    pub const ALL: u32 = u32::MAX;
}

/// Which layer a collider occupies and which layers it reacts to.
///
/// Two colliders interact only when each one's mask accepts the
/// other's layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionFilter {
    /// Bit(s) identifying this collider's layer.
    pub layer: u32,
    /// Bitset of layers this collider collides with.
    pub mask: u32,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            layer: layers::DEFAULT,
            mask: layers::ALL,
        }
    }
}

impl CollisionFilter {
    /// Creates a filter with an explicit layer and mask.
    pub fn new(layer: u32, mask: u32) -> Self {
        Self { layer, mask }
    }

    /// Mutual layer/mask agreement test.
    pub fn should_collide(&self, other: &Self) -> bool {
        (self.layer & other.mask) != 0 && (other.layer & self.mask) != 0
    }
}
