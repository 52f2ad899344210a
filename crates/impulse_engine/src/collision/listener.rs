//! Per-pair collision bookkeeping and game-object callbacks.

use crate::world::ColliderKey;

use super::manifold::Manifold;

/// Canonically ordered pair of collider keys.
///
/// Construction sorts the two keys, so `(a, b)` and `(b, a)` map to
/// the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: ColliderKey,
    second: ColliderKey,
}

impl PairKey {
    /// Builds the canonical key for an unordered pair.
    pub fn new(a: ColliderKey, b: ColliderKey) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Smaller key of the pair.
    pub fn first(&self) -> ColliderKey {
        self.first
    }

    /// Larger key of the pair.
    pub fn second(&self) -> ColliderKey {
        self.second
    }

    /// True when the pair involves the given collider.
    pub fn involves(&self, key: ColliderKey) -> bool {
        self.first == key || self.second == key
    }

    /// The pair member that is not `key`.
    pub fn other(&self, key: ColliderKey) -> ColliderKey {
        if self.first == key {
            self.second
        } else {
            self.first
        }
    }
}

/// What a listener update means for the pair's callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The pair began colliding this step.
    Start,
    /// The pair was already colliding and still is.
    Continue,
    /// The pair stopped colliding this step.
    Stop,
}

/// Tracks one pair's collision state across steps.
///
/// A listener is created the first step the pair's AABBs overlap and
/// discarded once they no longer do (after any exit notification).
#[derive(Debug, Clone, Copy)]
pub struct CollisionListener {
    /// Whether the pair was colliding at the end of the last update.
    pub colliding: bool,
    /// Whether at least one collider of the pair is a trigger.
    pub is_trigger: bool,
}

impl CollisionListener {
    /// Fresh listener for a newly overlapping pair.
    pub fn new(is_trigger: bool) -> Self {
        Self {
            colliding: false,
            is_trigger,
        }
    }

    /// Folds this step's narrow-phase result into the state machine.
    ///
    /// Exactly one `Start` is produced per contact episode, followed by
    /// `Continue` every step the contact persists and one `Stop` when
    /// it ends.
    pub fn update(&mut self, hit: bool) -> Option<Transition> {
        match (self.colliding, hit) {
            (false, true) => {
                self.colliding = true;
                Some(Transition::Start)
            }
            (true, true) => Some(Transition::Continue),
            (true, false) => {
                self.colliding = false;
                Some(Transition::Stop)
            }
            (false, false) => None,
        }
    }
}

/// Callbacks a game object registers to observe its collider.
///
/// The manifold argument is `None` for trigger-trigger pairs, whose
/// contact state is driven by the broad phase alone.
#[allow(unused_variables)]
pub trait CollisionHandler {
    /// Veto hook consulted before any narrow-phase work. Returning
    /// false from either side suppresses the pair entirely.
    fn can_collide(&self, other: ColliderKey) -> bool {
        true
    }

    /// The pair began colliding this step.
    fn start_collision(&mut self, other: ColliderKey, manifold: Option<&Manifold>) {}

    /// The pair is still colliding.
    fn continue_collision(&mut self, other: ColliderKey, manifold: Option<&Manifold>) {}

    /// The pair stopped colliding (separation or collider removal).
    fn stop_collision(&mut self, other: ColliderKey) {}
}
