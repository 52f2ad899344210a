//! World ownership and the simulation step.

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::collision::listener::{CollisionListener, PairKey, Transition};
use crate::collision::{self, broad, CollisionFilter, CollisionHandler, Manifold};
use crate::config::PhysicsConfig;
use crate::dynamics::solver::ContactBody;
use crate::dynamics::{integrator, solver, RigidBody};
use crate::foundation::logging::{debug, trace};
use crate::foundation::math::Vec2;
use crate::geometry::{Ray, RayIntersection, Shape};

new_key_type! {
    /// Stable handle to a collider owned by a [`PhysicsWorld`].
    pub struct ColliderKey;
}

/// Collision geometry plus filtering, without dynamics.
pub struct Collider {
    /// World-space shape.
    pub shape: Shape,
    /// Layer/mask filter.
    pub filter: CollisionFilter,
    /// Triggers sense overlaps but never receive impulses.
    pub is_trigger: bool,
}

impl Collider {
    /// Solid collider on the default filter.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            filter: CollisionFilter::default(),
            is_trigger: false,
        }
    }

    /// Trigger volume on the default filter.
    pub fn trigger(shape: Shape) -> Self {
        Self {
            shape,
            filter: CollisionFilter::default(),
            is_trigger: true,
        }
    }

    /// Builder-style filter override.
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }
}

struct WorldEntry {
    collider: Collider,
    body: Option<RigidBody>,
    handler: Option<Box<dyn CollisionHandler>>,
}

struct PendingEvent {
    pair: PairKey,
    transition: Transition,
    manifold: Option<Manifold>,
}

/// Owns every collider, body, listener and handler of a simulation.
///
/// Stepping is single-threaded and strictly ordered: force
/// integration, velocity integration, broad phase, narrow phase with
/// listener transitions, impulse resolution, then callback dispatch.
pub struct PhysicsWorld {
    entries: SlotMap<ColliderKey, WorldEntry>,
    listeners: HashMap<PairKey, CollisionListener>,
    gravity: Vec2,
    config: PhysicsConfig,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// World with default configuration (gravity `(0, -9.81)`).
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// World with explicit configuration.
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            entries: SlotMap::with_key(),
            listeners: HashMap::new(),
            gravity: Vec2::new(config.gravity_x, config.gravity_y),
            config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// World gravity.
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Overrides gravity at runtime.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Adds collision-only geometry (static level pieces, trigger
    /// volumes).
    pub fn add_collision_body(&mut self, collider: Collider) -> ColliderKey {
        self.entries.insert(WorldEntry {
            collider,
            body: None,
            handler: None,
        })
    }

    /// Adds a fully simulated body. The body snaps to the shape's
    /// center and takes its angular mass from the shape.
    pub fn add_physics_body(&mut self, collider: Collider, mut body: RigidBody) -> ColliderKey {
        body.position = collider.shape.center();
        let angular_mass = collider.shape.angular_mass(body.mass());
        body.set_angular_mass(angular_mass);
        self.entries.insert(WorldEntry {
            collider,
            body: Some(body),
            handler: None,
        })
    }

    /// Registers the callbacks for a collider.
    pub fn set_handler(&mut self, key: ColliderKey, handler: Box<dyn CollisionHandler>) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.handler = Some(handler);
        }
    }

    /// Removes a collider, dropping every listener that references it.
    /// Pairs that were colliding get their exit notification first.
    pub fn remove_body(&mut self, key: ColliderKey) {
        let mut removed = match self.entries.remove(key) {
            Some(entry) => entry,
            None => return,
        };

        let dead: Vec<PairKey> = self
            .listeners
            .keys()
            .filter(|pair| pair.involves(key))
            .copied()
            .collect();
        for pair in dead {
            let was_colliding = self
                .listeners
                .remove(&pair)
                .is_some_and(|listener| listener.colliding);
            if !was_colliding {
                continue;
            }
            let other = pair.other(key);
            if let Some(handler) = removed.handler.as_mut() {
                handler.stop_collision(other);
            }
            if let Some(entry) = self.entries.get_mut(other) {
                if let Some(handler) = entry.handler.as_mut() {
                    handler.stop_collision(key);
                }
            }
        }
    }

    /// Shape of a collider, for debug and render layers.
    pub fn shape(&self, key: ColliderKey) -> Option<&Shape> {
        self.entries.get(key).map(|e| &e.collider.shape)
    }

    /// Body state of a collider, if it has dynamics.
    pub fn body(&self, key: ColliderKey) -> Option<&RigidBody> {
        self.entries.get(key).and_then(|e| e.body.as_ref())
    }

    /// Mutable body state, for gameplay forces between steps.
    pub fn body_mut(&mut self, key: ColliderKey) -> Option<&mut RigidBody> {
        self.entries.get_mut(key).and_then(|e| e.body.as_mut())
    }

    /// Number of colliders in the world.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the world contains no colliders.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        trace!("physics step dt={dt}");
        let snap_threshold = self.config.velocity_snap_threshold;
        for entry in self.entries.values_mut() {
            if let Some(body) = entry.body.as_mut() {
                integrator::integrate_forces(body, self.gravity, snap_threshold, dt);
                integrator::integrate_velocities(body, &mut entry.collider.shape, dt);
            }
        }

        let keys: Vec<ColliderKey> = self.entries.keys().collect();
        let mut events = Vec::new();

        for (i, &ka) in keys.iter().enumerate() {
            for &kb in &keys[i + 1..] {
                self.process_pair(ka, kb, &mut events);
            }
        }

        self.dispatch(events);
    }

    /// Runs gating, broad phase, narrow phase and solving for one
    /// unordered pair, queueing any listener transition.
    fn process_pair(&mut self, ka: ColliderKey, kb: ColliderKey, events: &mut Vec<PendingEvent>) {
        let pair = PairKey::new(ka, kb);

        let (trigger_a, trigger_b, rejected) = {
            let a = &self.entries[ka];
            let b = &self.entries[kb];
            let both_static = a.body.as_ref().is_none_or(RigidBody::is_static)
                && b.body.as_ref().is_none_or(RigidBody::is_static);
            let any_trigger = a.collider.is_trigger || b.collider.is_trigger;
            let vetoed = a.handler.as_ref().is_some_and(|h| !h.can_collide(kb))
                || b.handler.as_ref().is_some_and(|h| !h.can_collide(ka));
            let rejected = vetoed
                || !a.collider.filter.should_collide(&b.collider.filter)
                || (both_static && !any_trigger);
            (a.collider.is_trigger, b.collider.is_trigger, rejected)
        };
        if rejected {
            // A filter or veto can change mid-episode; a pair that was
            // colliding still owes its exit event.
            self.drop_listener(pair, events);
            return;
        }

        let overlap = {
            let a = &self.entries[ka];
            let b = &self.entries[kb];
            broad::aabbs_overlap(&a.collider.shape, &b.collider.shape)
        };

        if !overlap {
            // A pair that was colliding still owes its exit event when
            // the broad phase stops matching.
            self.drop_listener(pair, events);
            return;
        }

        let both_triggers = trigger_a && trigger_b;
        let any_trigger = trigger_a || trigger_b;
        let listener = self
            .listeners
            .entry(pair)
            .or_insert_with(|| CollisionListener::new(any_trigger));
        let trigger_pair = listener.is_trigger;

        // Trigger-trigger pairs never need contacts; broad overlap is
        // their collision state.
        let manifold = if both_triggers {
            None
        } else {
            let a = &self.entries[ka];
            let b = &self.entries[kb];
            collision::detect(&a.collider.shape, &b.collider.shape)
        };
        let hit = both_triggers || manifold.is_some();

        let transition = listener.update(hit);
        let solve = !trigger_pair
            && matches!(transition, Some(Transition::Start | Transition::Continue));

        if let (true, Some(manifold)) = (solve, manifold.as_ref()) {
            if let Some([ea, eb]) = self.entries.get_disjoint_mut([ka, kb]) {
                let mut contact_a = ContactBody {
                    shape: &mut ea.collider.shape,
                    body: ea.body.as_mut(),
                };
                let mut contact_b = ContactBody {
                    shape: &mut eb.collider.shape,
                    body: eb.body.as_mut(),
                };
                solver::resolve(&mut contact_a, &mut contact_b, manifold);
            }
        }

        if let Some(transition) = transition {
            if transition == Transition::Start {
                debug!("collision start {ka:?} <-> {kb:?}");
            }
            // Dispatch assumes the normal points from the pair's first
            // key toward its second.
            let manifold = if pair.first() == ka {
                manifold
            } else {
                manifold.map(Manifold::flipped)
            };
            events.push(PendingEvent {
                pair,
                transition,
                manifold,
            });
        }
    }

    /// Forgets a pair's listener, queueing the exit event when the
    /// pair was still colliding.
    fn drop_listener(&mut self, pair: PairKey, events: &mut Vec<PendingEvent>) {
        if let Some(listener) = self.listeners.remove(&pair) {
            if listener.colliding {
                events.push(PendingEvent {
                    pair,
                    transition: Transition::Stop,
                    manifold: None,
                });
            }
        }
    }

    /// Delivers queued transitions to both handlers of each pair. The
    /// manifold is re-oriented so each side sees the normal pointing
    /// away from itself.
    fn dispatch(&mut self, events: Vec<PendingEvent>) {
        for event in events {
            let first = event.pair.first();
            let second = event.pair.second();
            for (me, other, flip) in [(first, second, false), (second, first, true)] {
                let Some(entry) = self.entries.get_mut(me) else {
                    continue;
                };
                let Some(handler) = entry.handler.as_mut() else {
                    continue;
                };
                let oriented = event.manifold.map(|m| if flip { m.flipped() } else { m });
                match event.transition {
                    Transition::Start => handler.start_collision(other, oriented.as_ref()),
                    Transition::Continue => {
                        handler.continue_collision(other, oriented.as_ref());
                    }
                    Transition::Stop => handler.stop_collision(other),
                }
            }
        }
    }

    /// Nearest collider hit by a ray within `max_distance`, read-only.
    pub fn raycast(
        &self,
        ray: &Ray,
        max_distance: f32,
    ) -> Option<(ColliderKey, RayIntersection)> {
        let mut best: Option<(ColliderKey, RayIntersection)> = None;
        for (key, entry) in &self.entries {
            if let Some(hit) = entry.collider.shape.raycast(ray) {
                if hit.distance <= max_distance
                    && best.as_ref().map_or(true, |(_, b)| hit.distance < b.distance)
                {
                    best = Some((key, hit));
                }
            }
        }
        best
    }
}
