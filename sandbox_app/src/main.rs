//! Console physics sandbox
//!
//! Drops a handful of bodies onto a static ground slab and logs the
//! collision events and final resting positions.

use impulse_engine::prelude::*;

/// Logs every collision event for the collider it is attached to.
struct LoggingHandler {
    name: &'static str,
}

impl CollisionHandler for LoggingHandler {
    fn start_collision(&mut self, other: ColliderKey, manifold: Option<&Manifold>) {
        match manifold {
            Some(m) => log::info!(
                "{}: contact started with {other:?} (depth {:.4}, normal [{:.2}, {:.2}])",
                self.name,
                m.depth,
                m.normal.x,
                m.normal.y
            ),
            None => log::info!("{}: trigger overlap started with {other:?}", self.name),
        }
    }

    fn stop_collision(&mut self, other: ColliderKey) {
        log::info!("{}: contact ended with {other:?}", self.name);
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting physics sandbox...");

    let mut world = PhysicsWorld::new();

    let ground = world.add_collision_body(Collider::new(Shape::from(Polygon::rectangle(
        Vec2::new(0.0, -0.5),
        40.0,
        1.0,
    ))));
    log::info!("Ground added: {ground:?}");

    let ball = world.add_physics_body(
        Collider::new(Shape::from(Circle::new(Vec2::new(-2.0, 6.0), 0.5))),
        RigidBody::new(1.0, Vec2::zeros()).with_material(PhysicsMaterial::rough()),
    );
    world.set_handler(ball, Box::new(LoggingHandler { name: "ball" }));

    let block = world.add_physics_body(
        Collider::new(Shape::from(Polygon::rectangle(Vec2::new(2.0, 4.0), 1.0, 1.0))),
        RigidBody::new(4.0, Vec2::zeros()).with_drag(0.1, 0.2),
    );
    world.set_handler(block, Box::new(LoggingHandler { name: "block" }));

    let bouncer = world.add_physics_body(
        Collider::new(Shape::from(Circle::new(Vec2::new(0.0, 8.0), 0.4))),
        RigidBody::new(0.5, Vec2::zeros()).with_material(PhysicsMaterial::bouncy()),
    );
    world.set_handler(bouncer, Box::new(LoggingHandler { name: "bouncer" }));

    let sensor = world.add_collision_body(Collider::trigger(Shape::from(Circle::new(
        Vec2::new(0.0, 1.0),
        1.5,
    ))));
    world.set_handler(sensor, Box::new(LoggingHandler { name: "sensor" }));

    let dt = 1.0 / 60.0;
    for frame in 0..600 {
        world.step(dt);
        if frame % 60 == 0 {
            for (name, key) in [("ball", ball), ("block", block), ("bouncer", bouncer)] {
                if let Some(body) = world.body(key) {
                    log::info!(
                        "t={:>4.1}s {name:>7}: pos [{:+.3}, {:+.3}] vel [{:+.3}, {:+.3}]",
                        frame as f32 * dt,
                        body.position.x,
                        body.position.y,
                        body.linear_velocity.x,
                        body.linear_velocity.y
                    );
                }
            }
        }
    }

    if let Some(ray) = Ray::new(Vec2::new(-10.0, 0.25), Vec2::new(1.0, 0.0)) {
        match world.raycast(&ray, 50.0) {
            Some((key, hit)) => log::info!(
                "raycast across the floor hit {key:?} at [{:.2}, {:.2}] (distance {:.2})",
                hit.point.x,
                hit.point.y,
                hit.distance
            ),
            None => log::info!("raycast found nothing"),
        }
    }

    log::info!("Sandbox finished.");
}
