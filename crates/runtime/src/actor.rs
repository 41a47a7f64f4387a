//! Body hooks used by the runner: constant drift plus contact bookkeeping.

use std::cell::Cell;
use std::rc::Rc;

use physics::{Body, BodyHooks, CollisionEvent, Vec2};
use tracing::info;

/// Shared count of collision notifications received by one body.
#[derive(Clone, Default)]
pub struct ContactCounter(Rc<Cell<u32>>);

impl ContactCounter {
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

pub struct Actor {
    name: String,
    velocity: Vec2,
    contacts: ContactCounter,
}

impl Actor {
    #[must_use]
    pub fn new(name: String, velocity: Vec2, contacts: ContactCounter) -> Self {
        Self {
            name,
            velocity,
            contacts,
        }
    }
}

impl BodyHooks for Actor {
    fn on_collide(&mut self, event: &CollisionEvent) {
        self.contacts.bump();
        if self.contacts.get() == 1 {
            info!(
                body = %self.name,
                other = %event.other,
                nx = event.normal.x,
                ny = event.normal.y,
                "first contact"
            );
        }
    }

    fn physics_update(&mut self, body: &mut Body) {
        body.position += self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::PhysicsWorld;

    #[test]
    fn actor_counts_contacts_and_drifts() {
        let contacts = ContactCounter::default();
        let mut world = PhysicsWorld::new();
        world.spawn(Body::immovable(Vec2::new(-5.0, -1.0), 10.0, 1.0));
        let a = world.spawn(Body::movable(Vec2::ZERO, 1.0, 1.0).with_hooks(Actor::new(
            "box".to_owned(),
            Vec2::new(0.0, -0.5),
            contacts.clone(),
        )));

        world.step();
        assert_eq!(contacts.get(), 0);
        assert!((world.body(a).unwrap().position.y + 0.5).abs() < 1e-6);

        world.step();
        assert_eq!(contacts.get(), 1);
    }
}
