#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use physics::{Body, BodyHooks, CollisionEvent, Vec2};

/// Records every collision event delivered to a body.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<CollisionEvent>>>);

impl EventLog {
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

impl BodyHooks for EventLog {
    fn on_collide(&mut self, event: &CollisionEvent) {
        self.0.borrow_mut().push(*event);
    }
}

/// Moves the body by a fixed amount after every step and logs collisions.
pub struct Mover {
    pub velocity: Vec2,
    pub log: EventLog,
}

impl BodyHooks for Mover {
    fn on_collide(&mut self, event: &CollisionEvent) {
        self.log.on_collide(event);
    }

    fn physics_update(&mut self, body: &mut Body) {
        body.position += self.velocity;
    }
}

pub fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}
