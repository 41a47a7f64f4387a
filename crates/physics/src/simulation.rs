//! # Physics World
//!
//! [`PhysicsWorld`] owns every body and keeps two ordered registries: static
//! (immovable) bodies and dynamic (movable) ones. Only registered bodies take
//! part in a step. The order of the dynamic registry decides which body is
//! resolved first, and a body resolved earlier is never re-checked against by
//! a later one within the same step.

use tracing::{debug, warn};

use crate::body::{Body, BodyHandle};
use crate::body_set::BodySet;
use crate::collision::{candidates, overlaps};
use crate::error::PhysicsError;
use crate::steps::solve;
use crate::types::Rect;

#[derive(Default)]
pub struct PhysicsWorld {
    bodies: BodySet,
    static_bodies: Vec<BodyHandle>,
    dynamic_bodies: Vec<BodyHandle>,
}

impl PhysicsWorld {
    /// Create an empty world
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` and register it right away.
    pub fn spawn(&mut self, body: Body) -> BodyHandle {
        let handle = self.bodies.insert(body);
        self.register(handle);
        handle
    }

    /// Store `body` without registering it. It stays inert until
    /// [`add_body`](Self::add_body) is called.
    pub fn insert_disabled(&mut self, body: Body) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Register a stored body with the registry matching its movability.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] if the handle is stale and
    /// [`PhysicsError::AlreadyRegistered`] if the body is already registered.
    pub fn add_body(&mut self, handle: BodyHandle) -> Result<(), PhysicsError> {
        if !self.bodies.contains(handle) {
            return Err(PhysicsError::UnknownBody(handle));
        }
        if self.bodies.is_registered(handle) {
            warn!(%handle, "add_body on a registered body");
            return Err(PhysicsError::AlreadyRegistered(handle));
        }
        self.register(handle);
        Ok(())
    }

    /// Unregister a body without destroying it.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] if the handle is stale and
    /// [`PhysicsError::NotRegistered`] if the body is not registered.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<(), PhysicsError> {
        if !self.bodies.contains(handle) {
            return Err(PhysicsError::UnknownBody(handle));
        }
        if !self.bodies.is_registered(handle) {
            warn!(%handle, "remove_body on an unregistered body");
            return Err(PhysicsError::NotRegistered(handle));
        }
        self.unregister(handle);
        Ok(())
    }

    /// Unregister (if needed) and drop a body from the world, handing it back.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] if the handle is stale.
    pub fn despawn(&mut self, handle: BodyHandle) -> Result<Body, PhysicsError> {
        if self.bodies.is_registered(handle) {
            self.unregister(handle);
        }
        self.bodies
            .remove(handle)
            .ok_or(PhysicsError::UnknownBody(handle))
    }

    /// Change a body's movability. A registered body moves to the end of the
    /// other registry.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] if the handle is stale.
    pub fn set_immovable(&mut self, handle: BodyHandle, immovable: bool) -> Result<(), PhysicsError> {
        let body = self
            .bodies
            .get(handle)
            .ok_or(PhysicsError::UnknownBody(handle))?;
        if body.is_immovable() == immovable {
            return Ok(());
        }
        let registered = self.bodies.is_registered(handle);
        if registered {
            self.unregister(handle);
        }
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_immovable_flag(immovable);
        }
        if registered {
            self.register(handle);
        }
        Ok(())
    }

    /// Run one frame: resolve every dynamic body, then give each dynamic body
    /// its post-physics update in registry order.
    pub fn step(&mut self) {
        self.solve_all();
        for &handle in &self.dynamic_bodies {
            if let Some(body) = self.bodies.get_mut(handle) {
                body.run_physics_update();
            }
        }
    }

    /// The resolve pass of [`step`](Self::step) without the post-physics
    /// updates. Returns the number of corrections applied.
    pub fn solve_all(&mut self) -> usize {
        let applied = solve::solve_all(&mut self.bodies, &self.static_bodies, &self.dynamic_bodies);
        debug!(
            dynamic = self.dynamic_bodies.len(),
            statics = self.static_bodies.len(),
            applied,
            "solved step"
        );
        applied
    }

    /// Whether a dynamic body currently overlaps any of the bodies it would be
    /// resolved against.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::NotRegistered`] if the body is not in the dynamic
    /// registry.
    pub fn is_hitting(&self, handle: BodyHandle) -> Result<bool, PhysicsError> {
        let index = self
            .dynamic_index(handle)
            .ok_or(PhysicsError::NotRegistered(handle))?;
        let rect = self
            .bodies
            .get(handle)
            .ok_or(PhysicsError::UnknownBody(handle))?
            .world_rect();
        Ok(candidates(&self.static_bodies, &self.dynamic_bodies, index)
            .filter_map(|other| self.bodies.get(other))
            .any(|other| overlaps(&rect, &other.world_rect())))
    }

    /// Whether any registered body overlaps `rect`.
    #[must_use]
    pub fn check_rect(&self, rect: &Rect) -> bool {
        self.registered_overlapping(rect).next().is_some()
    }

    /// Registered bodies overlapping `rect`, dynamic bodies first.
    #[must_use]
    pub fn bodies_in_rect(&self, rect: &Rect) -> Vec<BodyHandle> {
        self.registered_overlapping(rect).collect()
    }

    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    #[must_use]
    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    #[must_use]
    pub fn is_registered(&self, handle: BodyHandle) -> bool {
        self.bodies.is_registered(handle)
    }

    /// Registered immovable bodies in registration order.
    #[must_use]
    pub fn static_bodies(&self) -> &[BodyHandle] {
        &self.static_bodies
    }

    /// Registered movable bodies in resolution order.
    #[must_use]
    pub fn dynamic_bodies(&self) -> &[BodyHandle] {
        &self.dynamic_bodies
    }

    /// Number of stored bodies, registered or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn registered_overlapping<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = BodyHandle> + 'a {
        self.dynamic_bodies
            .iter()
            .chain(&self.static_bodies)
            .copied()
            .filter(move |&handle| {
                self.bodies
                    .get(handle)
                    .is_some_and(|body| overlaps(rect, &body.world_rect()))
            })
    }

    fn dynamic_index(&self, handle: BodyHandle) -> Option<usize> {
        self.dynamic_bodies.iter().position(|&h| h == handle)
    }

    fn register(&mut self, handle: BodyHandle) {
        let Some(immovable) = self.bodies.get(handle).map(Body::is_immovable) else {
            return;
        };
        if immovable {
            self.static_bodies.push(handle);
        } else {
            self.dynamic_bodies.push(handle);
        }
        self.bodies.set_registered(handle, true);
        debug!(%handle, immovable, "registered body");
    }

    fn unregister(&mut self, handle: BodyHandle) {
        self.static_bodies.retain(|&h| h != handle);
        self.dynamic_bodies.retain(|&h| h != handle);
        self.bodies.set_registered(handle, false);
        debug!(%handle, "unregistered body");
    }
}
