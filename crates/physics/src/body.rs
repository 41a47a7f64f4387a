//! # Bodies
//!
//! A [`Body`] is an axis-aligned rectangle attached to a position. The world
//! owns every body and hands out [`BodyHandle`]s; gameplay code hooks into the
//! solver by attaching a [`BodyHooks`] implementation.

use std::fmt;

use crate::collision::CollisionEvent;
use crate::types::{Rect, Vec2};

/// Opaque reference to a body stored in a [`PhysicsWorld`](crate::PhysicsWorld).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-body callbacks invoked by the solver.
///
/// Both methods default to doing nothing, so an implementation only overrides
/// what it cares about. A body without hooks is equally valid.
pub trait BodyHooks {
    /// Called synchronously for every correction this body takes part in.
    fn on_collide(&mut self, _event: &CollisionEvent) {}

    /// Called once per step after every dynamic body has been resolved.
    fn physics_update(&mut self, _body: &mut Body) {}
}

pub struct Body {
    pub position: Vec2,
    /// Position at the end of the previous step. The solver probes each axis
    /// with the other axis held at this value.
    pub previous_position: Vec2,
    /// Shape relative to `position`.
    pub local_bounds: Rect,
    immovable: bool,
    hooks: Option<Box<dyn BodyHooks>>,
}

impl Body {
    #[must_use]
    pub fn new(position: Vec2, local_bounds: Rect) -> Self {
        Self {
            position,
            previous_position: position,
            local_bounds,
            immovable: false,
            hooks: None,
        }
    }

    /// A movable body whose bounds start at `position` and span `width` x `height`.
    #[must_use]
    pub fn movable(position: Vec2, width: f32, height: f32) -> Self {
        Self::new(position, Rect::from_origin_size(Vec2::ZERO, width, height))
    }

    #[must_use]
    pub fn immovable(position: Vec2, width: f32, height: f32) -> Self {
        Self::movable(position, width, height).with_immovable(true)
    }

    #[must_use]
    pub fn with_immovable(mut self, immovable: bool) -> Self {
        self.immovable = immovable;
        self
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: impl BodyHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// Movability can only be changed through
    /// [`PhysicsWorld::set_immovable`](crate::PhysicsWorld::set_immovable) once
    /// the body is stored, so the registries stay consistent.
    #[must_use]
    pub const fn is_immovable(&self) -> bool {
        self.immovable
    }

    pub(crate) fn set_immovable_flag(&mut self, immovable: bool) {
        self.immovable = immovable;
    }

    #[must_use]
    pub fn world_rect(&self) -> Rect {
        self.local_bounds.translated(self.position)
    }

    /// Bounds placed at an arbitrary position instead of `self.position`.
    #[must_use]
    pub fn rect_at(&self, x: f32, y: f32) -> Rect {
        self.local_bounds.translated(Vec2::new(x, y))
    }

    #[must_use]
    pub fn has_hooks(&self) -> bool {
        self.hooks.is_some()
    }

    pub fn set_hooks(&mut self, hooks: Option<Box<dyn BodyHooks>>) {
        self.hooks = hooks;
    }

    pub(crate) fn notify(&mut self, event: &CollisionEvent) {
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_collide(event);
        }
    }

    pub(crate) fn run_physics_update(&mut self) {
        // Detach the hooks so they can borrow the body mutably.
        if let Some(mut hooks) = self.hooks.take() {
            hooks.physics_update(self);
            if self.hooks.is_none() {
                self.hooks = Some(hooks);
            }
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("position", &self.position)
            .field("previous_position", &self.previous_position)
            .field("local_bounds", &self.local_bounds)
            .field("immovable", &self.immovable)
            .field("has_hooks", &self.hooks.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Drift(Vec2);

    impl BodyHooks for Drift {
        fn physics_update(&mut self, body: &mut Body) {
            body.position += self.0;
        }
    }

    #[test]
    fn world_rect_follows_position() {
        let mut body = Body::movable(Vec2::new(1.0, 2.0), 1.0, 1.0);
        assert!((body.world_rect().x_min() - 1.0).abs() < 1e-6);
        body.position.x = 5.0;
        assert!((body.world_rect().x_max() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn physics_update_keeps_hooks_attached() {
        let mut body = Body::movable(Vec2::ZERO, 1.0, 1.0).with_hooks(Drift(Vec2::RIGHT));
        body.run_physics_update();
        body.run_physics_update();
        assert!(body.has_hooks());
        assert!((body.position.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn hooks_may_replace_themselves() {
        struct Once(Rc<Cell<u32>>);
        impl BodyHooks for Once {
            fn physics_update(&mut self, body: &mut Body) {
                self.0.set(self.0.get() + 1);
                body.set_hooks(Some(Box::new(Drift(Vec2::UP))));
            }
        }

        let calls = Rc::new(Cell::new(0));
        let mut body = Body::movable(Vec2::ZERO, 1.0, 1.0).with_hooks(Once(Rc::clone(&calls)));
        body.run_physics_update();
        body.run_physics_update();
        assert_eq!(calls.get(), 1);
        assert!((body.position.y - 1.0).abs() < 1e-6);
    }
}
