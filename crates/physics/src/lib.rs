#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # AABB Physics
//!
//! A per-frame positional collision solver for axis-aligned rectangles.
//!
//! Bodies are either movable (dynamic) or immovable (static). Every
//! [`PhysicsWorld::step`] walks the dynamic bodies in registration order and
//! pushes each one out of whatever it overlaps, along the axis that needs the
//! smaller correction first and then along the other axis if anything is left.
//! When two movable bodies overlap, the correction is split between them.
//! There are no velocities, impulses or rotations: the solver only moves
//! positions and tells the bodies involved.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Body`] holds a position, the position at the end of the
//!     previous step and a rectangle relative to the position. Gameplay code
//!     reacts to contacts through the optional [`BodyHooks`].
//! -   **World:** [`PhysicsWorld`] stores the bodies and the static/dynamic
//!     registries, and drives the per-step solve.
//! -   **Collision:** the [`collision`] module holds the overlap test, the
//!     candidate enumeration, the per-axis correction search and the pair
//!     response.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Body, PhysicsWorld, Vec2};
//!
//! let mut world = PhysicsWorld::new();
//! world.spawn(Body::immovable(Vec2::new(-5.0, -1.0), 10.0, 1.0));
//! let crate_ = world.spawn(Body::movable(Vec2::new(0.0, -0.25), 1.0, 1.0));
//!
//! world.step();
//! let landed = world.body(crate_).unwrap();
//! assert!(landed.position.y.abs() < 1e-6);
//! ```

pub mod body;
pub mod body_set;
pub mod collision;
pub mod error;
pub mod simulation;
pub mod steps;
pub mod types;

pub use body::{Body, BodyHandle, BodyHooks};
pub use body_set::BodySet;
pub use collision::{Axis, AxisCorrection, CollisionEvent, EPSILON, SPLIT_FACTOR};
pub use error::PhysicsError;
pub use simulation::PhysicsWorld;
pub use types::{Rect, Vec2};
