//! # Collision Detection and Response
//!
//! Axis-aligned overlap tests, candidate enumeration, per-axis correction
//! search and positional resolution of body pairs.

mod axis;
mod broad_phase;
mod overlap;
mod response;

pub use axis::*;
pub use broad_phase::*;
pub use overlap::*;
pub use response::*;

use crate::body::BodyHandle;
use crate::types::Vec2;

/// Notification delivered to a body that took part in a correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// The body receiving the notification.
    pub this: BodyHandle,
    pub other: BodyHandle,
    /// Unit direction in which `this` was pushed.
    pub normal: Vec2,
}

impl CollisionEvent {
    #[must_use]
    pub const fn new(this: BodyHandle, other: BodyHandle, normal: Vec2) -> Self {
        Self { this, other, normal }
    }

    /// The same contact seen from `other`.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            this: self.other,
            other: self.this,
            normal: -self.normal,
        }
    }
}

/// One of the two axes the solver corrects along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit vector pointing along the positive direction of the axis.
    #[must_use]
    pub const fn direction(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::RIGHT,
            Self::Vertical => Vec2::UP,
        }
    }
}

/// Cheapest correction found along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCorrection {
    /// Signed distance the probed body must travel along the axis.
    pub depth: f32,
    /// Body whose overlap produced `depth`.
    pub partner: BodyHandle,
}
