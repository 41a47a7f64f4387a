//! Positional response for a single body pair.

use tracing::trace;

use super::CollisionEvent;
use crate::body::BodyHandle;
use crate::body_set::BodySet;
use crate::types::Vec2;

/// Share of a correction each body takes when both are movable. Slightly over
/// half so the pair ends up separated by more than [`EPSILON`](super::EPSILON)
/// after rounding.
pub const SPLIT_FACTOR: f32 = 0.50005;

/// Push `body` out of `other` by `correction`, splitting the move between the
/// two if `other` is movable, then notify both bodies.
///
/// Returns the event delivered to `body`, or `None` when either handle does
/// not resolve to a distinct stored body.
pub fn resolve(
    bodies: &mut BodySet,
    body: BodyHandle,
    other: BodyHandle,
    correction: Vec2,
) -> Option<CollisionEvent> {
    let (this_body, other_body) = bodies.pair_mut(body, other)?;

    if other_body.is_immovable() {
        this_body.position += correction;
    } else {
        let share = correction * SPLIT_FACTOR;
        this_body.position += share;
        other_body.position -= share;
    }
    trace!(%body, %other, dx = correction.x, dy = correction.y, "resolved overlap");

    let event = CollisionEvent::new(body, other, correction.normalized());
    this_body.notify(&event);
    other_body.notify(&event.mirrored());
    Some(event)
}
