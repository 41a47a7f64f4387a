//! # Per-step positional solve
//!
//! Dynamic bodies are processed one at a time in registry order. Each body is
//! corrected along its cheaper axis first; a second pass then re-checks any
//! axis the body moved along and corrects what is left. Corrections are
//! written in place, so later bodies see the already-resolved positions.

use crate::body::BodyHandle;
use crate::body_set::BodySet;
use crate::collision::{candidates, check_horizontal, check_vertical, resolve, Axis, AxisCorrection};

/// Resolve every dynamic body once. Returns the number of corrections applied.
pub fn solve_all(
    bodies: &mut BodySet,
    static_bodies: &[BodyHandle],
    dynamic_bodies: &[BodyHandle],
) -> usize {
    (0..dynamic_bodies.len())
        .map(|index| solve_body(bodies, static_bodies, dynamic_bodies, index))
        .sum()
}

/// Run both passes for the dynamic body at `index` and close its step by
/// storing its position as the previous position.
#[allow(clippy::float_cmp)]
pub fn solve_body(
    bodies: &mut BodySet,
    static_bodies: &[BodyHandle],
    dynamic_bodies: &[BodyHandle],
    index: usize,
) -> usize {
    let Some(&handle) = dynamic_bodies.get(index) else {
        return 0;
    };
    let check = |bodies: &BodySet, axis| {
        check_axis(bodies, handle, axis, candidates(static_bodies, dynamic_bodies, index))
    };
    let mut applied = 0;

    let h = check(bodies, Axis::Horizontal);
    let v = check(bodies, Axis::Vertical);
    match cheaper_axis(h, v) {
        None => {
            // Nothing hit: commit x now and leave y to the second pass.
            if let Some(body) = bodies.get_mut(handle) {
                body.previous_position.x = body.position.x;
            }
        }
        Some((axis, correction)) => {
            applied += usize::from(apply(bodies, handle, axis, correction));
            if let Some(body) = bodies.get_mut(handle) {
                match axis {
                    Axis::Horizontal => body.previous_position.x = body.position.x,
                    Axis::Vertical => body.previous_position.y = body.position.y,
                }
            }
        }
    }

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let moved = bodies.get(handle).is_some_and(|body| match axis {
            Axis::Horizontal => body.position.x != body.previous_position.x,
            Axis::Vertical => body.position.y != body.previous_position.y,
        });
        if moved {
            if let Some(correction) = check(bodies, axis) {
                applied += usize::from(apply(bodies, handle, axis, correction));
            }
        }
    }

    if let Some(body) = bodies.get_mut(handle) {
        body.previous_position = body.position;
    }
    applied
}

/// Pick the first-pass axis: horizontal when it is the only hit or strictly
/// shallower than the vertical one, vertical otherwise.
fn cheaper_axis(
    h: Option<AxisCorrection>,
    v: Option<AxisCorrection>,
) -> Option<(Axis, AxisCorrection)> {
    match (h, v) {
        (None, None) => None,
        (Some(h), None) => Some((Axis::Horizontal, h)),
        (Some(h), Some(v)) if h.depth.abs() < v.depth.abs() => Some((Axis::Horizontal, h)),
        (_, Some(v)) => Some((Axis::Vertical, v)),
    }
}

fn check_axis<I>(bodies: &BodySet, handle: BodyHandle, axis: Axis, candidates: I) -> Option<AxisCorrection>
where
    I: IntoIterator<Item = BodyHandle>,
{
    let body = bodies.get(handle)?;
    match axis {
        Axis::Horizontal => check_horizontal(bodies, body, candidates),
        Axis::Vertical => check_vertical(bodies, body, candidates),
    }
}

fn apply(bodies: &mut BodySet, handle: BodyHandle, axis: Axis, correction: AxisCorrection) -> bool {
    resolve(bodies, handle, correction.partner, axis.direction() * correction.depth).is_some()
}
