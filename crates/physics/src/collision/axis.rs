//! Per-axis correction search.
//!
//! Each check probes the body with one axis at its current coordinate and the
//! other axis at its previous-step coordinate, so a horizontal move is never
//! blamed for an overlap caused by vertical motion and vice versa.

use super::{horizontal_depth, vertical_depth, AxisCorrection};
use crate::body::{Body, BodyHandle};
use crate::body_set::BodySet;
use crate::types::Rect;

/// Deepest overlap found in each direction along one axis.
#[derive(Debug, Default, Clone, Copy)]
struct Deepest {
    negative: Option<AxisCorrection>,
    positive: Option<AxisCorrection>,
}

impl Deepest {
    fn negative_depth(&self) -> f32 {
        self.negative.map_or(0.0, |c| c.depth)
    }

    fn positive_depth(&self) -> f32 {
        self.positive.map_or(0.0, |c| c.depth)
    }
}

fn scan<I>(
    bodies: &BodySet,
    probe: &Rect,
    candidates: I,
    depth: fn(&Rect, &Rect) -> (f32, f32),
) -> Deepest
where
    I: IntoIterator<Item = BodyHandle>,
{
    let mut deepest = Deepest::default();
    for partner in candidates {
        let Some(other) = bodies.get(partner) else {
            continue;
        };
        let (negative, positive) = depth(probe, &other.world_rect());
        // Strict comparisons: the earliest candidate keeps a tie.
        if negative < deepest.negative_depth() {
            deepest.negative = Some(AxisCorrection { depth: negative, partner });
        }
        if positive > deepest.positive_depth() {
            deepest.positive = Some(AxisCorrection { depth: positive, partner });
        }
    }
    deepest
}

/// Cheapest horizontal push out of every candidate, or `None` if nothing
/// overlaps. Equal magnitudes resolve to the rightward push.
#[must_use]
pub fn check_horizontal<I>(bodies: &BodySet, body: &Body, candidates: I) -> Option<AxisCorrection>
where
    I: IntoIterator<Item = BodyHandle>,
{
    let probe = body.rect_at(body.position.x, body.previous_position.y);
    let deepest = scan(bodies, &probe, candidates, horizontal_depth);
    if deepest.negative_depth().abs() < deepest.positive_depth().abs() {
        deepest.negative
    } else {
        deepest.positive
    }
}

/// Cheapest vertical push out of every candidate, or `None` if nothing
/// overlaps. Equal magnitudes resolve to the downward push.
#[must_use]
pub fn check_vertical<I>(bodies: &BodySet, body: &Body, candidates: I) -> Option<AxisCorrection>
where
    I: IntoIterator<Item = BodyHandle>,
{
    let probe = body.rect_at(body.previous_position.x, body.position.y);
    let deepest = scan(bodies, &probe, candidates, vertical_depth);
    if deepest.positive_depth().abs() < deepest.negative_depth().abs() {
        deepest.positive
    } else {
        deepest.negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;

    fn setup(others: Vec<Body>) -> (BodySet, Vec<BodyHandle>) {
        let mut bodies = BodySet::new();
        let handles = others.into_iter().map(|b| bodies.insert(b)).collect();
        (bodies, handles)
    }

    #[test]
    fn no_candidates_means_no_correction() {
        let (bodies, _) = setup(vec![]);
        let probe = Body::movable(Vec2::ZERO, 1.0, 1.0);
        assert_eq!(check_horizontal(&bodies, &probe, std::iter::empty()), None);
        assert_eq!(check_vertical(&bodies, &probe, std::iter::empty()), None);
    }

    #[test]
    fn picks_smaller_magnitude_direction() {
        let (bodies, handles) = setup(vec![Body::immovable(Vec2::new(0.8, 0.0), 2.0, 1.0)]);
        let probe = Body::movable(Vec2::ZERO, 1.0, 1.0);

        // left = -(1 - 0.8), right = 2.8 - 0
        let h = check_horizontal(&bodies, &probe, handles.clone()).unwrap();
        assert!((h.depth + 0.2).abs() < 1e-6);
        assert_eq!(h.partner, handles[0]);
    }

    #[test]
    fn deepest_overlap_in_each_direction_wins() {
        let (bodies, handles) = setup(vec![
            Body::immovable(Vec2::new(0.9, 0.0), 1.0, 1.0),
            Body::immovable(Vec2::new(0.6, 0.0), 1.0, 1.0),
        ]);
        let probe = Body::movable(Vec2::ZERO, 1.0, 1.0);

        // Deepest left is -0.4 from the second wall, deepest right is 1.9.
        let h = check_horizontal(&bodies, &probe, handles.clone()).unwrap();
        assert!((h.depth + 0.4).abs() < 1e-6);
        assert_eq!(h.partner, handles[1]);
    }

    #[test]
    fn horizontal_tie_prefers_right_and_vertical_tie_prefers_down() {
        let (bodies, handles) = setup(vec![Body::immovable(Vec2::ZERO, 1.0, 1.0)]);
        let probe = Body::movable(Vec2::ZERO, 1.0, 1.0);

        let h = check_horizontal(&bodies, &probe, handles.clone()).unwrap();
        assert!((h.depth - 1.0).abs() < 1e-6);

        let v = check_vertical(&bodies, &probe, handles).unwrap();
        assert!((v.depth + 1.0).abs() < 1e-6);
    }

    #[test]
    fn probes_use_previous_coordinate_of_other_axis() {
        let (bodies, handles) = setup(vec![Body::immovable(Vec2::new(0.0, -1.0), 1.0, 1.0)]);
        let mut probe = Body::movable(Vec2::ZERO, 1.0, 1.0);
        // Fell into the floor this step: only the vertical probe sees it.
        probe.previous_position = Vec2::new(0.0, 0.0);
        probe.position = Vec2::new(0.0, -0.3);

        assert_eq!(check_horizontal(&bodies, &probe, handles.clone()), None);
        let v = check_vertical(&bodies, &probe, handles).unwrap();
        assert!((v.depth - 0.3).abs() < 1e-5);
    }
}
