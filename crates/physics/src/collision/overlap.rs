//! Rectangle overlap and per-axis penetration depth.

use crate::types::Rect;

/// Tolerance shared by every overlap comparison. Rectangles that merely touch,
/// or overlap by less than this, are treated as separate.
pub const EPSILON: f32 = 1e-6;

/// Strict overlap test: edge contact does not count.
#[must_use]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x_max() > b.x_min() + EPSILON
        && a.x_min() + EPSILON < b.x_max()
        && a.y_max() > b.y_min() + EPSILON
        && a.y_min() + EPSILON < b.y_max()
}

/// Distance `a` must move to leave `b` horizontally, as `(left, right)`.
///
/// `left` is negative (push towards -x) and `right` is positive. Both are zero
/// when the rectangles do not overlap.
#[must_use]
pub fn horizontal_depth(a: &Rect, b: &Rect) -> (f32, f32) {
    if overlaps(a, b) {
        (-(a.x_max() - b.x_min()), b.x_max() - a.x_min())
    } else {
        (0.0, 0.0)
    }
}

/// Distance `a` must move to leave `b` vertically, as `(down, up)`.
#[must_use]
pub fn vertical_depth(a: &Rect, b: &Rect) -> (f32, f32) {
    if overlaps(a, b) {
        (-(a.y_max() - b.y_min()), b.y_max() - a.y_min())
    } else {
        (0.0, 0.0)
    }
}
