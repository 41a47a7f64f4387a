//! Candidate enumeration for the per-body solve.

use crate::body::BodyHandle;

/// Bodies the dynamic body at `index` is checked against: every static body,
/// then the dynamic bodies registered after it.
///
/// Earlier dynamic bodies were already resolved against this one during the
/// current step and are skipped, so results depend on registration order.
pub fn candidates<'a>(
    static_bodies: &'a [BodyHandle],
    dynamic_bodies: &'a [BodyHandle],
    index: usize,
) -> impl Iterator<Item = BodyHandle> + Clone + 'a {
    let later = dynamic_bodies.get(index + 1..).unwrap_or(&[]);
    static_bodies.iter().chain(later).copied()
}
