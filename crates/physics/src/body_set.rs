//! Arena storage for bodies.

use crate::body::{Body, BodyHandle};

struct Slot {
    body: Body,
    registered: bool,
}

/// Owns every body of a world. Handles are never reused, so a stale handle
/// simply fails to resolve after its body is removed.
#[derive(Default)]
pub struct BodySet {
    slots: Vec<Option<Slot>>,
    len: usize,
}

impl BodySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, body: Body) -> BodyHandle {
        let id = self.slots.len();
        self.slots.push(Some(Slot {
            body,
            registered: false,
        }));
        self.len += 1;
        BodyHandle(id)
    }

    pub(crate) fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.slots.get_mut(handle.index())?.take()?;
        self.len -= 1;
        Some(slot.body)
    }

    #[must_use]
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slot(handle).map(|slot| &slot.body)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.slots
            .get_mut(handle.index())
            .and_then(Option::as_mut)
            .map(|slot| &mut slot.body)
    }

    /// Mutable access to two distinct bodies at once.
    pub fn pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut Body, &mut Body)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia.max(ib) >= self.slots.len() {
            return None;
        }
        let (first, second) = if ia < ib {
            let (head, tail) = self.slots.split_at_mut(ib);
            (&mut head[ia], &mut tail[0])
        } else {
            let (head, tail) = self.slots.split_at_mut(ia);
            (&mut tail[0], &mut head[ib])
        };
        match (first, second) {
            (Some(first), Some(second)) => Some((&mut first.body, &mut second.body)),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.slot(handle).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|slot| (BodyHandle(i), &slot.body)))
    }

    pub(crate) fn is_registered(&self, handle: BodyHandle) -> bool {
        self.slot(handle).is_some_and(|slot| slot.registered)
    }

    pub(crate) fn set_registered(&mut self, handle: BodyHandle, registered: bool) {
        if let Some(slot) = self.slots.get_mut(handle.index()).and_then(Option::as_mut) {
            slot.registered = registered;
        }
    }

    fn slot(&self, handle: BodyHandle) -> Option<&Slot> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }
}
