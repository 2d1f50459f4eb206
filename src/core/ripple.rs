use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;
use std::fmt;

/// Identifier of a single ripple. Unique within the set that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(u64);

impl fmt::Display for RippleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A click ripple drawn at `pos` and retired after the ripple lifetime.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub id: RippleId,
    pub pos: Vec2,
    pub born: Instant,
}

/// Active ripples in creation order.
///
/// Ids come from a monotonic counter, so presses landing in the same
/// millisecond still get distinct ids. `remove` hands back the ripple at most
/// once; later calls with the same id return `None`.
#[derive(Debug, Default)]
pub struct RippleSet {
    active: SmallVec<[Ripple; 8]>,
    next_id: u64,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, pos: Vec2) -> Ripple {
        let id = RippleId(self.next_id);
        self.next_id += 1;
        let ripple = Ripple {
            id,
            pos,
            born: Instant::now(),
        };
        self.active.push(ripple);
        ripple
    }

    pub fn remove(&mut self, id: RippleId) -> Option<Ripple> {
        let idx = self.active.iter().position(|r| r.id == id)?;
        Some(self.active.remove(idx))
    }

    #[inline]
    pub fn contains(&self, id: RippleId) -> bool {
        self.active.iter().any(|r| r.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.active.iter()
    }
}
