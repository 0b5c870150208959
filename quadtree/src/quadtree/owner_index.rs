use fxhash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Reverse index from element id to the quad that currently holds it.
///
/// The tree calls `record` every time an element lands in a quad (add,
/// subdivide, merge, relocation) and `forget` when it leaves the tree.
pub trait OwnerIndex<Id>: Default {
    /// `false` for indexes that keep nothing; lookups then fall back to a
    /// descent by the element's current bounds.
    const TRACKING: bool;

    fn record(&mut self, id: Id, quad: u32);
    fn forget(&mut self, id: Id);
    fn lookup(&self, id: Id) -> Option<u32>;
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOwnerIndex;

impl<Id> OwnerIndex<Id> for NoOwnerIndex {
    const TRACKING: bool = false;

    #[inline(always)]
    fn record(&mut self, _id: Id, _quad: u32) {}

    #[inline(always)]
    fn forget(&mut self, _id: Id) {}

    #[inline(always)]
    fn lookup(&self, _id: Id) -> Option<u32> {
        None
    }

    #[inline(always)]
    fn clear(&mut self) {}
}

pub struct OwnerMap<Id> {
    owners: FxHashMap<Id, u32>,
}

impl<Id> Default for OwnerMap<Id> {
    fn default() -> Self {
        Self {
            owners: FxHashMap::default(),
        }
    }
}

impl<Id: fmt::Debug> fmt::Debug for OwnerMap<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerMap")
            .field("owners", &self.owners)
            .finish()
    }
}

impl<Id: Copy + Eq + Hash> OwnerIndex<Id> for OwnerMap<Id> {
    const TRACKING: bool = true;

    #[inline(always)]
    fn record(&mut self, id: Id, quad: u32) {
        self.owners.insert(id, quad);
    }

    #[inline(always)]
    fn forget(&mut self, id: Id) {
        self.owners.remove(&id);
    }

    #[inline(always)]
    fn lookup(&self, id: Id) -> Option<u32> {
        self.owners.get(&id).copied()
    }

    fn clear(&mut self) {
        self.owners.clear();
    }
}
