//! Quadtree family for broad-phase 2D queries.
//!
//! One arena-backed [`QuadTree`] does the splitting, merging and querying; the
//! variants differ only in their [`Placement`] strategy and [`OwnerIndex`]:
//!
//! * [`PointQuadTree`]: point elements, always held by exactly one leaf. An
//!   element with a larger box is indexed and queried by its center.
//! * [`RegionQuadTree`]: rectangle elements, held by the shallowest quad that
//!   fully contains them. Can be bulk-built from a cell grid with
//!   [`QuadTree::add_merged_cells`].
//! * [`PositionAwareQuadTree`]: keeps an id → quad index so that
//!   [`QuadTree::position_changed`] relocates an element in O(depth).
//!
//! Elements are identified by [`SpatialElement::id`]. Trees without an owner
//! index find an element through the path its bounds lead to, so `remove`,
//! `take` and `contains` need the bounds it was added with, and an id must
//! not be added a second time under different bounds.
//!
//! The tree never observes its elements. After changing an element's bounds
//! the caller must call `position_changed` (position-aware trees) or `remove`
//! the old value before changing it and `add` it again. Skipping that leaves
//! queries answering against the bounds the tree last saw, without any error.

mod api;
mod config;
mod core;
mod grid_merge;
mod maintenance;
mod owner_index;
mod placement;
mod query_rect;
mod query_segment;
mod types;

pub use api::QuadInfo;
pub use config::Config;
pub use grid_merge::{merge_cells, CellGrid, CellMask, GridLayout};
pub use owner_index::{NoOwnerIndex, OwnerIndex, OwnerMap};
pub use placement::{Placement, PointPlacement, RegionPlacement};

use crate::collision_detection;
use crate::error::QuadtreeResult;
use common::shapes::{Boundable, LineSegmentLike, Rectangle, SpatialElement};
use smallvec::smallvec;
use std::marker::PhantomData;
use tracing::{debug, error, trace, warn};
use types::*;

pub struct QuadTree<E, P = RegionPlacement, O = NoOwnerIndex> {
    nodes: Vec<Node<E>>,
    free_nodes: Vec<u32>,
    element_limit: usize,
    max_depth: u32,
    min_size: f32,
    len: usize,
    owners: O,
    placement: PhantomData<P>,
}

pub type PointQuadTree<E> = QuadTree<E, PointPlacement>;

pub type RegionQuadTree<E> = QuadTree<E, RegionPlacement>;

pub type PositionAwareQuadTree<E, P = RegionPlacement> =
    QuadTree<E, P, OwnerMap<<E as SpatialElement>::Id>>;

struct Node<E> {
    region: QuadRegion,
    parent: u32,
    // All zero for a leaf; the root is nobody's child so 0 is free as a marker.
    children: [u32; 4],
    depth: u32,
    entries: Vec<NodeEntry<E>>,
}

impl<E> Node<E> {
    fn new(region: QuadRegion, parent: u32, depth: u32) -> Self {
        Self {
            region,
            parent,
            children: [0; 4],
            depth,
            entries: Vec::new(),
        }
    }

    // Entries are already drained when a node is released, so their
    // allocation is reused.
    fn reset(&mut self, region: QuadRegion, parent: u32, depth: u32) {
        debug_assert!(self.entries.is_empty());
        self.region = region;
        self.parent = parent;
        self.children = [0; 4];
        self.depth = depth;
    }

    #[inline(always)]
    fn is_leaf(&self) -> bool {
        self.children[3] == 0
    }

    #[inline(always)]
    fn parent(&self) -> Option<u32> {
        if self.parent == NO_PARENT {
            None
        } else {
            Some(self.parent)
        }
    }
}
