use super::*;

impl<E, P, O> QuadTree<E, P, O>
where
    E: SpatialElement,
    P: Placement,
    O: OwnerIndex<E::Id>,
{
    pub fn new(region: Rectangle, element_limit: usize) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::with_element_limit(element_limit))
    }

    pub fn new_with_config(region: Rectangle, config: Config) -> QuadtreeResult<Self> {
        let root_region = QuadRegion::from_rect(&region)?;
        validate_element_limit(config.element_limit)?;
        validate_min_size(config.min_size)?;
        let mut nodes = Vec::with_capacity(config.pool_size.max(1));
        nodes.push(Node::new(root_region, NO_PARENT, 0));
        Ok(Self {
            nodes,
            free_nodes: Vec::new(),
            element_limit: config.element_limit,
            max_depth: u32::try_from(config.max_depth).unwrap_or(u32::MAX),
            min_size: config.min_size,
            len: 0,
            owners: O::default(),
            placement: PhantomData,
        })
    }

    /// Adds `element` unless an element with the same id is already present.
    ///
    /// Returns `false` for duplicates, for elements outside the tree's region
    /// (points must lie inside it, rectangles must at least touch it) and for
    /// non-finite bounds.
    ///
    /// Without an owner index duplicates are only looked for along the path
    /// `element`'s bounds lead to. Adding an id that is already present under
    /// other bounds is a caller error: debug builds panic on it, release
    /// builds store a second entry.
    pub fn add(&mut self, element: E) -> bool {
        let extent = match Self::extent_of(&element) {
            Some(extent) => extent,
            None => {
                warn!(id = ?element.id(), "rejected element with non-finite or inverted bounds");
                return false;
            }
        };
        if !P::accepts(&self.nodes[ROOT as usize].region, &extent) {
            return false;
        }
        if self.locate(element.id(), &extent).is_some() {
            return false;
        }
        if cfg!(debug_assertions) && !O::TRACKING {
            self.assert_not_held(element.id());
        }
        let quad = self.descend(ROOT, &extent);
        self.push_entry(quad, NodeEntry { extent, element });
        self.len += 1;
        self.split_overfull(quad);
        true
    }

    /// Removes the element with `element`'s id. Returns `false` if absent.
    pub fn remove(&mut self, element: &E) -> bool {
        self.take(element).is_some()
    }

    /// Removes the element with `element`'s id and hands back the stored value.
    ///
    /// Without an owner index the element is searched along the path its
    /// current bounds lead to, so those must be the bounds it was added with.
    pub fn take(&mut self, element: &E) -> Option<E> {
        let id = element.id();
        let (quad, slot) = self.locate(id, &Self::extent_of(element)?)?;
        let entry = self.nodes[quad as usize].entries.swap_remove(slot);
        self.owners.forget(id);
        self.len -= 1;
        self.compact_from(quad);
        Some(entry.element)
    }

    pub fn contains(&self, element: &E) -> bool {
        Self::extent_of(element)
            .and_then(|extent| self.locate(element.id(), &extent))
            .is_some()
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[ROOT as usize];
        root.entries.clear();
        root.children = [0; 4];
        self.free_nodes.clear();
        self.owners.clear();
        self.len = 0;
    }

    /// Bounds the tree keeps for `element`, or `None` when its box is not
    /// finite or is inverted.
    #[inline(always)]
    pub(crate) fn extent_of(element: &E) -> Option<RectExtent> {
        let extent = RectExtent::from_corners(P::footprint(element));
        (RectExtent::from_bounds(element).is_valid() && extent.is_valid()).then_some(extent)
    }

    pub(crate) fn locate(&self, id: E::Id, extent: &RectExtent) -> Option<(u32, usize)> {
        if O::TRACKING {
            let quad = self.owners.lookup(id)?;
            let slot = self.slot_of(quad, id);
            if slot.is_none() {
                self.report_corruption(id, quad);
            }
            return slot.map(|slot| (quad, slot));
        }
        let mut quad = ROOT;
        loop {
            if let Some(slot) = self.slot_of(quad, id) {
                return Some((quad, slot));
            }
            let node = &self.nodes[quad as usize];
            if node.is_leaf() {
                return None;
            }
            quad = node.children[P::child_for(&node.region, extent)?];
        }
    }

    fn assert_not_held(&self, id: E::Id) {
        let holder = self
            .nodes
            .iter()
            .position(|node| node.entries.iter().any(|entry| entry.element.id() == id));
        if let Some(quad) = holder {
            error!(?id, quad, "element added again under different bounds");
            panic!("element {:?} is already held by quad {}", id, quad);
        }
    }

    #[inline(always)]
    pub(crate) fn slot_of(&self, quad: u32, id: E::Id) -> Option<usize> {
        self.nodes[quad as usize]
            .entries
            .iter()
            .position(|entry| entry.element.id() == id)
    }

    #[cold]
    pub(crate) fn report_corruption(&self, id: E::Id, quad: u32) {
        error!(?id, quad, "owner index points at a quad that does not hold the element");
        #[cfg(debug_assertions)]
        panic!("owner index corrupted: quad {} does not hold {:?}", quad, id);
    }

    /// Walks down from `quad` to the quad that should hold `extent`.
    pub(crate) fn descend(&self, quad: u32, extent: &RectExtent) -> u32 {
        let mut quad = quad;
        loop {
            let node = &self.nodes[quad as usize];
            if node.is_leaf() {
                return quad;
            }
            match P::child_for(&node.region, extent) {
                Some(index) => quad = node.children[index],
                None => return quad,
            }
        }
    }

    #[inline(always)]
    pub(crate) fn push_entry(&mut self, quad: u32, entry: NodeEntry<E>) {
        self.owners.record(entry.element.id(), quad);
        self.nodes[quad as usize].entries.push(entry);
    }

    /// Splits `quad` while it is an over-full leaf, then does the same for the
    /// children that received its elements.
    pub(crate) fn split_overfull(&mut self, quad: u32) {
        let mut stack: NodeStack = smallvec![quad];
        while let Some(quad) = stack.pop() {
            if self.should_split(quad) {
                let children = self.subdivide(quad);
                stack.extend_from_slice(&children);
            }
        }
    }

    fn should_split(&self, quad: u32) -> bool {
        let node = &self.nodes[quad as usize];
        if !node.is_leaf() || node.entries.len() <= self.element_limit {
            return false;
        }
        if node.depth >= self.max_depth {
            return false;
        }
        let region = node.region;
        let child_width = (region.max_x - region.min_x) * 0.5;
        let child_height = (region.max_y - region.min_y) * 0.5;
        if child_width < self.min_size || child_height < self.min_size {
            return false;
        }
        // No element would move down: splitting only adds empty children.
        node.entries
            .iter()
            .any(|entry| P::child_for(&region, &entry.extent).is_some())
    }

    fn subdivide(&mut self, quad: u32) -> [u32; 4] {
        let (region, depth) = {
            let node = &self.nodes[quad as usize];
            (node.region, node.depth)
        };
        let mut children = [0u32; 4];
        for (index, child) in children.iter_mut().enumerate() {
            *child = self.alloc_node(region.child(index), quad, depth + 1);
        }
        self.nodes[quad as usize].children = children;

        let mut entries = std::mem::take(&mut self.nodes[quad as usize].entries);
        let mut slot = 0;
        while slot < entries.len() {
            match P::child_for(&region, &entries[slot].extent) {
                Some(index) => {
                    let entry = entries.swap_remove(slot);
                    self.push_entry(children[index], entry);
                }
                None => slot += 1,
            }
        }
        debug!(quad, depth, kept = entries.len(), "subdivided quad");
        self.nodes[quad as usize].entries = entries;
        children
    }

    fn alloc_node(&mut self, region: QuadRegion, parent: u32, depth: u32) -> u32 {
        if let Some(index) = self.free_nodes.pop() {
            self.nodes[index as usize].reset(region, parent, depth);
            return index;
        }
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::new(region, parent, depth));
        index
    }

    /// Merges upward after `quad` lost an element, stopping at the first
    /// ancestor that still needs its children.
    pub(crate) fn compact_from(&mut self, quad: u32) {
        let node = &self.nodes[quad as usize];
        let mut current = if node.is_leaf() {
            node.parent()
        } else {
            Some(quad)
        };
        while let Some(quad) = current {
            if !self.merge_children(quad) {
                break;
            }
            current = self.nodes[quad as usize].parent();
        }
    }

    fn merge_children(&mut self, quad: u32) -> bool {
        let node = &self.nodes[quad as usize];
        if node.is_leaf() {
            return false;
        }
        let children = node.children;
        let mut total = node.entries.len();
        for &child in &children {
            let child_node = &self.nodes[child as usize];
            if !child_node.is_leaf() {
                return false;
            }
            total += child_node.entries.len();
        }
        if total > self.element_limit {
            return false;
        }

        for &child in &children {
            let mut moved = std::mem::take(&mut self.nodes[child as usize].entries);
            for entry in moved.drain(..) {
                self.push_entry(quad, entry);
            }
            self.nodes[child as usize].entries = moved;
            self.free_nodes.push(child);
        }
        self.nodes[quad as usize].children = [0; 4];
        debug!(
            quad,
            depth = self.nodes[quad as usize].depth,
            elements = total,
            "merged quad"
        );
        true
    }
}
