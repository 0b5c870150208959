use super::*;

impl<E, P> QuadTree<E, P, OwnerMap<E::Id>>
where
    E: SpatialElement,
    P: Placement,
{
    /// Tells the tree that the element with `element`'s id now has
    /// `element`'s bounds. The stored handle is replaced by `element`.
    ///
    /// Returns `false` if the id is not in the tree. When the element still
    /// belongs to its quad only the cached bounds change; otherwise it moves
    /// down from the lowest ancestor that still covers the new bounds, and the
    /// quad it left is compacted.
    pub fn position_changed(&mut self, element: E) -> bool {
        let id = element.id();
        let owner = match self.owners.lookup(id) {
            Some(owner) => owner,
            None => return false,
        };
        let slot = match self.slot_of(owner, id) {
            Some(slot) => slot,
            None => {
                self.report_corruption(id, owner);
                return false;
            }
        };
        let extent = match Self::extent_of(&element) {
            Some(extent) => extent,
            None => {
                warn!(?id, "ignored position change to non-finite or inverted bounds");
                return false;
            }
        };

        let target = self.descend(self.lowest_owning_ancestor(owner, &extent), &extent);
        if target == owner {
            self.nodes[owner as usize].entries[slot] = NodeEntry { extent, element };
            return true;
        }

        self.nodes[owner as usize].entries.swap_remove(slot);
        self.push_entry(target, NodeEntry { extent, element });
        trace!(?id, from = owner, to = target, "relocated element");
        self.split_overfull(target);
        self.compact_from(owner);
        true
    }

    /// Applies [`QuadTree::position_changed`] to each element and returns how
    /// many were tracked.
    pub fn position_changed_batch<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = E>,
    {
        elements
            .into_iter()
            .map(|element| self.position_changed(element) as usize)
            .sum()
    }

    /// The quads currently holding `element`. Empty if it is not tracked.
    pub fn quads_for(&self, element: &E) -> Vec<QuadInfo> {
        self.owners
            .lookup(element.id())
            .map(|quad| self.quad_info(quad))
            .into_iter()
            .collect()
    }

    // Climbs from `quad` until the parent would route `extent` into the
    // current quad. The root owns everything.
    fn lowest_owning_ancestor(&self, quad: u32, extent: &RectExtent) -> u32 {
        let mut quad = quad;
        while let Some(parent) = self.nodes[quad as usize].parent() {
            let parent_node = &self.nodes[parent as usize];
            match P::child_for(&parent_node.region, extent) {
                Some(index) if parent_node.children[index] == quad => return quad,
                _ => quad = parent,
            }
        }
        quad
    }
}
