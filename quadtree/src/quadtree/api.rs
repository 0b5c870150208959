use super::*;

/// Snapshot of one quad, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadInfo {
    pub region: Rectangle,
    pub depth: usize,
    pub is_leaf: bool,
    /// Elements held directly by this quad, not by its descendants.
    pub element_count: usize,
}

impl<E, P, O> QuadTree<E, P, O>
where
    E: SpatialElement,
    P: Placement,
    O: OwnerIndex<E::Id>,
{
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn region(&self) -> Rectangle {
        self.nodes[ROOT as usize].region.to_rectangle()
    }

    pub fn element_limit(&self) -> usize {
        self.element_limit
    }

    /// Number of leaf quads: 1 for an unsplit tree, +3 per split.
    pub fn total_quads(&self) -> usize {
        let mut leaves = 0;
        self.walk(|node| {
            if node.is_leaf() {
                leaves += 1;
            }
        });
        leaves
    }

    /// Live quads, leaves and inner quads alike.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_nodes.len()
    }

    pub fn all_elements(&self, elements: &mut Vec<E>)
    where
        E: Clone,
    {
        self.for_each_element(|element| elements.push(element.clone()));
    }

    pub fn for_each_element<F>(&self, mut f: F)
    where
        F: FnMut(&E),
    {
        self.walk(|node| node.entries.iter().for_each(|entry| f(&entry.element)));
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.walk(|node| bounding_boxes.push(node.region.to_rectangle()));
    }

    pub(crate) fn quad_info(&self, quad: u32) -> QuadInfo {
        let node = &self.nodes[quad as usize];
        QuadInfo {
            region: node.region.to_rectangle(),
            depth: node.depth as usize,
            is_leaf: node.is_leaf(),
            element_count: node.entries.len(),
        }
    }

    // Free slots are not reachable from the root, so they are skipped.
    fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&Node<E>),
    {
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(quad) = stack.pop() {
            let node = &self.nodes[quad as usize];
            f(node);
            if !node.is_leaf() {
                stack.extend_from_slice(&node.children);
            }
        }
    }
}
