use super::*;

impl<E, P, O> QuadTree<E, P, O>
where
    E: SpatialElement,
    P: Placement,
    O: OwnerIndex<E::Id>,
{
    /// Calls `f` once for every element whose bounds touch `region`.
    ///
    /// Edges count: an element sharing only a border or a corner with the
    /// query is reported. Order is unspecified.
    pub fn for_each_within_region<B, F>(&self, region: &B, mut f: F)
    where
        B: Boundable + ?Sized,
        F: FnMut(&E),
    {
        let query = RectExtent::from_bounds(region);
        if !query.is_valid() {
            return;
        }
        // The root is always visited: it may hold elements that stick out of it.
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(quad) = stack.pop() {
            let node = &self.nodes[quad as usize];
            for entry in &node.entries {
                if collision_detection::bounds_intersect(&entry.extent, &query) {
                    f(&entry.element);
                }
            }
            if node.is_leaf() {
                continue;
            }
            for &child in &node.children {
                if collision_detection::bounds_intersect(&self.nodes[child as usize].region, &query)
                {
                    stack.push(child);
                }
            }
        }
    }

    /// Appends every element whose bounds touch `region` to `out`.
    pub fn elements_within_region<B>(&self, region: &B, out: &mut Vec<E>)
    where
        B: Boundable + ?Sized,
        E: Clone,
    {
        self.for_each_within_region(region, |element| out.push(element.clone()));
    }
}
