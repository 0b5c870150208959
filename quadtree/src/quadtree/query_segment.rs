use super::*;

impl<E, P, O> QuadTree<E, P, O>
where
    E: SpatialElement,
    P: Placement,
    O: OwnerIndex<E::Id>,
{
    /// Calls `f` once for every element whose bounds the segment touches,
    /// endpoints included. A zero-length segment behaves like a point query.
    pub fn for_each_intersecting_segment<S, F>(&self, segment: &S, mut f: F)
    where
        S: LineSegmentLike + ?Sized,
        F: FnMut(&E),
    {
        let start = segment.start();
        let end = segment.end();
        if !(start.x.is_finite() && start.y.is_finite() && end.x.is_finite() && end.y.is_finite())
        {
            return;
        }
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(quad) = stack.pop() {
            let node = &self.nodes[quad as usize];
            for entry in &node.entries {
                if collision_detection::segment_intersects_bounds(segment, &entry.extent) {
                    f(&entry.element);
                }
            }
            if node.is_leaf() {
                continue;
            }
            for &child in &node.children {
                let region = &self.nodes[child as usize].region;
                if collision_detection::segment_intersects_bounds(segment, region) {
                    stack.push(child);
                }
            }
        }
    }

    /// Appends every element the segment touches to `out`.
    pub fn elements_intersecting_segment<S>(&self, segment: &S, out: &mut Vec<E>)
    where
        S: LineSegmentLike + ?Sized,
        E: Clone,
    {
        self.for_each_intersecting_segment(segment, |element| out.push(element.clone()));
    }
}
