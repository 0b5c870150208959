use crate::collision_detection::{bounds_contain, bounds_intersect, point_in_bounds};
use common::shapes::{Boundable, Point};

/// Decides where an element lives inside a subdivided quad.
///
/// Children are numbered NW = 0, NE = 1, SW = 2, SE = 3.
pub trait Placement {
    /// The child of `quad` that takes `element`, or `None` to keep the element
    /// at `quad` itself.
    fn child_for<Q, B>(quad: &Q, element: &B) -> Option<usize>
    where
        Q: Boundable + ?Sized,
        B: Boundable + ?Sized;

    /// Whether `add` accepts `element` into a tree rooted at `root`.
    fn accepts<Q, B>(root: &Q, element: &B) -> bool
    where
        Q: Boundable + ?Sized,
        B: Boundable + ?Sized;

    /// Min and max corners the tree records for `element`. Queries and
    /// routing only ever see these.
    #[inline(always)]
    fn footprint<B: Boundable + ?Sized>(element: &B) -> (Point, Point) {
        (
            Point::new(element.min_x(), element.min_y()),
            Point::new(element.max_x(), element.max_y()),
        )
    }
}

/// Elements are points. Anything with a larger box is indexed, queried and
/// routed by its center alone. A point on a midline goes east / south, so
/// every point inside a quad maps to exactly one child.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointPlacement;

impl Placement for PointPlacement {
    #[inline(always)]
    fn child_for<Q, B>(quad: &Q, element: &B) -> Option<usize>
    where
        Q: Boundable + ?Sized,
        B: Boundable + ?Sized,
    {
        let x = element.center_x();
        let y = element.center_y();
        // Only reachable for points that left the root through position_changed.
        if !point_in_bounds(x, y, quad) {
            return None;
        }
        let east = (x >= quad.center_x()) as usize;
        let south = (y >= quad.center_y()) as usize;
        Some(east | (south << 1))
    }

    fn accepts<Q, B>(root: &Q, element: &B) -> bool
    where
        Q: Boundable + ?Sized,
        B: Boundable + ?Sized,
    {
        point_in_bounds(element.center_x(), element.center_y(), root)
    }

    #[inline(always)]
    fn footprint<B: Boundable + ?Sized>(element: &B) -> (Point, Point) {
        let center = Point::new(element.center_x(), element.center_y());
        (center, center)
    }
}

/// Elements are rectangles. An element moves into a child only when that child
/// contains it completely; anything crossing a midline stays at the quad. When
/// an element lies exactly on a midline both neighbours contain it and the
/// lower-indexed child wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionPlacement;

impl Placement for RegionPlacement {
    #[inline(always)]
    fn child_for<Q, B>(quad: &Q, element: &B) -> Option<usize>
    where
        Q: Boundable + ?Sized,
        B: Boundable + ?Sized,
    {
        if !bounds_contain(quad, element) {
            return None;
        }
        let mid_x = quad.center_x();
        let mid_y = quad.center_y();
        let column = if element.max_x() <= mid_x {
            0
        } else if element.min_x() >= mid_x {
            1
        } else {
            return None;
        };
        let row = if element.max_y() <= mid_y {
            0
        } else if element.min_y() >= mid_y {
            1
        } else {
            return None;
        };
        Some(column | (row << 1))
    }

    fn accepts<Q, B>(root: &Q, element: &B) -> bool
    where
        Q: Boundable + ?Sized,
        B: Boundable + ?Sized,
    {
        bounds_intersect(root, element)
    }
}
