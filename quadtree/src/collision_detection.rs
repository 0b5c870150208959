use common::shapes::{Boundable, LineSegmentLike};

// All predicates treat edges as closed, so touching counts.

// Check that inner is fully contained in outer
pub fn bounds_contain<A, B>(outer: &A, inner: &B) -> bool
where
    A: Boundable + ?Sized,
    B: Boundable + ?Sized,
{
    outer.min_x() <= inner.min_x()
        && outer.max_x() >= inner.max_x()
        && outer.min_y() <= inner.min_y()
        && outer.max_y() >= inner.max_y()
}

pub fn bounds_intersect<A, B>(a: &A, b: &B) -> bool
where
    A: Boundable + ?Sized,
    B: Boundable + ?Sized,
{
    a.min_x() <= b.max_x() && a.max_x() >= b.min_x() && a.min_y() <= b.max_y() && a.max_y() >= b.min_y()
}

pub fn point_in_bounds<B: Boundable + ?Sized>(x: f32, y: f32, bounds: &B) -> bool {
    x >= bounds.min_x() && x <= bounds.max_x() && y >= bounds.min_y() && y <= bounds.max_y()
}

/// Liang–Barsky clip of the segment against the box. Degenerate boxes (points,
/// zero-width rectangles) and degenerate segments are handled.
pub fn segment_intersects_bounds<S, B>(segment: &S, bounds: &B) -> bool
where
    S: LineSegmentLike + ?Sized,
    B: Boundable + ?Sized,
{
    let start = segment.start();
    let end = segment.end();
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let mut t_enter = 0.0f32;
    let mut t_exit = 1.0f32;
    let clips = [
        (-dx, start.x - bounds.min_x()),
        (dx, bounds.max_x() - start.x),
        (-dy, start.y - bounds.min_y()),
        (dy, bounds.max_y() - start.y),
    ];
    for (p, q) in clips {
        if p == 0.0 {
            // Parallel to this edge: reject when outside of it.
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t_exit {
                return false;
            }
            if t > t_enter {
                t_enter = t;
            }
        } else {
            if t < t_enter {
                return false;
            }
            if t < t_exit {
                t_exit = t;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::{LineSegment, Point, Rectangle};

    #[test]
    fn diagonal_hits_end_points_only() {
        let diagonal = LineSegment::new(0.0, 0.0, 128.0, 128.0);
        assert!(segment_intersects_bounds(&diagonal, &Point::new(0.0, 0.0)));
        assert!(segment_intersects_bounds(&diagonal, &Point::new(128.0, 128.0)));
        assert!(segment_intersects_bounds(&diagonal, &Point::new(64.0, 64.0)));
        assert!(!segment_intersects_bounds(&diagonal, &Point::new(128.0, 0.0)));
        assert!(!segment_intersects_bounds(&diagonal, &Point::new(0.0, 128.0)));
    }

    #[test]
    fn segment_crossing_box_without_end_points_inside() {
        let rect = Rectangle::new(10.0, 10.0, 10.0, 10.0);
        assert!(segment_intersects_bounds(&LineSegment::new(0.0, 15.0, 30.0, 15.0), &rect));
        assert!(segment_intersects_bounds(&LineSegment::new(15.0, 0.0, 15.0, 30.0), &rect));
        assert!(!segment_intersects_bounds(&LineSegment::new(0.0, 0.0, 30.0, 5.0), &rect));
    }

    #[test]
    fn segment_stopping_short_of_box() {
        let rect = Rectangle::new(10.0, 10.0, 10.0, 10.0);
        assert!(!segment_intersects_bounds(&LineSegment::new(0.0, 15.0, 9.0, 15.0), &rect));
        assert!(segment_intersects_bounds(&LineSegment::new(0.0, 15.0, 10.0, 15.0), &rect));
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let rect = Rectangle::new(10.0, 10.0, 10.0, 10.0);
        assert!(segment_intersects_bounds(&LineSegment::new(12.0, 12.0, 12.0, 12.0), &rect));
        assert!(!segment_intersects_bounds(&LineSegment::new(2.0, 2.0, 2.0, 2.0), &rect));
    }

    #[test]
    fn contain_and_intersect_are_closed() {
        let outer = Rectangle::new(0.0, 0.0, 64.0, 64.0);
        assert!(bounds_contain(&outer, &Rectangle::new(32.0, 32.0, 32.0, 32.0)));
        assert!(bounds_contain(&outer, &Point::new(64.0, 0.0)));
        assert!(!bounds_contain(&outer, &Rectangle::new(60.0, 60.0, 8.0, 8.0)));
        assert!(bounds_intersect(&outer, &Point::new(64.0, 64.0)));
        assert!(!bounds_intersect(&outer, &Point::new(64.5, 64.0)));
        assert!(point_in_bounds(0.0, 64.0, &outer));
    }
}
