use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inside(outer: &Rectangle, inner: &Rectangle) -> bool {
    outer.min_x() <= inner.min_x()
        && outer.max_x() >= inner.max_x()
        && outer.min_y() <= inner.min_y()
        && outer.max_y() >= inner.max_y()
}

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 6.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
}

#[test]
fn test_boundable_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.min_x(), 2.0);
    assert_eq!(rect.min_y(), 3.0);
    assert_eq!(rect.max_x(), 6.0);
    assert_eq!(rect.max_y(), 9.0);
    assert_eq!(rect.center_x(), 4.0);
    assert_eq!(rect.center_y(), 6.0);
}

#[test]
fn test_boundable_point_is_degenerate() {
    let point = Point::new(7.0, -2.0);
    assert_eq!(Boundable::width(&point), 0.0);
    assert_eq!(Boundable::height(&point), 0.0);
    assert_eq!(point.center_x(), 7.0);
    assert_eq!(point.center_y(), -2.0);
}

#[test]
fn test_from_min_max() {
    let rect = Rectangle::from_min_max(1.0, 2.0, 5.0, 10.0);
    assert_eq!(rect, Rectangle::new(1.0, 2.0, 4.0, 8.0));
}

#[test]
fn test_intersects_touching_edges() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Rectangle::new(10.0, 0.0, 5.0, 5.0)));
    assert!(a.intersects(&Rectangle::new(-5.0, -5.0, 6.0, 6.0)));
    assert!(!a.intersects(&Rectangle::new(10.5, 0.0, 5.0, 5.0)));
}

#[test]
fn test_line_segment_end_points() {
    let segment = LineSegment::new(10.0, 2.0, 4.0, 8.0);
    assert_eq!(segment.start(), Point::new(10.0, 2.0));
    assert_eq!(segment.end(), Point::new(4.0, 8.0));
}

#[test]
fn test_get_random_point_inside() {
    let rect = Rectangle::new(2.0, 3.0, 6.0, 8.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..10 {
        let (x, y) = rect.get_random_point_inside(&mut rng);
        assert!(x >= rect.left() && x <= rect.right());
        assert!(y >= rect.top() && y <= rect.bottom());
    }
}

#[test]
fn test_get_random_rectangle_inside() {
    let rect = Rectangle::new(-50.0, 10.0, 100.0, 40.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);

    for _ in 0..100 {
        let inner = rect.get_random_rectangle_inside(16.0, &mut rng);
        assert!(inner.width() <= 16.0);
        assert!(inner.height() <= 16.0);
        assert!(inside(&rect, &inner));
    }
}

#[test]
fn test_get_random_rectangle_inside_small_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 2.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let inner = rect.get_random_rectangle_inside(10.0, &mut rng);
    // The generated size should be clamped to the rectangle.
    assert!(inner.width() <= 2.0);
    assert!(inner.height() <= 2.0);
    assert!(inside(&rect, &inner));
}
