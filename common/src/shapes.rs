use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// Axis-aligned bounds of anything the index can store or be queried with.
///
/// Coordinates follow screen convention: `min_y` is the top edge and y grows
/// downward.
pub trait Boundable {
    fn min_x(&self) -> f32;
    fn min_y(&self) -> f32;
    fn max_x(&self) -> f32;
    fn max_y(&self) -> f32;

    fn width(&self) -> f32 {
        self.max_x() - self.min_x()
    }

    fn height(&self) -> f32 {
        self.max_y() - self.min_y()
    }

    fn center_x(&self) -> f32 {
        (self.min_x() + self.max_x()) * 0.5
    }

    fn center_y(&self) -> f32 {
        (self.min_y() + self.max_y()) * 0.5
    }
}

/// A straight segment between two endpoints.
pub trait LineSegmentLike {
    fn start(&self) -> Point;
    fn end(&self) -> Point;
}

/// An element the quadtree can index.
///
/// Elements are compared by `id`, never by value, so an element whose bounds
/// changed is still the same element. The tree does not watch elements: after
/// mutating an element's bounds the caller has to notify the tree.
pub trait SpatialElement: Boundable {
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Boundable for Point {
    fn min_x(&self) -> f32 {
        self.x
    }

    fn min_y(&self) -> f32 {
        self.y
    }

    fn max_x(&self) -> f32 {
        self.x
    }

    fn max_y(&self) -> f32 {
        self.y
    }
}

/// Rectangle anchored at its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Touching edges count as an intersection.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    pub fn get_random_point_inside<R: Rng>(&self, rng: &mut R) -> (f32, f32) {
        (
            self._safe_randf32(rng, self.left(), self.right()),
            self._safe_randf32(rng, self.top(), self.bottom()),
        )
    }

    /// Random rectangle of at most `max_size` per side, fully inside `self`.
    ///
    /// Offsets and sizes are whole units so the edges stay exact in `f32`.
    pub fn get_random_rectangle_inside<R: Rng>(&self, max_size: f32, rng: &mut R) -> Rectangle {
        let width = self._safe_randf32(rng, 0.0, max_size.min(self.width)).floor();
        let height = self._safe_randf32(rng, 0.0, max_size.min(self.height)).floor();
        Rectangle::new(
            self.x + self._safe_randf32(rng, 0.0, self.width - width).floor(),
            self.y + self._safe_randf32(rng, 0.0, self.height - height).floor(),
            width,
            height,
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Boundable for Rectangle {
    fn min_x(&self) -> f32 {
        self.x
    }

    fn min_y(&self) -> f32 {
        self.y
    }

    fn max_x(&self) -> f32 {
        self.x + self.width
    }

    fn max_y(&self) -> f32 {
        self.y + self.height
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

}

impl LineSegmentLike for LineSegment {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }
}
