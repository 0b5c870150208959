use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Boundable, Point, Rectangle};
use smallvec::SmallVec;

pub(crate) const ROOT: u32 = 0;
pub(crate) const NO_PARENT: u32 = u32::MAX;
pub(crate) const QUERY_STACK_INLINE: usize = 64;

pub(crate) const NW: usize = 0;
pub(crate) const NE: usize = 1;
pub(crate) const SW: usize = 2;
pub(crate) const SE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RectExtent {
    pub(crate) min_x: f32,
    pub(crate) min_y: f32,
    pub(crate) max_x: f32,
    pub(crate) max_y: f32,
}

impl RectExtent {
    #[inline(always)]
    pub(crate) fn from_bounds<B: Boundable + ?Sized>(bounds: &B) -> Self {
        Self {
            min_x: bounds.min_x(),
            min_y: bounds.min_y(),
            max_x: bounds.max_x(),
            max_y: bounds.max_y(),
        }
    }

    #[inline(always)]
    pub(crate) fn from_corners((min, max): (Point, Point)) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    #[inline(always)]
    pub(crate) fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

impl Boundable for RectExtent {
    #[inline(always)]
    fn min_x(&self) -> f32 {
        self.min_x
    }

    #[inline(always)]
    fn min_y(&self) -> f32 {
        self.min_y
    }

    #[inline(always)]
    fn max_x(&self) -> f32 {
        self.max_x
    }

    #[inline(always)]
    fn max_y(&self) -> f32 {
        self.max_y
    }
}

/// Quad region stored as edges rather than center and half size, so the four
/// children tile the parent exactly: a midline is computed once and shared by
/// both neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct QuadRegion {
    pub(crate) min_x: f32,
    pub(crate) min_y: f32,
    pub(crate) max_x: f32,
    pub(crate) max_y: f32,
}

impl QuadRegion {
    pub(crate) fn from_rect(rect: &Rectangle) -> QuadtreeResult<Self> {
        validate_region(rect)?;
        Ok(Self {
            min_x: rect.min_x(),
            min_y: rect.min_y(),
            max_x: rect.max_x(),
            max_y: rect.max_y(),
        })
    }

    #[inline(always)]
    pub(crate) fn mid_x(&self) -> f32 {
        (self.min_x + self.max_x) * 0.5
    }

    #[inline(always)]
    pub(crate) fn mid_y(&self) -> f32 {
        (self.min_y + self.max_y) * 0.5
    }

    #[inline(always)]
    pub(crate) fn child(&self, index: usize) -> QuadRegion {
        debug_assert!(index <= SE, "quad child index {} out of range", index);
        let mid_x = self.mid_x();
        let mid_y = self.mid_y();
        match index {
            NW => QuadRegion {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: mid_x,
                max_y: mid_y,
            },
            NE => QuadRegion {
                min_x: mid_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: mid_y,
            },
            SW => QuadRegion {
                min_x: self.min_x,
                min_y: mid_y,
                max_x: mid_x,
                max_y: self.max_y,
            },
            _ => QuadRegion {
                min_x: mid_x,
                min_y: mid_y,
                max_x: self.max_x,
                max_y: self.max_y,
            },
        }
    }

    pub(crate) fn to_rectangle(self) -> Rectangle {
        Rectangle::from_min_max(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl Boundable for QuadRegion {
    #[inline(always)]
    fn min_x(&self) -> f32 {
        self.min_x
    }

    #[inline(always)]
    fn min_y(&self) -> f32 {
        self.min_y
    }

    #[inline(always)]
    fn max_x(&self) -> f32 {
        self.max_x
    }

    #[inline(always)]
    fn max_y(&self) -> f32 {
        self.max_y
    }

    #[inline(always)]
    fn center_x(&self) -> f32 {
        self.mid_x()
    }

    #[inline(always)]
    fn center_y(&self) -> f32 {
        self.mid_y()
    }
}

/// An element as held by a quad: the handle plus the bounds it had when the
/// tree last saw it.
#[derive(Clone, Debug)]
pub(crate) struct NodeEntry<E> {
    pub(crate) extent: RectExtent,
    pub(crate) element: E,
}

pub(crate) type NodeStack = SmallVec<[u32; QUERY_STACK_INLINE]>;

pub(crate) fn validate_region(rect: &Rectangle) -> QuadtreeResult<()> {
    let finite = rect.x.is_finite()
        && rect.y.is_finite()
        && rect.width.is_finite()
        && rect.height.is_finite();
    if !finite || rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(QuadtreeError::InvalidRegion {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}

pub(crate) fn validate_element_limit(limit: usize) -> QuadtreeResult<()> {
    if limit == 0 {
        return Err(QuadtreeError::InvalidElementLimit { limit });
    }
    Ok(())
}

pub(crate) fn validate_min_size(min_size: f32) -> QuadtreeResult<()> {
    if !(min_size.is_finite() && min_size >= 0.0) {
        return Err(QuadtreeError::InvalidMinSize { min_size });
    }
    Ok(())
}
