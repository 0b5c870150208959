use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRegion {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    InvalidElementLimit { limit: usize },
    InvalidMinSize { min_size: f32 },
    InvalidCellSize { width: f32, height: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRegion {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "quadtree region must be finite with positive width and height (x: {}, y: {}, width: {}, height: {})",
                    x, y, width, height
                )
            }
            QuadtreeError::InvalidElementLimit { limit } => {
                write!(f, "element limit must be at least 1 (limit: {})", limit)
            }
            QuadtreeError::InvalidMinSize { min_size } => {
                write!(
                    f,
                    "minimum quad size must be finite and non-negative (min_size: {})",
                    min_size
                )
            }
            QuadtreeError::InvalidCellSize { width, height } => {
                write!(
                    f,
                    "grid cell size must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
