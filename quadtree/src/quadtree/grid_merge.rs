use super::*;
use crate::error::QuadtreeError;
use fixedbitset::FixedBitSet;

/// A rectangular grid of on/off cells, addressed by column and row from the
/// top-left corner.
pub trait CellGrid {
    fn columns(&self) -> usize;
    fn rows(&self) -> usize;
    fn is_active(&self, column: usize, row: usize) -> bool;
}

/// Bit-per-cell [`CellGrid`], stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMask {
    columns: usize,
    rows: usize,
    cells: FixedBitSet,
}

impl CellMask {
    /// All cells inactive.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: FixedBitSet::with_capacity(columns * rows),
        }
    }

    pub fn from_fn<F>(columns: usize, rows: usize, mut active: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut mask = Self::new(columns, rows);
        for row in 0..rows {
            for column in 0..columns {
                if active(column, row) {
                    mask.cells.insert(row * columns + column);
                }
            }
        }
        mask
    }

    /// Panics if the cell is outside the grid.
    pub fn set(&mut self, column: usize, row: usize, active: bool) {
        assert!(
            column < self.columns && row < self.rows,
            "cell ({}, {}) outside {}x{} grid",
            column,
            row,
            self.columns,
            self.rows
        );
        self.cells.set(row * self.columns + column, active);
    }

    pub fn active_count(&self) -> usize {
        self.cells.count_ones(..)
    }
}

impl CellGrid for CellMask {
    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn is_active(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows && self.cells[row * self.columns + column]
    }
}

/// Where a grid sits in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    origin_x: f32,
    origin_y: f32,
    cell_width: f32,
    cell_height: f32,
}

impl GridLayout {
    pub fn new(
        origin_x: f32,
        origin_y: f32,
        cell_width: f32,
        cell_height: f32,
    ) -> QuadtreeResult<Self> {
        let valid = origin_x.is_finite()
            && origin_y.is_finite()
            && cell_width.is_finite()
            && cell_height.is_finite()
            && cell_width > 0.0
            && cell_height > 0.0;
        if !valid {
            return Err(QuadtreeError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
        })
    }

    /// World rectangle covering `columns` x `rows` cells starting at
    /// (`column`, `row`).
    pub fn span(&self, column: usize, row: usize, columns: usize, rows: usize) -> Rectangle {
        Rectangle::new(
            self.origin_x + column as f32 * self.cell_width,
            self.origin_y + row as f32 * self.cell_height,
            columns as f32 * self.cell_width,
            rows as f32 * self.cell_height,
        )
    }
}

/// Greedily merges the active cells of `grid` into rectangles and appends
/// them to `out`.
///
/// Cells are scanned row-major. Each unclaimed active cell starts a run that
/// grows right, then the run grows down while the whole next row segment is
/// active and unclaimed. Every active cell ends up in exactly one rectangle.
pub fn merge_cells<G>(grid: &G, layout: &GridLayout, out: &mut Vec<Rectangle>)
where
    G: CellGrid + ?Sized,
{
    let columns = grid.columns();
    let rows = grid.rows();
    let mut claimed = FixedBitSet::with_capacity(columns * rows);
    let free = |claimed: &FixedBitSet, column: usize, row: usize| {
        !claimed[row * columns + column] && grid.is_active(column, row)
    };

    for row in 0..rows {
        for column in 0..columns {
            if !free(&claimed, column, row) {
                continue;
            }
            let mut width = 1;
            while column + width < columns && free(&claimed, column + width, row) {
                width += 1;
            }
            let mut height = 1;
            while row + height < rows
                && (column..column + width).all(|c| free(&claimed, c, row + height))
            {
                height += 1;
            }
            for covered in row..row + height {
                let start = covered * columns + column;
                claimed.insert_range(start..start + width);
            }
            out.push(layout.span(column, row, width, height));
        }
    }
}

impl<E, O> QuadTree<E, RegionPlacement, O>
where
    E: SpatialElement,
    O: OwnerIndex<E::Id>,
{
    /// Bulk-adds the active cells of `grid` as merged rectangles, one element
    /// per rectangle built by `make_element`. Returns how many were added.
    pub fn add_merged_cells<G, F>(
        &mut self,
        grid: &G,
        layout: &GridLayout,
        mut make_element: F,
    ) -> usize
    where
        G: CellGrid + ?Sized,
        F: FnMut(Rectangle) -> E,
    {
        let mut rects = Vec::new();
        merge_cells(grid, layout, &mut rects);
        let merged = rects.len();
        let mut added = 0;
        for rect in rects {
            if self.add(make_element(rect)) {
                added += 1;
            }
        }
        debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            merged,
            added,
            "added merged grid cells"
        );
        added
    }
}
