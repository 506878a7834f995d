//! Plot occupancy tracking
//!
//! The grid holds one owner marker per cell and a running free-cell count so
//! the planner can skip scanning for units that can no longer fit. Owners are
//! opaque non-zero markers assigned by the caller; the grid never interprets
//! them beyond "occupied".

use ndarray::{Array2, s};

use crate::spatial::rect::Rect;

/// Marker value for an unoccupied cell
pub const FREE_CELL: u32 = 0;

/// Cell-level occupancy state for one plot
///
/// Created fresh for every generation request and discarded with it; there is
/// no cross-request state.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    /// Owner marker per cell, indexed `[row, column]`
    owners: Array2<u32>,
    /// Count of cells still holding [`FREE_CELL`]
    free_cells: usize,
}

impl OccupancyGrid {
    /// Create an empty grid of `width` columns by `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            owners: Array2::from_elem((height, width), FREE_CELL),
            free_cells: width * height,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.owners.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.owners.nrows()
    }

    /// Cells currently unoccupied
    pub const fn free_cells(&self) -> usize {
        self.free_cells
    }

    /// True when the rectangle lies fully inside the grid and every cell in
    /// it is free. Out-of-bounds rectangles are reported as not free rather
    /// than as an error.
    pub fn is_free(&self, rect: &Rect) -> bool {
        if rect.right() > self.width() || rect.bottom() > self.height() {
            return false;
        }
        self.owners
            .slice(s![rect.y..rect.bottom(), rect.x..rect.right()])
            .iter()
            .all(|&owner| owner == FREE_CELL)
    }

    /// Mark every cell of the rectangle as owned by `owner`
    ///
    /// # Panics
    ///
    /// Panics when the rectangle is not currently free or when `owner` is the
    /// [`FREE_CELL`] marker. Both indicate a planner bug, never a
    /// user-facing condition.
    pub fn occupy(&mut self, rect: &Rect, owner: u32) {
        assert!(owner != FREE_CELL, "owner marker must be non-zero");
        assert!(
            self.is_free(rect),
            "occupy() called on a non-free rectangle at ({}, {}) size {}x{}",
            rect.x,
            rect.y,
            rect.w,
            rect.h
        );
        self.owners
            .slice_mut(s![rect.y..rect.bottom(), rect.x..rect.right()])
            .fill(owner);
        self.free_cells -= rect.area();
    }

    /// Owner marker at a cell, or `None` outside the grid
    pub fn owner_at(&self, x: usize, y: usize) -> Option<u32> {
        self.owners.get([y, x]).copied()
    }
}
