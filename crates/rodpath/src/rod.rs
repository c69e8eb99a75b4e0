//! Rod geometry: a rigid 1×3 bar described by its center and orientation.
//!
//! Conventions
//! - Horizontal extends along the column axis: `(x, y-1), (x, y), (x, y+1)`.
//! - Vertical extends along the row axis: `(x-1, y), (x, y), (x+1, y)`.
//! - Queries never fail: anything outside the grid is simply "not free", so
//!   out-of-grid centers make every predicate return `false`.

use std::fmt;

use crate::grid::{Cell, Grid};

/// Rod orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Offset from the center to one extension cell; the other is its negation.
    #[inline]
    fn half_extent(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed rod.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rod {
    pub center: Cell,
    pub orientation: Orientation,
}

impl Rod {
    #[inline]
    pub fn new(center: Cell, orientation: Orientation) -> Self {
        Self {
            center,
            orientation,
        }
    }

    #[inline]
    pub fn occupied_cells(&self) -> [Cell; 3] {
        occupied_cells(self.center, self.orientation)
    }

    #[inline]
    pub fn covers(&self, cell: Cell) -> bool {
        self.occupied_cells().contains(&cell)
    }

    #[inline]
    pub fn rotated(&self) -> Rod {
        Rod::new(self.center, self.orientation.opposite())
    }
}

/// Cells covered by a rod: first extension, center, second extension.
#[inline]
pub fn occupied_cells(center: Cell, orientation: Orientation) -> [Cell; 3] {
    let (dx, dy) = orientation.half_extent();
    [center.offset(-dx, -dy), center, center.offset(dx, dy)]
}

/// Both extension cells are inside the grid and free.
///
/// The center is deliberately not checked; callers pair this with
/// `Grid::is_free(center)` when validating a move.
pub fn can_occupy(grid: &Grid, center: Cell, orientation: Orientation) -> bool {
    let [a, _, b] = occupied_cells(center, orientation);
    grid.is_free(a) && grid.is_free(b)
}

/// Rotation in place is allowed when the square window `center ± clearance`
/// holds no blocked cell. Window cells outside the grid do not block.
///
/// The target orientation does not change the window; it is part of the
/// signature so call sites read as the move they validate.
pub fn can_rotate_to(grid: &Grid, center: Cell, _target: Orientation, clearance: usize) -> bool {
    if !grid.contains(center) {
        return false;
    }
    let r = clearance.min(i32::MAX as usize) as i32;
    let (rows, cols) = grid.shape();
    let x_lo = center.x.saturating_sub(r).max(0);
    let x_hi = center.x.saturating_add(r).min(rows as i32 - 1);
    let y_lo = center.y.saturating_sub(r).max(0);
    let y_hi = center.y.saturating_add(r).min(cols as i32 - 1);
    for x in x_lo..=x_hi {
        for y in y_lo..=y_hi {
            if grid.is_blocked(Cell::new(x, y)) {
                return false;
            }
        }
    }
    true
}
