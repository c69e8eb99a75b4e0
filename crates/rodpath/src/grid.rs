//! Immutable occupancy grid.
//!
//! - `Cell`: `(x, y)` = (row, column), signed so that neighbours of border
//!   cells can be formed and rejected by bounds checks instead of underflowing.
//! - `Grid`: row-major `CellState` storage; dimensions are validated once at
//!   construction (see `cfg::{MIN_DIM, MAX_DIM}`) and never change.
//!
//! `shape()` reports counts `(rows, cols)`; valid indices are `0..rows` and
//! `0..cols`.

use std::fmt;

use crate::cfg::{BLOCKED_SYMBOL, FREE_SYMBOL, MAX_DIM, MIN_DIM};
use crate::maze::{Axis, MazeError, RangeError};

/// Grid coordinate: `x` is the row, `y` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared Euclidean distance (exact in integers).
    #[inline]
    pub fn squared_distance(self, other: Cell) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    /// Manhattan distance; used to check unit steps.
    #[inline]
    pub fn manhattan(self, other: Cell) -> i64 {
        i64::from((self.x - other.x).abs()) + i64::from((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Free,
    Blocked,
}

impl CellState {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            FREE_SYMBOL => Some(Self::Free),
            BLOCKED_SYMBOL => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Free => FREE_SYMBOL,
            Self::Blocked => BLOCKED_SYMBOL,
        }
    }
}

/// Rectangular, immutable occupancy map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>, // row-major
}

impl Grid {
    /// Build from row-major states. Rejects dimensions outside
    /// `[MIN_DIM, MAX_DIM]` and a state vector of the wrong length.
    pub fn new(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self, MazeError> {
        check_dim(Axis::Rows, rows)?;
        check_dim(Axis::Cols, cols)?;
        if cells.len() != rows * cols {
            return Err(MazeError::shape(format!(
                "expected {} cells for a {rows}x{cols} grid, got {}",
                rows * cols,
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Parse textual rows (`.` free, `#` blocked).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        check_dim(Axis::Rows, rows.len())?;
        let cols = rows[0].as_ref().chars().count();
        check_dim(Axis::Cols, cols)?;
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != cols {
                return Err(MazeError::shape(format!(
                    "row {i} has {len} cells, expected {cols} (labyrinth must be rectangular)"
                )));
            }
            for (j, c) in row.chars().enumerate() {
                let state = CellState::from_symbol(c).ok_or_else(|| {
                    MazeError::shape(format!("unknown cell symbol {c:?} at ({i}, {j})"))
                })?;
                cells.push(state);
            }
        }
        Self::new(rows.len(), cols, cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` as counts.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.rows && (cell.y as usize) < self.cols
    }

    /// State of `cell`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        if self.contains(cell) {
            Some(self.cells[cell.x as usize * self.cols + cell.y as usize])
        } else {
            None
        }
    }

    /// In bounds and free.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.get(cell) == Some(CellState::Free)
    }

    /// In bounds and blocked.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.get(cell) == Some(CellState::Blocked)
    }

    /// Number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s == CellState::Free).count()
    }

    /// Left-right reflection: column `y` becomes `cols - 1 - y`.
    pub fn mirrored(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.cells.chunks(self.cols) {
            cells.extend(row.iter().rev());
        }
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Image of `cell` under `mirrored()`.
    #[inline]
    pub fn mirror_cell(&self, cell: Cell) -> Cell {
        Cell::new(cell.x, self.cols as i32 - 1 - cell.y)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{}", s.symbol())?;
            }
        }
        Ok(())
    }
}

pub(crate) fn check_dim(axis: Axis, count: usize) -> Result<(), MazeError> {
    if (MIN_DIM..=MAX_DIM).contains(&count) {
        Ok(())
    } else {
        Err(MazeError::Range(RangeError::Dimension { axis, count }))
    }
}
