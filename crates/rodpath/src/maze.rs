//! Validated maze descriptions and the loader error kinds.
//!
//! A `Maze` is what the search consumes: a `Grid` plus start and end cells
//! that are known to lie inside it. Everything that can be wrong with raw
//! input is reported here, before a `Pathfinder` is ever built:
//! - `MazeError::Shape`: malformed container, ragged rows, unknown symbols,
//!   endpoints that are not coordinate pairs.
//! - `MazeError::Range`: row/column counts outside `[3, 1000]`, endpoints
//!   outside the grid.

use std::fmt;

use crate::cfg::{MAX_DIM, MIN_DIM};
use crate::grid::{Cell, Grid};

/// Grid axis, used in range diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

/// Which endpoint a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// A value outside its admissible range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// Row or column count outside `[MIN_DIM, MAX_DIM]`.
    Dimension { axis: Axis, count: usize },
    /// Start or end coordinate outside `0..=max` along `axis`.
    Endpoint {
        which: Endpoint,
        axis: Axis,
        cell: Cell,
        max: usize,
    },
}

/// Loader-level failure; aborts before any search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    Shape { reason: String },
    Range(RangeError),
}

impl MazeError {
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { reason } => write!(f, "malformed labyrinth: {reason}"),
            Self::Range(RangeError::Dimension { axis, count }) => {
                let what = match axis {
                    Axis::Rows => "rows",
                    Axis::Cols => "columns",
                };
                write!(
                    f,
                    "the number of {what} of the labyrinth must be [{MIN_DIM}, {MAX_DIM}] (current: {count})"
                )
            }
            Self::Range(RangeError::Endpoint {
                which,
                axis,
                cell,
                max,
            }) => {
                let (label, value) = match axis {
                    Axis::Rows => ("x", cell.x),
                    Axis::Cols => ("y", cell.y),
                };
                let who = match which {
                    Endpoint::Start => "starting",
                    Endpoint::End => "ending",
                };
                write!(
                    f,
                    "{who} position at {label} coordinate out of bounds (current: {value} at ({}, {}) / min-max: 0-{max})",
                    cell.x, cell.y
                )
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Grid plus in-bounds start and end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

impl Maze {
    /// Check that both endpoints lie inside `grid`.
    pub fn new(grid: Grid, start: Cell, end: Cell) -> Result<Self, MazeError> {
        check_endpoint(&grid, Endpoint::Start, start)?;
        check_endpoint(&grid, Endpoint::End, end)?;
        Ok(Self { grid, start, end })
    }

    /// Parse textual rows. Missing endpoints default to the top-left and
    /// bottom-right corners.
    pub fn parse<S: AsRef<str>>(
        rows: &[S],
        start: Option<Cell>,
        end: Option<Cell>,
    ) -> Result<Self, MazeError> {
        let grid = Grid::from_rows(rows)?;
        let start = start.unwrap_or(Cell::new(0, 0));
        let end =
            end.unwrap_or_else(|| Cell::new(grid.rows() as i32 - 1, grid.cols() as i32 - 1));
        Self::new(grid, start, end)
    }

    /// Left-right reflection of grid and endpoints.
    pub fn mirrored(&self) -> Maze {
        Maze {
            grid: self.grid.mirrored(),
            start: self.grid.mirror_cell(self.start),
            end: self.grid.mirror_cell(self.end),
        }
    }
}

fn check_endpoint(grid: &Grid, which: Endpoint, cell: Cell) -> Result<(), MazeError> {
    let (rows, cols) = grid.shape();
    let checks = [(Axis::Rows, cell.x, rows), (Axis::Cols, cell.y, cols)];
    for (axis, value, count) in checks {
        if value < 0 || value as usize >= count {
            return Err(MazeError::Range(RangeError::Endpoint {
                which,
                axis,
                cell,
                max: count - 1,
            }));
        }
    }
    Ok(())
}
