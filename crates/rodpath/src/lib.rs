//! Rod-in-a-maze path search.
//!
//! A rigid 1×3 rod moves through a grid of free (`.`) and blocked (`#`)
//! cells. It slides one cell at a time along either axis, keeps its
//! orientation while moving, and may turn by 90° about its center when the
//! area around it is clear. The search looks for a short sequence of
//! placements that ends with the rod covering a target cell.
//!
//! Layout
//! - `grid`: immutable occupancy map and coordinates.
//! - `rod`: orientation and rod geometry predicates.
//! - `search`: A* engine, node arena, config and results.
//! - `maze`: validated inputs and the loader error kinds.
//! - `gen`: reproducible random mazes.

mod cfg;

pub mod api;
pub mod gen;
pub mod grid;
pub mod maze;
pub mod rod;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{Cell, CellState, Grid};
    pub use crate::maze::{Maze, MazeError};
    pub use crate::rod::{Orientation, Rod};
    pub use crate::search::{solve_maze, Pathfinder, SearchCfg, SearchFailure, SolveResult};
}
