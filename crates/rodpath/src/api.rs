//! Curated surface for the command-line front end and benches.
//!
//! Everything here is also reachable through its home module; this file only
//! groups what a caller needs to load, generate and solve mazes.

// Inputs
pub use crate::grid::{Cell, CellState, Grid};
pub use crate::maze::{Axis, Endpoint, Maze, MazeError, RangeError};
// Random mazes
pub use crate::gen::{draw_maze, EndpointMode, MazeGenCfg, ReplayToken};
// Geometry
pub use crate::rod::{can_occupy, can_rotate_to, occupied_cells, Orientation, Rod};
// Search
pub use crate::search::{
    heuristic, solve_maze, solve_with_defaults, NodeId, NodeKey, Pathfinder, SearchCfg,
    SearchFailure, SearchNode, SolveResult,
};
