//! A* search for a rod moving through a grid maze.
//!
//! Purpose
//! - Find a short sequence of rod placements from a start center to any
//!   placement whose occupied cells include the goal cell.
//!
//! Model
//! - Search states are `(center, orientation)`; `NodeKey` is that pair and is
//!   the only thing used for open/closed membership.
//! - Nodes live in an arena owned by one solve; parents are `NodeId` indices.
//! - A popped node may rotate in place when its clearance window is clear.
//!   The rotation is recorded as its own node (same center, g + 1), so it
//!   shows up as an orientation-only step in the returned path.
//! - Ranking is by `f = g + h` with `h` the squared Euclidean distance to the
//!   goal. That heuristic overestimates, so results are short but not always
//!   shortest; it is kept because the reported lengths depend on it.
//!
//! Split: `types.rs` (nodes, keys, config, results), `astar.rs` (engine).

mod astar;
mod types;

pub use astar::{heuristic, solve_maze, solve_with_defaults, Pathfinder};
pub use types::{NodeId, NodeKey, SearchCfg, SearchFailure, SearchNode, SolveResult};
