//! Random mazes (uniform obstacle density + replay tokens).
//!
//! Purpose
//! - Feed benches, property tests and `rodpath generate` with reproducible
//!   inputs of arbitrary size.
//!
//! Model
//! - Every cell is blocked independently with probability `density`.
//! - Endpoints are either the opposite corners or drawn uniformly.
//! - The start cell is always cleared so the search has somewhere to begin;
//!   the end cell is left as drawn.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{check_dim, Cell, CellState, Grid};
use crate::maze::{Axis, Maze, MazeError};

/// Where start and end are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointMode {
    /// Start top-left, end bottom-right.
    Corners,
    /// Both drawn uniformly over the grid.
    Uniform,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct MazeGenCfg {
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell is blocked. Clamped to [0, 1].
    pub density: f64,
    pub endpoints: EndpointMode,
}

impl Default for MazeGenCfg {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            density: 0.2,
            endpoints: EndpointMode::Corners,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw one maze. Fails only when `rows`/`cols` are outside the accepted range.
pub fn draw_maze(cfg: MazeGenCfg, tok: ReplayToken) -> Result<Maze, MazeError> {
    check_dim(Axis::Rows, cfg.rows)?;
    check_dim(Axis::Cols, cfg.cols)?;
    let mut rng = tok.to_std_rng();
    let density = cfg.density.clamp(0.0, 1.0);
    let mut cells: Vec<CellState> = (0..cfg.rows * cfg.cols)
        .map(|_| {
            if rng.gen::<f64>() < density {
                CellState::Blocked
            } else {
                CellState::Free
            }
        })
        .collect();
    let (start, end) = match cfg.endpoints {
        EndpointMode::Corners => (
            Cell::new(0, 0),
            Cell::new(cfg.rows as i32 - 1, cfg.cols as i32 - 1),
        ),
        EndpointMode::Uniform => {
            let mut pick = || {
                Cell::new(
                    rng.gen_range(0..cfg.rows.max(1)) as i32,
                    rng.gen_range(0..cfg.cols.max(1)) as i32,
                )
            };
            let start = pick();
            (start, pick())
        }
    };
    cells[start.x as usize * cfg.cols + start.y as usize] = CellState::Free;
    let grid = Grid::new(cfg.rows, cfg.cols, cells)?;
    Maze::new(grid, start, end)
}
