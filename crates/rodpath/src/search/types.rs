//! Data types for the rod search: arena nodes, membership keys, config and results.

use std::fmt;

use crate::cfg::DEFAULT_CLEARANCE;
use crate::grid::Cell;
use crate::rod::{Orientation, Rod};

/// Index of a node in the search arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Open/closed membership key. Costs are not part of it: two nodes with the
/// same key are the same search state whatever their `g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub center: Cell,
    pub orientation: Orientation,
}

/// Immutable snapshot of one search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub id: NodeId,
    pub center: Cell,
    pub orientation: Orientation,
    pub parent: Option<NodeId>,
    pub g: u64,
    pub h: u64,
    pub f: u64,
}

impl SearchNode {
    #[inline]
    pub fn key(&self) -> NodeKey {
        NodeKey {
            center: self.center,
            orientation: self.orientation,
        }
    }

    #[inline]
    pub fn rod(&self) -> Rod {
        Rod::new(self.center, self.orientation)
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Let the rod rotate in place when the clearance window is clear.
    pub allow_rotation: bool,
    /// Half-width of the rotation window (1 = 3×3 around the center).
    pub clearance: usize,
    /// Stop after this many expansions. `None` searches until the frontier
    /// is exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            clearance: DEFAULT_CLEARANCE,
            max_expansions: None,
        }
    }
}

/// Why no path was returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// The start cell is blocked.
    StartBlocked,
    /// The frontier emptied without any placement covering the goal.
    NoPath,
    /// `SearchCfg::max_expansions` was reached.
    ExpansionLimit,
}

impl SearchFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartBlocked => "start_blocked",
            Self::NoPath => "no_path",
            Self::ExpansionLimit => "expansion_limit",
        }
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveResult {
    /// Nodes from start to goal (inclusive), `None` if not found.
    pub path: Option<Vec<SearchNode>>,
    /// Steps after the first one; `-1` when no path was found.
    pub path_length: i64,
    /// Nodes popped and expanded.
    pub nodes_expanded: usize,
    pub failure: Option<SearchFailure>,
}

impl SolveResult {
    pub(crate) fn failed(reason: SearchFailure, nodes_expanded: usize) -> Self {
        Self {
            path: None,
            path_length: -1,
            nodes_expanded,
            failure: Some(reason),
        }
    }

    pub(crate) fn found(path: Vec<SearchNode>, nodes_expanded: usize) -> Self {
        let path_length = reported_length(path.len());
        Self {
            path: Some(path),
            path_length,
            nodes_expanded,
            failure: None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Path as `(center, orientation)` placements.
    pub fn rods(&self) -> Option<Vec<Rod>> {
        self.path
            .as_ref()
            .map(|nodes| nodes.iter().map(SearchNode::rod).collect())
    }
}

/// Edges minus the uncounted first move, never below zero.
#[inline]
fn reported_length(nodes: usize) -> i64 {
    (nodes as i64 - 2).max(0)
}
