//! Best-first engine: frontier management, rotation attempts, goal test and
//! path reconstruction.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::grid::{Cell, Grid};
use crate::maze::Maze;
use crate::rod::{can_occupy, can_rotate_to, Orientation};

use super::types::{NodeId, NodeKey, SearchCfg, SearchFailure, SearchNode, SolveResult};

/// Unit moves in expansion order: +row, -row, +col, -col.
const MOVES: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squared Euclidean distance from `from` to `to`.
///
/// Overestimates the remaining number of steps, so the search leans towards
/// greedy best-first on long distances.
#[inline]
pub fn heuristic(from: Cell, to: Cell) -> u64 {
    from.squared_distance(to) as u64
}

/// Solve a validated maze.
pub fn solve_maze(maze: &Maze, cfg: SearchCfg) -> SolveResult {
    Pathfinder::with_cfg(&maze.grid, maze.start, maze.end, cfg).solve()
}

/// Solve with rotation enabled, a 3×3 clearance window and no expansion limit.
pub fn solve_with_defaults(maze: &Maze) -> SolveResult {
    solve_maze(maze, SearchCfg::default())
}

/// A* pathfinder for one (grid, start, goal) triple.
///
/// The grid is only borrowed; several pathfinders may share it across
/// threads. All mutable search state is created inside `solve`.
#[derive(Clone, Debug)]
pub struct Pathfinder<'a> {
    grid: &'a Grid,
    start: Cell,
    goal: Cell,
    cfg: SearchCfg,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a Grid, start: Cell, goal: Cell) -> Self {
        Self::with_cfg(grid, start, goal, SearchCfg::default())
    }

    pub fn with_cfg(grid: &'a Grid, start: Cell, goal: Cell, cfg: SearchCfg) -> Self {
        Self {
            grid,
            start,
            goal,
            cfg,
        }
    }

    pub fn cfg(&self) -> &SearchCfg {
        &self.cfg
    }

    /// Run the search to a terminal state.
    pub fn solve(&self) -> SolveResult {
        trace!(
            start = ?self.start,
            goal = ?self.goal,
            "rod search started"
        );
        Search::new(self).run()
    }
}

/// Frontier entry: min-`f` first, then insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Ranked {
    f: u64,
    seq: u64,
    id: NodeId,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for BinaryHeap's max-heap.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-solve state: node arena plus open and closed sets.
struct Search<'p, 'a> {
    pf: &'p Pathfinder<'a>,
    arena: Vec<SearchNode>,
    frontier: BinaryHeap<Ranked>,
    open: HashSet<NodeKey>,
    closed: HashSet<NodeKey>,
    seq: u64,
    expanded: usize,
}

impl<'p, 'a> Search<'p, 'a> {
    fn new(pf: &'p Pathfinder<'a>) -> Self {
        Self {
            pf,
            arena: Vec::new(),
            frontier: BinaryHeap::new(),
            open: HashSet::new(),
            closed: HashSet::new(),
            seq: 0,
            expanded: 0,
        }
    }

    fn run(mut self) -> SolveResult {
        let grid = self.pf.grid;
        if !grid.is_free(self.pf.start) {
            debug!(start = ?self.pf.start, "rod search failed: start blocked");
            return SolveResult::failed(SearchFailure::StartBlocked, 0);
        }

        let root = self.alloc(self.pf.start, Orientation::Horizontal, None, 0, 0);
        self.enqueue(root);

        while let Some(Ranked { id, .. }) = self.frontier.pop() {
            let key = self.arena[id.0].key();
            self.open.remove(&key);
            // Closed after it was queued (another node rotated into it).
            if self.closed.contains(&key) {
                continue;
            }
            if let Some(limit) = self.pf.cfg.max_expansions {
                if self.expanded >= limit {
                    debug!(
                        expanded = self.expanded,
                        "rod search failed: expansion limit reached"
                    );
                    return SolveResult::failed(SearchFailure::ExpansionLimit, self.expanded);
                }
            }
            self.closed.insert(key);
            self.expanded += 1;

            let node = self.arena[id.0];
            trace!(
                x = node.center.x,
                y = node.center.y,
                orientation = %node.orientation,
                g = node.g,
                f = node.f,
                "expand"
            );

            let states = [Some(id), self.try_rotate(id)];
            let reached = states
                .iter()
                .flatten()
                .copied()
                .find(|&s| self.arena[s.0].rod().covers(self.pf.goal));
            if let Some(goal_id) = reached {
                return self.reconstruct(goal_id);
            }
            for s in states.into_iter().flatten() {
                self.expand(s);
            }
        }

        debug!(
            expanded = self.expanded,
            "rod search failed: frontier exhausted"
        );
        SolveResult::failed(SearchFailure::NoPath, self.expanded)
    }

    /// Rotate the rod at `id` in place if the window allows it and the
    /// rotated state is not final yet. The rotated node is closed right away
    /// and expanded together with `id`; it never enters the frontier.
    fn try_rotate(&mut self, id: NodeId) -> Option<NodeId> {
        if !self.pf.cfg.allow_rotation {
            return None;
        }
        let node = self.arena[id.0];
        let target = node.orientation.opposite();
        let key = NodeKey {
            center: node.center,
            orientation: target,
        };
        if self.closed.contains(&key)
            || !can_rotate_to(self.pf.grid, node.center, target, self.pf.cfg.clearance)
        {
            return None;
        }
        self.closed.insert(key);
        let rotated = self.alloc(node.center, target, Some(id), node.g + 1, node.h);
        trace!(x = node.center.x, y = node.center.y, to = %target, "rotate");
        Some(rotated)
    }

    /// Queue every valid unit move from `id`, keeping its orientation.
    fn expand(&mut self, id: NodeId) {
        let node = self.arena[id.0];
        let grid = self.pf.grid;
        for (dx, dy) in MOVES {
            let center = node.center.offset(dx, dy);
            if !grid.is_free(center) || !can_occupy(grid, center, node.orientation) {
                continue;
            }
            let key = NodeKey {
                center,
                orientation: node.orientation,
            };
            // No relaxation: a key already queued keeps its first-found cost,
            // unlike textbook A* which would lower g on a cheaper rediscovery.
            if self.closed.contains(&key) || self.open.contains(&key) {
                continue;
            }
            let h = heuristic(center, self.pf.goal);
            let child = self.alloc(center, node.orientation, Some(id), node.g + 1, h);
            self.enqueue(child);
        }
    }

    fn alloc(
        &mut self,
        center: Cell,
        orientation: Orientation,
        parent: Option<NodeId>,
        g: u64,
        h: u64,
    ) -> NodeId {
        let id = NodeId(self.arena.len());
        self.arena.push(SearchNode {
            id,
            center,
            orientation,
            parent,
            g,
            h,
            f: g + h,
        });
        id
    }

    fn enqueue(&mut self, id: NodeId) {
        let node = &self.arena[id.0];
        self.open.insert(node.key());
        self.frontier.push(Ranked {
            f: node.f,
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }

    fn reconstruct(self, goal_id: NodeId) -> SolveResult {
        let mut path = Vec::new();
        let mut cur = Some(goal_id);
        while let Some(id) = cur {
            let node = self.arena[id.0];
            path.push(node);
            cur = node.parent;
        }
        path.reverse();
        let result = SolveResult::found(path, self.expanded);
        debug!(
            path_length = result.path_length,
            expanded = self.expanded,
            arena = self.arena.len(),
            "rod search reached goal"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_is_squared_euclidean() {
        assert_eq!(heuristic(Cell::new(0, 0), Cell::new(4, 8)), 80);
        assert_eq!(heuristic(Cell::new(3, 3), Cell::new(3, 3)), 0);
        assert_eq!(heuristic(Cell::new(5, 1), Cell::new(2, 5)), 25);
    }

    #[test]
    fn frontier_ranks_by_f_then_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(Ranked { f: 5, seq: 0, id: NodeId(0) });
        heap.push(Ranked { f: 3, seq: 1, id: NodeId(1) });
        heap.push(Ranked { f: 3, seq: 2, id: NodeId(2) });
        heap.push(Ranked { f: 9, seq: 3, id: NodeId(3) });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.id.0)).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }
}
