//! Fixed limits for maze construction and rod geometry (internal).
//!
//! Policy
//! - Dimension bounds are part of the maze format, not tunables.
//! - The clearance default is the only value surfaced again through
//!   `SearchCfg`, where callers may widen or shrink the rotation window.

/// Smallest accepted row/column count.
pub(crate) const MIN_DIM: usize = 3;
/// Largest accepted row/column count.
pub(crate) const MAX_DIM: usize = 1000;
/// Half-width of the rotation window: 1 means the 3×3 area around the center.
pub(crate) const DEFAULT_CLEARANCE: usize = 1;

/// Symbol for a free cell in textual mazes.
pub(crate) const FREE_SYMBOL: char = '.';
/// Symbol for a blocked cell in textual mazes.
pub(crate) const BLOCKED_SYMBOL: char = '#';
