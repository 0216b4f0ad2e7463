//! The [`Solver`] type — owner of per-pass search scratch.

use std::collections::{HashMap, HashSet};

use mazegrid_core::Position;

/// Runs the search algorithms and owns their reusable scratch state.
///
/// The discovered set, the best-cost map and the neighbor buffer are
/// cleared at the start of each pass and reused across passes, so
/// repeated searches allocate little. Frontiers are created per call and
/// discarded with it.
///
/// All membership bookkeeping is keyed by [`Position`] — never by whole
/// cells, whose value equality goes stale as content tags mutate.
#[derive(Debug, Default)]
pub struct Solver {
    /// Positions already pushed to the frontier this pass.
    pub(crate) discovered: HashSet<Position>,
    /// Authoritative best-known cost per position (A* relaxation).
    pub(crate) best_g: HashMap<Position, i32>,
    /// Scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<usize>,
    /// Frontier pushes performed by the current/last pass.
    pub(crate) expansions: u64,
}

impl Solver {
    /// Create a solver with empty scratch state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frontier pushes performed by the last search pass.
    ///
    /// Bounded by the number of cells reachable from the start; resets at
    /// the start of each pass.
    #[inline]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }
}
