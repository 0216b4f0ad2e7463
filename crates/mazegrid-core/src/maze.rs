//! The [`Maze`] type — a rows × cols grid of [`Cell`]s with designated
//! start and goal.
//!
//! Construction validates its inputs up front and fails fast with a
//! [`MazeError`]; nothing is silently clamped. Random blocking takes the
//! random source as an explicit parameter so callers (and tests) can
//! inject a deterministic generator instead of mutating process-wide
//! state.

use std::fmt;

use rand::Rng;

use crate::cell::{Cell, Content};
use crate::geom::Position;

/// Errors raised at maze-construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The blocked proportion is NaN or outside [0, 1].
    Proportion(f64),
    /// Rows or columns are not positive.
    Dimensions { rows: i32, cols: i32 },
    /// A named position lies outside the grid.
    OutOfBounds { what: &'static str, pos: Position },
    /// Start and goal must be distinct.
    StartIsGoal(Position),
    /// A fixed layout tried to block the start or goal cell.
    BlockedEndpoint(Position),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proportion(p) => {
                write!(f, "blocked proportion must be within [0, 1], got {p}")
            }
            Self::Dimensions { rows, cols } => {
                write!(f, "maze dimensions must be positive, got {rows}x{cols}")
            }
            Self::OutOfBounds { what, pos } => {
                write!(f, "{what} position {pos} lies outside the grid")
            }
            Self::StartIsGoal(pos) => {
                write!(f, "start and goal must be distinct, both are {pos}")
            }
            Self::BlockedEndpoint(pos) => {
                write!(f, "cannot block the start or goal cell at {pos}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// A 2D grid maze.
///
/// Cells are stored row-major in a flat array; start and goal are indices
/// into it. Exactly one cell carries [`Content::Start`] and one
/// [`Content::Goal`], and neither is ever blocked.
///
/// Searches mutate cell scratch state in place and perform no automatic
/// reset, so run each algorithm on a fresh `Maze` (it is `Clone`) or call
/// [`clear_search`](Maze::clear_search) in between.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: usize,
    goal: usize,
}

impl Maze {
    /// Construct a maze with randomly blocked cells.
    ///
    /// `round((rows·cols − 2) · prop_blocked)` cells are chosen uniformly
    /// from the grid minus start and goal and marked blocked.
    pub fn generate<R: Rng>(
        rows: i32,
        cols: i32,
        prop_blocked: f64,
        start: Position,
        goal: Position,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        if !prop_blocked.is_finite() || !(0.0..=1.0).contains(&prop_blocked) {
            return Err(MazeError::Proportion(prop_blocked));
        }
        let mut maze = Self::empty(rows, cols, start, goal)?;

        let candidates: Vec<usize> = (0..maze.cells.len())
            .filter(|&i| i != maze.start && i != maze.goal)
            .collect();
        let amount = (candidates.len() as f64 * prop_blocked).round() as usize;
        for i in rand::seq::index::sample(rng, candidates.len(), amount) {
            maze.cells[candidates[i]].set_content(Content::Blocked);
        }
        Ok(maze)
    }

    /// Construct a maze with a fixed, deterministic blocked layout.
    ///
    /// Every position in `blocked` must lie inside the grid and differ
    /// from both start and goal.
    pub fn with_blocked(
        rows: i32,
        cols: i32,
        start: Position,
        goal: Position,
        blocked: &[Position],
    ) -> Result<Self, MazeError> {
        let mut maze = Self::empty(rows, cols, start, goal)?;
        for &pos in blocked {
            let Some(i) = maze.index(pos) else {
                return Err(MazeError::OutOfBounds {
                    what: "blocked",
                    pos,
                });
            };
            if i == maze.start || i == maze.goal {
                return Err(MazeError::BlockedEndpoint(pos));
            }
            maze.cells[i].set_content(Content::Blocked);
        }
        Ok(maze)
    }

    fn empty(rows: i32, cols: i32, start: Position, goal: Position) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::Dimensions { rows, cols });
        }
        let in_bounds =
            |p: Position| p.row >= 0 && p.row < rows && p.col >= 0 && p.col < cols;
        if !in_bounds(start) {
            return Err(MazeError::OutOfBounds {
                what: "start",
                pos: start,
            });
        }
        if !in_bounds(goal) {
            return Err(MazeError::OutOfBounds {
                what: "goal",
                pos: goal,
            });
        }
        if start == goal {
            return Err(MazeError::StartIsGoal(start));
        }

        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Position::new(row, col), Content::Empty));
            }
        }
        let start_idx = (start.row * cols + start.col) as usize;
        let goal_idx = (goal.row * cols + goal.col) as usize;
        cells[start_idx].set_content(Content::Start);
        cells[goal_idx].set_content(Content::Goal);

        Ok(Self {
            rows,
            cols,
            cells,
            start: start_idx,
            goal: goal_idx,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Convert a position to a flat cell index. `None` if out of bounds.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols {
            Some((pos.row * self.cols + pos.col) as usize)
        } else {
            None
        }
    }

    /// The cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range; indices come from [`index`](Maze::index)
    /// or [`neighbors`](Maze::neighbors) and are always valid in correct use.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at a flat index.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// The cell at a position, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index of the start cell.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Flat index of the goal cell.
    #[inline]
    pub fn goal_index(&self) -> usize {
        self.goal
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> &Cell {
        &self.cells[self.start]
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> &Cell {
        &self.cells[self.goal]
    }

    /// Append the valid expansion targets around `idx` into `buf`, in
    /// fixed north, south, west, east order. The caller clears `buf`.
    ///
    /// Blocked cells and the start cell are excluded: once left, the start
    /// is never re-entered.
    pub fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        for np in self.cells[idx].position().neighbors_4() {
            let Some(ni) = self.index(np) else {
                continue;
            };
            if self.cells[ni].is_blocked() || ni == self.start {
                continue;
            }
            buf.push(ni);
        }
    }

    /// Reset all per-search scratch state: clears cost, heuristic and
    /// parent links, and reverts path marks to empty.
    ///
    /// Call this before re-running a different algorithm on the same maze.
    pub fn clear_search(&mut self) {
        for cell in &mut self.cells {
            cell.set_g(0);
            cell.set_h(0);
            cell.set_parent(None);
            if cell.content() == Content::Path {
                cell.set_content(Content::Empty);
            }
        }
    }
}

/// Renders the maze row-major with `|`-delimited cells, one glyph per
/// cell, no trailing newline.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for col in 0..self.cols {
                let cell = &self.cells[(row * self.cols + col) as usize];
                write!(f, "{}|", cell.content().glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_bad_proportion() {
        let start = Position::new(0, 0);
        let goal = Position::new(4, 4);
        let mut rng = StdRng::seed_from_u64(1);
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = Maze::generate(5, 5, p, start, goal, &mut rng).unwrap_err();
            assert!(matches!(err, MazeError::Proportion(_)), "{p} accepted");
        }
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = Maze::with_blocked(0, 5, Position::new(0, 0), Position::new(0, 4), &[])
            .unwrap_err();
        assert_eq!(err, MazeError::Dimensions { rows: 0, cols: 5 });
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let err = Maze::with_blocked(5, 5, Position::new(5, 0), Position::new(4, 4), &[])
            .unwrap_err();
        assert_eq!(
            err,
            MazeError::OutOfBounds {
                what: "start",
                pos: Position::new(5, 0)
            }
        );
        let err = Maze::with_blocked(5, 5, Position::new(0, 0), Position::new(4, 5), &[])
            .unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds { what: "goal", .. }));
    }

    #[test]
    fn rejects_coincident_endpoints() {
        let p = Position::new(2, 2);
        let err = Maze::with_blocked(5, 5, p, p, &[]).unwrap_err();
        assert_eq!(err, MazeError::StartIsGoal(p));
    }

    #[test]
    fn rejects_blocked_endpoint_and_oob_block() {
        let start = Position::new(0, 0);
        let goal = Position::new(4, 4);
        let err = Maze::with_blocked(5, 5, start, goal, &[goal]).unwrap_err();
        assert_eq!(err, MazeError::BlockedEndpoint(goal));
        let err =
            Maze::with_blocked(5, 5, start, goal, &[Position::new(9, 9)]).unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds { what: "blocked", .. }));
    }

    #[test]
    fn generate_blocks_exact_proportion() {
        let mut rng = StdRng::seed_from_u64(46545);
        let maze = Maze::generate(
            10,
            10,
            0.2,
            Position::new(0, 0),
            Position::new(9, 9),
            &mut rng,
        )
        .unwrap();
        let blocked = maze.cells().iter().filter(|c| c.is_blocked()).count();
        // round((10*10 - 2) * 0.2) = 20
        assert_eq!(blocked, 20);
        assert!(!maze.start().is_blocked());
        assert!(!maze.goal().is_blocked());
    }

    #[test]
    fn exactly_one_start_and_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = Maze::generate(
            8,
            6,
            0.3,
            Position::new(1, 1),
            Position::new(6, 4),
            &mut rng,
        )
        .unwrap();
        let starts = maze.cells().iter().filter(|c| c.is_start()).count();
        let goals = maze.cells().iter().filter(|c| c.is_goal()).count();
        assert_eq!((starts, goals), (1, 1));
        assert_eq!(maze.start().position(), Position::new(1, 1));
        assert_eq!(maze.goal().position(), Position::new(6, 4));
    }

    #[test]
    fn generation_is_reproducible_with_seed() {
        let build = || {
            let mut rng = StdRng::seed_from_u64(42);
            Maze::generate(
                12,
                12,
                0.25,
                Position::new(0, 0),
                Position::new(11, 11),
                &mut rng,
            )
            .unwrap()
        };
        assert_eq!(build().to_string(), build().to_string());
    }

    #[test]
    fn neighbors_in_nswe_order() {
        let maze = Maze::with_blocked(
            5,
            5,
            Position::new(0, 0),
            Position::new(4, 4),
            &[],
        )
        .unwrap();
        let idx = maze.index(Position::new(2, 2)).unwrap();
        let mut buf = Vec::new();
        maze.neighbors(idx, &mut buf);
        let positions: Vec<Position> =
            buf.iter().map(|&i| maze.cell(i).position()).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn neighbors_exclude_blocked_start_and_walls() {
        let maze = Maze::with_blocked(
            3,
            3,
            Position::new(0, 0),
            Position::new(2, 2),
            &[Position::new(1, 1)],
        )
        .unwrap();
        // From (0, 1): north is out of bounds, south (1, 1) is blocked,
        // west (0, 0) is the start, so only east remains.
        let idx = maze.index(Position::new(0, 1)).unwrap();
        let mut buf = Vec::new();
        maze.neighbors(idx, &mut buf);
        let positions: Vec<Position> =
            buf.iter().map(|&i| maze.cell(i).position()).collect();
        assert_eq!(positions, vec![Position::new(0, 2)]);
    }

    #[test]
    fn render_row_major_with_pipes() {
        let maze = Maze::with_blocked(
            2,
            3,
            Position::new(0, 0),
            Position::new(1, 2),
            &[Position::new(0, 1)],
        )
        .unwrap();
        assert_eq!(maze.to_string(), "|S|░| |\n| | |G|");
    }

    #[test]
    fn clear_search_resets_scratch_and_path_marks() {
        let mut maze =
            Maze::with_blocked(3, 3, Position::new(0, 0), Position::new(2, 2), &[])
                .unwrap();
        let idx = maze.index(Position::new(1, 1)).unwrap();
        maze.cell_mut(idx).set_g(5);
        maze.cell_mut(idx).set_h(2);
        maze.cell_mut(idx).set_parent(Some(0));
        maze.cell_mut(idx).mark_on_path();

        maze.clear_search();
        let cell = maze.cell(idx);
        assert_eq!(cell.g(), 0);
        assert_eq!(cell.h(), 0);
        assert_eq!(cell.parent(), None);
        assert_eq!(cell.content(), Content::Empty);
        // Start and goal tags survive the reset.
        assert!(maze.start().is_start());
        assert!(maze.goal().is_goal());
    }
}
