//! Uninformed search: DFS and BFS.
//!
//! Both run the same engine; only the frontier differs. A position enters
//! the discovered set at the moment it is pushed, never at pop time, so no
//! cell is scheduled twice and the pass stays O(V + E).

use mazegrid_core::{Cell, Maze};

use crate::Solver;
use crate::frontier::{Frontier, QueueFrontier, StackFrontier};

impl Solver {
    /// Depth-first search from the maze start.
    ///
    /// Returns a copy of the goal cell (its parent chain recorded in the
    /// maze) or `None` if the goal is unreachable. The path found is
    /// valid but not necessarily shortest.
    pub fn dfs(&mut self, maze: &mut Maze) -> Option<Cell> {
        let found = self.flood(maze, StackFrontier::new());
        log::debug!("dfs: {} frontier pushes", self.expansions);
        found
    }

    /// Breadth-first search from the maze start.
    ///
    /// Same contract as [`dfs`](Solver::dfs), but the returned goal is
    /// reached by a shortest path in step count: discovery order strictly
    /// increases by graph distance.
    pub fn bfs(&mut self, maze: &mut Maze) -> Option<Cell> {
        let found = self.flood(maze, QueueFrontier::new());
        log::debug!("bfs: {} frontier pushes", self.expansions);
        found
    }

    fn flood<F: Frontier>(&mut self, maze: &mut Maze, mut frontier: F) -> Option<Cell> {
        self.expansions = 0;
        self.discovered.clear();

        let start = maze.start_index();
        let goal = maze.goal_index();
        frontier.push(start, 0);
        self.discovered.insert(maze.cell(start).position());
        self.expansions += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(ci) = frontier.pop() else {
                break None;
            };
            if ci == goal {
                break Some(*maze.cell(ci));
            }
            let depth = maze.cell(ci).g();

            nbuf.clear();
            maze.neighbors(ci, &mut nbuf);

            for &ni in nbuf.iter() {
                if !self.discovered.insert(maze.cell(ni).position()) {
                    continue;
                }
                let neighbor = maze.cell_mut(ni);
                neighbor.set_g(depth + 1);
                neighbor.set_parent(Some(ci));
                frontier.push(ni, 0);
                self.expansions += 1;
            }
        };

        self.nbuf = nbuf;
        found
    }
}
