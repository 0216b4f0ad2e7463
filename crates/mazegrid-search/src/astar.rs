//! A* search with a Manhattan-distance heuristic.

use mazegrid_core::{Cell, Maze};

use crate::Solver;
use crate::distance::manhattan;
use crate::frontier::{Frontier, HeapFrontier};

impl Solver {
    /// A* search from the maze start, keyed by f = g + h with h the
    /// Manhattan distance to the goal.
    ///
    /// Neighbors are relaxed eagerly against the best-g map, which is
    /// authoritative; improved cells are re-inserted into the heap rather
    /// than decreased in place. Stale heap entries only waste pops: with
    /// uniform step cost and a consistent heuristic, the first pop of any
    /// cell already carries its optimal g.
    ///
    /// Returns a copy of the goal cell or `None` if the goal is
    /// unreachable.
    pub fn astar(&mut self, maze: &mut Maze) -> Option<Cell> {
        self.expansions = 0;
        self.best_g.clear();

        let start = maze.start_index();
        let goal = maze.goal_index();
        let goal_pos = maze.cell(goal).position();

        let mut frontier = HeapFrontier::new();
        let start_h = manhattan(maze.cell(start).position(), goal_pos);
        {
            let s = maze.cell_mut(start);
            s.set_g(0);
            s.set_h(start_h);
        }
        frontier.push(start, start_h);
        self.best_g.insert(maze.cell(start).position(), 0);
        self.expansions += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(ci) = frontier.pop() else {
                break None;
            };
            if ci == goal {
                break Some(*maze.cell(ci));
            }
            let tentative = maze.cell(ci).g() + 1;

            nbuf.clear();
            maze.neighbors(ci, &mut nbuf);

            for &ni in nbuf.iter() {
                let npos = maze.cell(ni).position();
                let improves = match self.best_g.get(&npos) {
                    None => true,
                    Some(&best) => tentative < best,
                };
                if !improves {
                    continue;
                }
                self.best_g.insert(npos, tentative);

                let h = manhattan(npos, goal_pos);
                let neighbor = maze.cell_mut(ni);
                neighbor.set_g(tentative);
                neighbor.set_h(h);
                neighbor.set_parent(Some(ci));
                frontier.push(ni, tentative + h);
                self.expansions += 1;
            }
        };

        self.nbuf = nbuf;
        log::debug!("astar: {} frontier pushes", self.expansions);
        found
    }
}
