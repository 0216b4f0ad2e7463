//! Path reconstruction from parent links.

use mazegrid_core::{Cell, Maze, Position};

/// Walk parent references from `goal` back to the start, mark every
/// interior cell as on the path, and return the start→goal positions.
///
/// `goal` is the terminal cell returned by a search on this `maze`; its
/// parent chain ends at the only parentless cell, the start. Start and
/// goal keep their own content tags. Calling this twice with the same
/// terminal cell marks the same set of cells both times.
pub fn mark_path(maze: &mut Maze, goal: &Cell) -> Vec<Position> {
    let mut chain = Vec::new();
    let mut cursor = maze.index(goal.position());
    while let Some(i) = cursor {
        chain.push(i);
        cursor = maze.cell(i).parent();
    }
    chain.reverse();
    debug_assert_eq!(chain.first().copied(), Some(maze.start_index()));

    for &i in &chain {
        maze.cell_mut(i).mark_on_path();
    }
    chain.iter().map(|&i| maze.cell(i).position()).collect()
}
