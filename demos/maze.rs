//! Solve one randomly generated maze with all three search strategies.
//!
//! Run: cargo run --bin maze

use mazegrid_core::{Cell, Maze, Position};
use mazegrid_search::{Solver, mark_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

const ROWS: i32 = 20;
const COLS: i32 = 20;
const PROP_BLOCKED: f64 = 0.2;
const SEED: u64 = 46545;

fn main() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let maze = match Maze::generate(
        ROWS,
        COLS,
        PROP_BLOCKED,
        Position::new(0, 0),
        Position::new(ROWS - 1, COLS - 1),
        &mut rng,
    ) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{maze}");

    let mut solver = Solver::new();
    run("dfs", &mut solver, &maze, Solver::dfs);
    run("bfs", &mut solver, &maze, Solver::bfs);
    run("a*", &mut solver, &maze, Solver::astar);
}

fn run(
    name: &str,
    solver: &mut Solver,
    maze: &Maze,
    search: fn(&mut Solver, &mut Maze) -> Option<Cell>,
) {
    // Each strategy gets its own copy: searches overwrite the scratch
    // state in place.
    let mut maze = maze.clone();
    match search(solver, &mut maze) {
        Some(goal) => {
            let path = mark_path(&mut maze, &goal);
            println!(
                "\n{name}: {} steps, {} frontier pushes",
                path.len() - 1,
                solver.expansions()
            );
            println!("{maze}");
        }
        None => {
            println!(
                "\n{name}: no path found ({} frontier pushes)",
                solver.expansions()
            );
        }
    }
}
