//! Non-interactive pathfinding demo.
//!
//! Plays the role of the interactive control surface: generates a random
//! puzzle, runs all three search algorithms on it, and renders the grid
//! with the found path to stdout. An interactive caller relocating the
//! start would call `clear()` before `set_start` (a full layout reset),
//! while relocating the goal calls `set_goal` alone.

use std::collections::HashSet;

use wayfind_core::{Coord, DEFAULT_OBSTACLE_PROBABILITY, GridModel};
use wayfind_search::{Adjacency, Algorithm, PathResult, SearchEngine};

const ROWS: i32 = 20;
const COLS: i32 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut grid = GridModel::new(ROWS, COLS);
    grid.generate_random(&mut rng, DEFAULT_OBSTACLE_PROBABILITY)?;

    println!("{}", render(&grid, None));
    let adj = Adjacency::build(&grid);
    let mut engine = SearchEngine::new();

    for (name, algorithm) in [
        ("DFS", Algorithm::Dfs),
        ("BFS", Algorithm::Bfs),
        ("UCS", Algorithm::Ucs),
    ] {
        let result = engine.run(&adj, grid.start(), grid.goal(), algorithm);
        println!("== {name} ==");
        report(&grid, &result);
    }

    Ok(())
}

fn report(grid: &GridModel, result: &PathResult) {
    match result.path() {
        Some(path) => {
            println!("{}", render(grid, Some(path)));
            println!(
                "Path length: {} cells. Execution Time: {:.6} seconds",
                path.len(),
                result.elapsed_secs()
            );
        }
        None => println!("No path found!"),
    }
}

/// Draw the grid: `#` obstacle, `.` free, `S`/`G` endpoints, `*` path.
fn render(grid: &GridModel, path: Option<&[Coord]>) -> String {
    let on_path: HashSet<Coord> = path
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();
    let mut out = String::with_capacity(((grid.cols() + 1) * grid.rows()) as usize);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            let ch = if grid.start() == Some(c) {
                'S'
            } else if grid.goal() == Some(c) {
                'G'
            } else if on_path.contains(&c) {
                '*'
            } else if grid.is_free(c) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
