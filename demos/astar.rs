//! Random-obstacle pathfinding demo.
//!
//! Builds a grid with ~10% randomly blocked cells, picks a random start
//! (forced passable), searches to the far corner, and prints the grid with
//! the found route. Pass `--diagonal` to allow 8-directional movement.

use gridway_core::{Grid, Point};
use gridway_paths::{Searcher, reconstruct};
use rand::RngExt;

const WIDTH: i32 = 10;
const HEIGHT: i32 = 10;
const BLOCKED_CHANCE: f64 = 0.1;

fn main() {
    env_logger::init();

    let diagonal = std::env::args().any(|arg| arg == "--diagonal");

    let mut rng = rand::rng();
    let mut grid = Grid::from_fn(WIDTH, HEIGHT, |_| rng.random::<f64>() >= BLOCKED_CHANCE);

    let start = Point::new(rng.random_range(0..WIDTH), rng.random_range(0..HEIGHT));
    grid.set_passable(start, true);
    let goal = Point::new(WIDTH - 1, HEIGHT - 1);

    match Searcher::new(&mut grid, start, goal, diagonal).find_path() {
        Some(terminal) => {
            let path = reconstruct(&grid, terminal);
            render(&grid, &path, start, goal);
            println!("{} cells from {start} to {goal}", path.len());
        }
        None => {
            render(&grid, &[], start, goal);
            log::warn!("no path from {start} to {goal}");
        }
    }
}

fn render(grid: &Grid, path: &[Point], start: Point, goal: Point) {
    // y grows up, so print top rows first
    for y in (0..grid.height()).rev() {
        let mut row = String::new();
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            row.push(if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else if grid.at(p).is_some_and(|c| c.passable()) {
                '.'
            } else {
                '#'
            });
        }
        println!("{row}");
    }
}
