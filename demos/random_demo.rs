//! Generates a seeded random obstacle field and renders it with a straight
//! rasterized route from corner to corner, marking every cell where the
//! route crosses an obstacle.

use grid_viz::{line_of_sight, random_grid_with, rasterize_line, render, Point};
use rand::prelude::*;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let grid = random_grid_with(10, 10, 0.3, &mut rng).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(9, 9);

    let route = rasterize_line(start, end);
    println!("{}", render(&grid, start, end, &route).unwrap());
    println!(
        "{} obstacle cells, line of sight from {} to {}: {}",
        grid.count_obstacles(),
        start,
        end,
        line_of_sight(&grid, start, end)
    );
}
