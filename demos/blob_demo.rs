//! Renders a 10x10 grid with a disk obstacle in the middle, asks a stand-in
//! planner for a route around it, densifies the waypoints and renders the
//! result, then escapes from inside the blob.
//!
//! The breadth-first planner below only exists to exercise the [Planner]
//! seam; any real engine implementing the trait slots in the same way.

use std::collections::VecDeque;

use grid_viz::{blob_grid, densify_path, render, BoolGrid, Planner, Point};

struct BfsPlanner;

fn neighbours(grid: &BoolGrid, p: Point) -> Vec<Point> {
    let mut result = Vec::with_capacity(8);
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = Point::new(p.x + dx, p.y + dy);
            if grid.point_in_bounds(n) {
                result.push(n);
            }
        }
    }
    result
}

/// Breadth-first search from `from` to the nearest cell satisfying `goal`,
/// expanding only through cells satisfying `passable`.
fn bfs<G, F>(grid: &BoolGrid, from: Point, goal: G, passable: F) -> Option<Vec<Point>>
where
    G: Fn(Point) -> bool,
    F: Fn(Point) -> bool,
{
    let ix = |p: Point| p.x as usize + p.y as usize * grid.width;
    let mut parent: Vec<Option<Point>> = vec![None; grid.width * grid.height];
    let mut queue = VecDeque::from([from]);
    parent[ix(from)] = Some(from);
    while let Some(current) = queue.pop_front() {
        if goal(current) {
            let mut path = vec![current];
            let mut cursor = current;
            while cursor != from {
                cursor = parent[ix(cursor)].unwrap();
                path.push(cursor);
            }
            path.reverse();
            return Some(path);
        }
        for n in neighbours(grid, current) {
            if parent[ix(n)].is_none() && passable(n) {
                parent[ix(n)] = Some(current);
                queue.push_back(n);
            }
        }
    }
    None
}

impl Planner for BfsPlanner {
    fn find_path(&self, grid: &BoolGrid, start: Point, end: Point) -> Option<Vec<Point>> {
        if grid.get_point(start) || grid.get_point(end) {
            return None;
        }
        bfs(grid, start, |p| p == end, |p| !grid.get_point(p))
    }

    fn exit_red_zone(&self, grid: &BoolGrid, point: Point) -> Option<Point> {
        // Expands through the obstacle cluster until a free cell turns up
        bfs(grid, point, |p| !grid.get_point(p), |_| true)
            .map(|path| *path.last().unwrap())
    }
}

fn main() {
    env_logger::init();

    let grid = blob_grid(10, 10, Point::new(4, 4), 2.5).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(9, 9);
    println!("{}", render(&grid, start, end, &[]).unwrap());

    let planner = BfsPlanner;
    match planner.find_path(&grid, start, end) {
        Some(waypoints) => {
            let dense = densify_path(&waypoints);
            println!("{}", render(&grid, start, end, &dense).unwrap());
        }
        None => println!("{} is unreachable from {}", end, start),
    }

    let trapped = Point::new(4, 4);
    if let Some(exit_point) = planner.exit_red_zone(&grid, trapped) {
        println!("{}", render(&grid, trapped, exit_point, &[]).unwrap());
    }
}
