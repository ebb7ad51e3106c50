//! Integer line rasterization: turns a pair of cells into the discrete line
//! between them, and a sparse waypoint path into a step-by-step trace.

use itertools::Itertools;

use crate::grid::{BoolGrid, Point};

/// Rasterizes the discrete line from `a` to `b` (inclusive) using integer
/// [Bresenham](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
/// over all eight octants. Consecutive cells differ by at most one unit per
/// axis, the output is deterministic, and the covered cell *set* is the same
/// for `(a, b)` and `(b, a)`. `a == b` yields `[a]`.
pub fn rasterize_line(a: Point, b: Point) -> Vec<Point> {
    // Plain Bresenham is not reversal-symmetric: walking b -> a can round
    // the other way on half-steps. Rasterizing in a canonical endpoint order
    // and reversing keeps the cell set independent of argument order.
    if a <= b {
        octant_walk(a, b)
    } else {
        let mut cells = octant_walk(b, a);
        cells.reverse();
        cells
    }
}

fn octant_walk(a: Point, b: Point) -> Vec<Point> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut current = a;
    let mut cells = Vec::with_capacity(a.move_distance(&b) as usize + 1);
    loop {
        cells.push(current);
        if current == b {
            return cells;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            current.x += sx;
        }
        if e2 <= dx {
            err += dx;
            current.y += sy;
        }
    }
}

/// Expands a sparse waypoint path into a dense path by rasterizing each
/// consecutive waypoint pair, so that every step in the result moves by at
/// most one cell per axis. Adjacent duplicates are removed, meaning the
/// shared cell at each segment junction appears exactly once. An empty input
/// stays empty.
pub fn densify_path(waypoints: &[Point]) -> Vec<Point> {
    match waypoints {
        [] => Vec::new(),
        [only] => vec![*only],
        _ => waypoints
            .windows(2)
            .flat_map(|pair| rasterize_line(pair[0], pair[1]))
            .dedup()
            .collect(),
    }
}

/// Checks whether the straight line between `a` and `b` crosses only free
/// cells, endpoints included. Cells outside the grid count as blocked, so
/// arbitrary endpoints are safe to pass.
pub fn line_of_sight(grid: &BoolGrid, a: Point, b: Point) -> bool {
    rasterize_line(a, b)
        .into_iter()
        .all(|cell| grid.point_in_bounds(cell) && !grid.get_point(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_line_is_single_cell() {
        let p = Point::new(3, 7);
        assert_eq!(rasterize_line(p, p), vec![p]);
    }

    #[test]
    fn test_horizontal_line() {
        let cells = rasterize_line(Point::new(0, 0), Point::new(5, 0));
        let want: Vec<Point> = (0..=5).map(|x| Point::new(x, 0)).collect();
        assert_eq!(cells, want);
    }

    #[test]
    fn test_main_diagonal_steps_once_per_cell() {
        let cells = rasterize_line(Point::new(0, 0), Point::new(3, 3));
        let want: Vec<Point> = (0..=3).map(|i| Point::new(i, i)).collect();
        assert_eq!(cells, want);
    }

    #[test]
    fn test_endpoints_and_connectivity_in_every_octant() {
        let a = Point::new(2, 2);
        for b in [
            Point::new(7, 4),
            Point::new(4, 7),
            Point::new(-3, 4),
            Point::new(0, 7),
            Point::new(-3, 0),
            Point::new(0, -3),
            Point::new(7, 0),
            Point::new(7, -1),
        ] {
            let cells = rasterize_line(a, b);
            assert_eq!(*cells.first().unwrap(), a);
            assert_eq!(*cells.last().unwrap(), b);
            assert_eq!(cells.len() as i32, a.move_distance(&b) + 1);
            for pair in cells.windows(2) {
                assert_eq!(pair[0].move_distance(&pair[1]), 1);
            }
        }
    }

    #[test]
    fn test_swapping_endpoints_covers_the_same_cells() {
        for bx in -4..=4 {
            for by in -4..=4 {
                let a = Point::new(0, 0);
                let b = Point::new(bx, by);
                let forward = rasterize_line(a, b);
                let mut backward = rasterize_line(b, a);
                backward.reverse();
                assert_eq!(forward, backward, "endpoints {} and {}", a, b);
            }
        }
    }

    #[test]
    fn test_densify_empty_and_single() {
        assert!(densify_path(&[]).is_empty());
        let p = Point::new(1, 2);
        assert_eq!(densify_path(&[p]), vec![p]);
    }

    #[test]
    fn test_densify_dedupes_segment_junctions() {
        let waypoints = [Point::new(0, 0), Point::new(3, 0), Point::new(3, 2)];
        let dense = densify_path(&waypoints);
        assert_eq!(*dense.first().unwrap(), waypoints[0]);
        assert_eq!(*dense.last().unwrap(), waypoints[2]);
        // Junction (3, 0) must appear once; every step is a single move
        assert_eq!(dense.len(), 6);
        for pair in dense.windows(2) {
            assert_eq!(pair[0].move_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn test_densify_collapses_repeated_waypoints() {
        let p = Point::new(2, 2);
        assert_eq!(densify_path(&[p, p, p]), vec![p]);
    }

    #[test]
    fn test_free_line_of_sight() {
        let grid = BoolGrid::new(10, 10, false);
        assert!(line_of_sight(&grid, Point::new(0, 0), Point::new(9, 9)));
    }

    #[test]
    fn test_blocked_line_of_sight() {
        let mut grid = BoolGrid::new(10, 10, true);
        grid.set(0, 0, false);
        grid.set(9, 9, false);
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(9, 9)));
    }

    #[test]
    fn test_line_of_sight_stops_at_the_grid_edge() {
        let grid = BoolGrid::new(5, 5, false);
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(6, 0)));
    }
}
