use core::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate on the grid. Structural equality; the derived [Ord]
/// orders lexicographically by `(x, y)`, which the rasterizer relies on to
/// pick a canonical endpoint order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Chebyshev distance: the number of 8-connected steps between two cells.
    pub fn move_distance(&self, other: &Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Euclidean distance between cell centers.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular boolean obstacle field, `true` meaning blocked. Cells are
/// stored row-major in a flat [Vec] and indexed with a bottom-left origin:
/// `(0, 0)` is the bottom-left cell, y grows upward.
///
/// All indexed coordinates must satisfy `0 <= x < width` and
/// `0 <= y < height`; out-of-range access is a contract violation. Use
/// [point_in_bounds](Self::point_in_bounds) first for untrusted input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoolGrid {
    pub width: usize,
    pub height: usize,
    values: Vec<bool>,
}

impl BoolGrid {
    pub fn new(width: usize, height: usize, default_value: bool) -> BoolGrid {
        BoolGrid {
            width,
            height,
            values: vec![default_value; width * height],
        }
    }

    fn get_ix(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.values[self.get_ix(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let ix = self.get_ix(x, y);
        self.values[ix] = blocked;
    }

    pub fn index_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && self.index_in_bounds(point.x as usize, point.y as usize)
    }

    pub fn get_point(&self, point: Point) -> bool {
        self.get(point.x as usize, point.y as usize)
    }

    pub fn set_point(&mut self, point: Point, blocked: bool) {
        self.set(point.x as usize, point.y as usize, blocked)
    }

    pub fn count_obstacles(&self) -> usize {
        self.values.iter().filter(|blocked| **blocked).count()
    }
}

impl fmt::Display for BoolGrid {
    /// Debug dump with the same orientation as the renderer: highest y first.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
