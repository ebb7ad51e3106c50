//! # grid_viz
//!
//! A grid-geometry toolkit for visualizing obstacle fields and motion paths
//! on a 2D integer lattice. Generates boolean obstacle grids (uniform random
//! sampling or disk-shaped blobs), expands sparse waypoint paths into dense
//! cell-by-cell traces with integer
//! [Bresenham](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//! rasterization, and renders a grid with start/end/path overlays as a
//! bordered terminal frame.
//!
//! Route planning itself is external: demonstrations plug an engine in
//! through the [Planner] trait and feed its waypoints to [densify_path] and
//! [render].

pub mod error;
pub mod generate;
pub mod grid;
pub mod raster;
pub mod render;

pub use error::GridError;
pub use generate::{blob_grid, random_grid, random_grid_with};
pub use grid::{BoolGrid, Point};
pub use raster::{densify_path, line_of_sight, rasterize_line};
pub use render::{render, render_with_theme, CellKind, Theme, CELL_WIDTH};

/// Interface to the external route planner. This crate only consumes it:
/// every operation here is pure geometry over the grid, and which engine
/// produces the waypoints is a caller concern.
pub trait Planner {
    /// Sparse waypoint path from `start` to `end` avoiding obstacle cells,
    /// or [None] when `end` is unreachable. Consecutive waypoints need not
    /// be adjacent; [densify_path] turns the result into a step-by-step
    /// trace.
    fn find_path(&self, grid: &BoolGrid, start: Point, end: Point) -> Option<Vec<Point>>;

    /// Nearest coordinate outside the obstacle cluster containing `point`,
    /// `point` itself if it is already free, or [None] when the grid has no
    /// free cell at all.
    fn exit_red_zone(&self, grid: &BoolGrid, point: Point) -> Option<Point>;
}
