//! Procedural obstacle field generation: independent per-cell sampling and
//! disk-shaped blob obstacles.

use log::info;
use rand::Rng;

use crate::error::GridError;
use crate::grid::{BoolGrid, Point};

/// Generates a grid where each cell is independently an obstacle with
/// probability `obstacle_probability`, using the thread RNG. See
/// [random_grid_with] for a reproducible variant.
pub fn random_grid(
    width: usize,
    height: usize,
    obstacle_probability: f64,
) -> Result<BoolGrid, GridError> {
    random_grid_with(width, height, obstacle_probability, &mut rand::thread_rng())
}

/// Generates a random grid from a caller-supplied RNG, so seeded runs
/// reproduce the same field. `obstacle_probability` of 0 and 1 are valid and
/// yield an entirely free and entirely blocked grid respectively; there is no
/// spatial correlation between cells.
pub fn random_grid_with<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    obstacle_probability: f64,
    rng: &mut R,
) -> Result<BoolGrid, GridError> {
    check_dimensions(width, height)?;
    if !(0.0..=1.0).contains(&obstacle_probability) {
        return Err(GridError::InvalidParameter(format!(
            "obstacle probability {} is not within [0, 1]",
            obstacle_probability
        )));
    }
    let mut grid = BoolGrid::new(width, height, false);
    for y in 0..height {
        for x in 0..width {
            grid.set(x, y, rng.gen_bool(obstacle_probability));
        }
    }
    info!(
        "Generated {}x{} random grid with {} obstacle cells (p = {})",
        width,
        height,
        grid.count_obstacles(),
        obstacle_probability
    );
    Ok(grid)
}

/// Generates a grid with a single disk-shaped obstacle cluster: a cell is
/// blocked iff its Euclidean distance to `center` is strictly less than
/// `radius`. The center cell itself is blocked for any positive radius. A
/// center outside the grid is valid; the disk is clipped to the extent.
pub fn blob_grid(
    width: usize,
    height: usize,
    center: Point,
    radius: f64,
) -> Result<BoolGrid, GridError> {
    check_dimensions(width, height)?;
    let mut grid = BoolGrid::new(width, height, false);
    for y in 0..height {
        for x in 0..width {
            let cell = Point::new(x as i32, y as i32);
            if cell.distance(&center) < radius {
                grid.set(x, y, true);
            }
        }
    }
    info!(
        "Generated {}x{} blob grid around {} with radius {} ({} obstacle cells)",
        width,
        height,
        center,
        radius,
        grid.count_obstacles()
    );
    Ok(grid)
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidParameter(format!(
            "grid dimensions {}x{} must be positive",
            width, height
        )));
    }
    Ok(())
}
