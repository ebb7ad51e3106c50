//! Frame rendering: resolves every cell of a grid to a display category and
//! lays the result out as a bordered textual frame.

use fxhash::FxHashSet;
use log::debug;

use crate::error::GridError;
use crate::grid::{BoolGrid, Point};

/// Display category of a single cell. [classify] resolves a cell to the
/// first matching category in declaration order, so `Start` wins over `End`
/// when the two coincide, and a path cell on top of an obstacle is always
/// [PathOnObstacle](CellKind::PathOnObstacle) rather than plain path or
/// plain obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Start,
    End,
    /// A path cell crossing a blocked cell: the route overlaps an obstacle.
    PathOnObstacle,
    Path,
    Obstacle,
    Empty,
}

/// Resolves the display category of `cell`. The cell must lie within the
/// grid; [render_with_theme] validates that for whole frames.
pub fn classify(
    grid: &BoolGrid,
    start: Point,
    end: Point,
    path: &FxHashSet<Point>,
    cell: Point,
) -> CellKind {
    let blocked = grid.get_point(cell);
    if cell == start {
        CellKind::Start
    } else if cell == end {
        CellKind::End
    } else if path.contains(&cell) && blocked {
        CellKind::PathOnObstacle
    } else if path.contains(&cell) {
        CellKind::Path
    } else if blocked {
        CellKind::Obstacle
    } else {
        CellKind::Empty
    }
}

/// Width of a cell marker in terminal columns.
pub const CELL_WIDTH: usize = 3;

/// Marker table for the renderer: one fixed-width marker per [CellKind]
/// plus the border glyphs. Every marker must occupy exactly [CELL_WIDTH]
/// terminal columns once escape sequences are accounted for; the frame
/// layout itself never changes with the theme.
#[derive(Clone, Debug)]
pub struct Theme {
    pub start: &'static str,
    pub end: &'static str,
    pub path: &'static str,
    pub path_on_obstacle: &'static str,
    pub obstacle: &'static str,
    pub empty: &'static str,
    /// Vertical divider between cells; W+1 of these per row.
    pub divider: &'static str,
    /// Horizontal border unit above a cell, [CELL_WIDTH] columns wide.
    pub dash: &'static str,
    /// Joint between horizontal border units.
    pub spacer: &'static str,
}

impl Theme {
    /// Plain ASCII markers, for logs and tests.
    pub fn ascii() -> Theme {
        Theme {
            start: " S ",
            end: " E ",
            path: " * ",
            path_on_obstacle: "%%%",
            obstacle: "###",
            empty: "   ",
            divider: "|",
            dash: "---",
            spacer: " ",
        }
    }

    pub fn marker(&self, kind: CellKind) -> &'static str {
        match kind {
            CellKind::Start => self.start,
            CellKind::End => self.end,
            CellKind::PathOnObstacle => self.path_on_obstacle,
            CellKind::Path => self.path,
            CellKind::Obstacle => self.obstacle,
            CellKind::Empty => self.empty,
        }
    }
}

impl Default for Theme {
    /// ANSI color markers: green start/end/path cells, red obstacle cells,
    /// `%%%` where the path crosses an obstacle, white frame borders.
    fn default() -> Theme {
        Theme {
            start: "\x1b[0;37;42m S \x1b[0;0m",
            end: "\x1b[0;37;42m E \x1b[0;0m",
            path: "\x1b[0;37;42m   \x1b[0;0m",
            path_on_obstacle: "%%%",
            obstacle: "\x1b[0;37;41m   \x1b[0;0m",
            empty: "   ",
            divider: "\x1b[0;37;47m|\x1b[0;0m",
            dash: "\x1b[0;37;47m---\x1b[0;0m",
            spacer: "\x1b[0;37;47m \x1b[0;0m",
        }
    }
}

/// Renders the grid with start/end/path overlays using the default ANSI
/// theme. See [render_with_theme].
pub fn render(
    grid: &BoolGrid,
    start: Point,
    end: Point,
    path: &[Point],
) -> Result<String, GridError> {
    render_with_theme(grid, start, end, path, &Theme::default())
}

/// Renders the full grid extent as a bordered frame, one line per row, with
/// rows emitted from the highest y down to 0 so the printed top matches the
/// logical top. A horizontal separator precedes every row and closes the
/// frame; each row carries `width + 1` vertical dividers.
///
/// Start, end and every path coordinate must lie within the grid; otherwise
/// [GridError::OutOfBounds] is returned before any output is built. An empty
/// path is fine and simply leaves no path overlay, which is how an
/// unreachable planner result is displayed.
pub fn render_with_theme(
    grid: &BoolGrid,
    start: Point,
    end: Point,
    path: &[Point],
    theme: &Theme,
) -> Result<String, GridError> {
    check_in_bounds(grid, start)?;
    check_in_bounds(grid, end)?;
    for &point in path {
        check_in_bounds(grid, point)?;
    }
    let path_set: FxHashSet<Point> = path.iter().copied().collect();
    let separator = separator_line(grid.width, theme);
    let mut frame = String::new();
    for y in (0..grid.height as i32).rev() {
        frame.push_str(&separator);
        frame.push('\n');
        for x in 0..grid.width as i32 {
            let cell = Point::new(x, y);
            frame.push_str(theme.divider);
            frame.push_str(theme.marker(classify(grid, start, end, &path_set, cell)));
        }
        frame.push_str(theme.divider);
        frame.push('\n');
    }
    frame.push_str(&separator);
    frame.push('\n');
    debug!(
        "Rendered {}x{} frame with {} path cells",
        grid.width,
        grid.height,
        path_set.len()
    );
    Ok(frame)
}

fn separator_line(width: usize, theme: &Theme) -> String {
    let mut line = String::from(theme.spacer);
    for _ in 0..width {
        line.push_str(theme.dash);
        line.push_str(theme.spacer);
    }
    line
}

fn check_in_bounds(grid: &BoolGrid, point: Point) -> Result<(), GridError> {
    if grid.point_in_bounds(point) {
        Ok(())
    } else {
        Err(GridError::OutOfBounds {
            point,
            width: grid.width,
            height: grid.height,
        })
    }
}
