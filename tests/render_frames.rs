//! Whole-frame assertions against the ASCII theme, in the style of
//! golden-value integration tests: build a small grid, render, compare the
//! exact frame text.
use grid_viz::{blob_grid, densify_path, render_with_theme, BoolGrid, GridError, Point, Theme};

#[test]
fn empty_grid_frame_layout() {
    let grid = BoolGrid::new(2, 2, false);
    let frame = render_with_theme(
        &grid,
        Point::new(0, 0),
        Point::new(1, 1),
        &[],
        &Theme::ascii(),
    )
    .unwrap();
    let want = concat!(
        " --- --- \n",
        "|   | E |\n",
        " --- --- \n",
        "| S |   |\n",
        " --- --- \n",
    );
    assert_eq!(frame, want);
}

#[test]
fn frame_marks_obstacles_path_and_overlap() {
    let mut grid = BoolGrid::new(3, 3, false);
    grid.set(1, 1, true);
    grid.set(2, 1, true);
    // Route runs straight through the obstacle at (1, 1)
    let path = densify_path(&[Point::new(0, 0), Point::new(2, 2)]);
    let frame = render_with_theme(
        &grid,
        Point::new(0, 0),
        Point::new(2, 2),
        &path,
        &Theme::ascii(),
    )
    .unwrap();
    let want = concat!(
        " --- --- --- \n",
        "|   |   | E |\n",
        " --- --- --- \n",
        "|   |%%%|###|\n",
        " --- --- --- \n",
        "| S |   |   |\n",
        " --- --- --- \n",
    );
    assert_eq!(frame, want);
}

#[test]
fn blob_grid_frame() {
    // Radius below sqrt(2) keeps the diagonal neighbours free
    let grid = blob_grid(4, 4, Point::new(1, 1), 1.2).unwrap();
    let frame = render_with_theme(
        &grid,
        Point::new(0, 3),
        Point::new(3, 3),
        &[],
        &Theme::ascii(),
    )
    .unwrap();
    let want = concat!(
        " --- --- --- --- \n",
        "| S |   |   | E |\n",
        " --- --- --- --- \n",
        "|   |###|   |   |\n",
        " --- --- --- --- \n",
        "|###|###|###|   |\n",
        " --- --- --- --- \n",
        "|   |###|   |   |\n",
        " --- --- --- --- \n",
    );
    assert_eq!(frame, want);
}

#[test]
fn start_takes_precedence_over_end() {
    let grid = BoolGrid::new(1, 1, false);
    let p = Point::new(0, 0);
    let frame = render_with_theme(&grid, p, p, &[p], &Theme::ascii()).unwrap();
    assert_eq!(frame, " --- \n| S |\n --- \n");
}

#[test]
fn unreachable_route_renders_without_overlay() {
    let mut grid = BoolGrid::new(2, 1, false);
    grid.set(1, 0, true);
    // Planner reported unreachable: the empty path leaves only the base grid
    let frame = render_with_theme(
        &grid,
        Point::new(0, 0),
        Point::new(0, 0),
        &[],
        &Theme::ascii(),
    )
    .unwrap();
    assert_eq!(frame, " --- --- \n| S |###|\n --- --- \n");
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    let grid = BoolGrid::new(3, 3, false);
    let inside = Point::new(1, 1);
    let outside = Point::new(1, 3);
    for (start, end, path) in [
        (outside, inside, vec![]),
        (inside, outside, vec![]),
        (inside, inside, vec![inside, outside]),
    ] {
        let result = render_with_theme(&grid, start, end, &path, &Theme::ascii());
        assert_eq!(
            result,
            Err(GridError::OutOfBounds {
                point: outside,
                width: 3,
                height: 3,
            })
        );
    }
}
