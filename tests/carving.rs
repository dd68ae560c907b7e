//! Validates best-first route carving and its cost accounting

use cavegen::algorithm::carver::carve_route;
use cavegen::spatial::grid::{Cell, TileGrid};

fn fully_blocked(width: usize, height: usize) -> TileGrid {
    let mut grid = TileGrid::new(width, height).unwrap();
    let cells = ndarray::Array2::from_elem((height, width), Cell::Blocked);
    grid.replace(cells);
    grid
}

fn assert_four_connected(path: &[[i32; 2]]) {
    for pair in path.windows(2) {
        if let [a, b] = pair {
            let dx = (a[0] - b[0]).abs();
            let dy = (a[1] - b[1]).abs();
            assert_eq!(dx + dy, 1, "steps {a:?} -> {b:?} must be cardinal");
        }
    }
}

#[test]
fn test_straight_line_on_open_grid() {
    let mut grid = TileGrid::new(20, 10).unwrap();
    let outcome = carve_route(&mut grid, [2, 3], [12, 3]);

    assert!(outcome.reached_end);
    assert_eq!(outcome.path.len(), 11);

    let expected: Vec<[i32; 2]> = (2..=12).map(|x| [x, 3]).collect();
    assert_eq!(outcome.path, expected);

    // Each open step costs the base cost plus the uniform open penalty
    assert!((outcome.cost - 20.0).abs() < f64::EPSILON);

    for cell in &outcome.path {
        assert!(grid.get(cell[0], cell[1]).is_open());
    }
}

#[test]
fn test_carve_opens_route_through_wall() {
    let mut grid = TileGrid::new(16, 9).unwrap();
    let mut cells = grid.snapshot();
    for y in 0..9 {
        if let Some(slot) = cells.get_mut([y, 6]) {
            *slot = Cell::Blocked;
        }
    }
    grid.replace(cells);

    let outcome = carve_route(&mut grid, [2, 4], [13, 4]);

    assert!(outcome.reached_end);
    assert_eq!(outcome.path.first(), Some(&[2, 4]));
    assert_eq!(outcome.path.last(), Some(&[13, 4]));
    assert_four_connected(&outcome.path);

    for cell in &outcome.path {
        assert!(grid.get(cell[0], cell[1]).is_open());
    }
    // The wall column must have been pierced exactly where the route crossed
    assert!(outcome.path.iter().any(|cell| cell[0] == 6));
}

// On solid rock the cheapest descent is straight down: three downward
// tunneling steps at 1 + 500 each
#[test]
fn test_descent_cost_through_solid_rock() {
    let mut grid = fully_blocked(5, 5);
    let outcome = carve_route(&mut grid, [2, 0], [2, 3]);

    assert!(outcome.reached_end);
    assert_eq!(outcome.path, vec![[2, 0], [2, 1], [2, 2], [2, 3]]);
    assert!((outcome.cost - 1503.0).abs() < f64::EPSILON);

    for cell in &outcome.path {
        assert!(grid.get(cell[0], cell[1]).is_open());
    }
    // Cells off the route stay rock
    assert!(grid.get(0, 0).is_blocked());
    assert!(grid.get(4, 4).is_blocked());
}

#[test]
fn test_carve_with_coincident_endpoints() {
    let mut grid = fully_blocked(6, 6);
    let outcome = carve_route(&mut grid, [3, 3], [3, 3]);

    assert!(outcome.reached_end);
    assert_eq!(outcome.path, vec![[3, 3]]);
    assert!((outcome.cost - 0.0).abs() < f64::EPSILON);
    assert!(grid.get(3, 3).is_open());
}

#[test]
fn test_endpoints_clamped_into_bounds() {
    let mut grid = TileGrid::new(10, 8).unwrap();
    let outcome = carve_route(&mut grid, [-5, -5], [100, 100]);

    assert!(outcome.reached_end);
    assert_eq!(outcome.path.first(), Some(&[0, 0]));
    assert_eq!(outcome.path.last(), Some(&[9, 7]));
    assert_four_connected(&outcome.path);
}
