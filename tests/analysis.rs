//! Validates summed-area queries and neighbor-bitmask classification

use cavegen::analysis::cache::DerivedAnalysis;
use cavegen::analysis::classifier::{classify, neighbor_code};
use cavegen::analysis::integral::IntegralImage;
use cavegen::spatial::grid::{Cell, TileGrid};
use rand::{SeedableRng, rngs::StdRng};

fn grid_from_rows(rows: &[&str]) -> TileGrid {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut grid = TileGrid::new(width, height).unwrap();
    let mut cells = grid.snapshot();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if let Some(slot) = cells.get_mut([y, x]) {
                *slot = if ch == '#' { Cell::Blocked } else { Cell::Open };
            }
        }
    }
    grid.replace(cells);
    grid
}

fn brute_force_count(grid: &TileGrid, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
    let mut count = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if x >= 0
                && y >= 0
                && x < grid.width() as i32
                && y < grid.height() as i32
                && grid.get(x, y).is_blocked()
            {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_integral_total_matches_direct_count() {
    let mut grid = TileGrid::new(17, 11).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    grid.randomize(0.5, &mut rng);

    let integral = IntegralImage::build(&grid);
    let direct = brute_force_count(&grid, 0, 0, 16, 10);

    assert_eq!(integral.total_blocked(), direct);
    assert_eq!(integral.region_count(0, 0, 16, 10), direct);
}

#[test]
fn test_region_count_matches_brute_force_on_all_rectangles() {
    let mut grid = TileGrid::new(8, 6).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    grid.randomize(0.4, &mut rng);

    let integral = IntegralImage::build(&grid);

    for y0 in 0..6 {
        for x0 in 0..8 {
            for y1 in y0..6 {
                for x1 in x0..8 {
                    assert_eq!(
                        integral.region_count(x0, y0, x1, y1),
                        brute_force_count(&grid, x0, y0, x1, y1),
                        "rectangle ({x0},{y0})..({x1},{y1})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_region_count_clamps_out_of_range_rectangles() {
    let mut grid = TileGrid::new(5, 5).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    grid.randomize(0.6, &mut rng);

    let integral = IntegralImage::build(&grid);

    assert_eq!(
        integral.region_count(-3, -3, 10, 10),
        integral.total_blocked()
    );
    assert_eq!(integral.region_count(6, 0, 9, 4), 0);
    assert_eq!(integral.region_count(3, 3, 1, 1), 0);
}

// The 3x3 worked example: every cell blocked except the center. The center
// classifies as a hole; the edge-center walls carry codes 7/11/13/14 and
// bump only orientation counters, leaving the category counters untouched.
#[test]
fn test_classifier_worked_example() {
    let grid = grid_from_rows(&["###", "#.#", "###"]);

    assert_eq!(neighbor_code(&grid, 1, 1), 15);
    assert_eq!(neighbor_code(&grid, 1, 0), 13);

    let counts = classify(&grid);

    assert_eq!(counts.holes, 1);
    assert_eq!(counts.solids, 4);
    assert_eq!(counts.horizontal_walls, 2);
    assert_eq!(counts.vertical_walls, 2);

    assert_eq!(counts.loners, 0);
    assert_eq!(counts.ends, 0);
    assert_eq!(counts.platforms, 0);
    assert_eq!(counts.spires, 0);
    assert_eq!(counts.empties, 0);
    assert_eq!(counts.pits, 0);
    assert_eq!(counts.tunnels, 0);
    assert_eq!(counts.nooks, 0);
}

#[test]
fn test_classifier_open_categories() {
    // A single open row: interior cells see walls above and below (pits),
    // while a lone open cell surrounded on all sides is a hole
    let pit_grid = grid_from_rows(&["#####", ".....", "#####"]);
    let pit_counts = classify(&pit_grid);
    assert_eq!(pit_counts.pits, 3);
    assert_eq!(pit_counts.nooks, 2);

    let tunnel_grid = grid_from_rows(&["#.#", "#.#", "#.#"]);
    let tunnel_counts = classify(&tunnel_grid);
    assert_eq!(tunnel_counts.tunnels, 1);
    assert_eq!(tunnel_counts.nooks, 2);
}

#[test]
fn test_derived_caches_idempotent_under_identical_replace() {
    let mut grid = TileGrid::new(12, 9).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    grid.randomize(0.5, &mut rng);

    let mut analysis = DerivedAnalysis::new();
    let counts_before = analysis.pattern_counts(&grid);
    let total_before = analysis.integral(&grid).total_blocked();
    let band_before = analysis.integral(&grid).band_density(2, 5);

    let copy = grid.snapshot();
    grid.replace(copy);

    assert_eq!(analysis.pattern_counts(&grid), counts_before);
    assert_eq!(analysis.integral(&grid).total_blocked(), total_before);
    assert!((analysis.integral(&grid).band_density(2, 5) - band_before).abs() < f64::EPSILON);
}

#[test]
fn test_density_queries_on_uniform_and_split_grids() {
    let full = grid_from_rows(&["####", "####", "####", "####"]);
    let integral = IntegralImage::build(&full);

    assert!((integral.fill_fraction() - 1.0).abs() < f64::EPSILON);
    assert!((integral.row_fill(2) - 1.0).abs() < f64::EPSILON);
    assert!((integral.column_fill(0) - 1.0).abs() < f64::EPSILON);
    assert!((integral.edge_column_bias(2) - 0.0).abs() < f64::EPSILON);

    // Left half blocked, right half open: the column bias reads positive
    let split = grid_from_rows(&["##..", "##..", "##..", "##.."]);
    let split_integral = IntegralImage::build(&split);
    assert!(split_integral.edge_column_bias(2) > 0.0);
    assert!((split_integral.fill_fraction() - 0.5).abs() < f64::EPSILON);

    let bands = split_integral.band_densities(2);
    assert_eq!(bands.len(), 3);
    assert!(bands.iter().all(|&density| (density - 0.5).abs() < f64::EPSILON));
}
