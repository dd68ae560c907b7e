//! Validates room partitioning, the directed adjacency graph, and route selection

use cavegen::algorithm::route::{default_ends, select_route};
use cavegen::math::metrics::manhattan;
use cavegen::spatial::grid::{Cell, TileGrid};
use cavegen::spatial::rooms::{RoomGraph, assign_tiles, seed_lattice};
use rand::{SeedableRng, rngs::StdRng};

fn open_tile_count(grid: &TileGrid) -> usize {
    let mut count = 0;
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if grid.get(x, y).is_open() {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_assignment_covers_every_open_tile() {
    let mut grid = TileGrid::new(30, 20).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    grid.randomize(0.45, &mut rng);

    let mut rooms = seed_lattice(grid.width(), grid.height());
    assign_tiles(&grid, &mut rooms);

    let assigned: usize = rooms.iter().map(|room| room.tile_count).sum();
    assert_eq!(assigned, open_tile_count(&grid));
}

#[test]
fn test_partition_tile_counts_sum_to_open_tiles() {
    let mut grid = TileGrid::new(40, 24).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    grid.randomize(0.35, &mut rng);

    let graph = RoomGraph::partition(&grid);
    assert!(graph.room_count() > 0);

    let assigned: usize = graph.rooms().iter().map(|room| room.tile_count).sum();
    assert_eq!(assigned, open_tile_count(&grid));
}

#[test]
fn test_partition_drops_rooms_on_blocked_grid() {
    let mut grid = TileGrid::new(20, 16).unwrap();
    let cells = ndarray::Array2::from_elem((16, 20), Cell::Blocked);
    grid.replace(cells);

    let graph = RoomGraph::partition(&grid);
    assert_eq!(graph.room_count(), 0);
}

#[test]
fn test_links_respect_distance_and_climb_gates() {
    let mut grid = TileGrid::new(40, 24).unwrap();
    let mut rng = StdRng::seed_from_u64(17);
    grid.randomize(0.3, &mut rng);

    let graph = RoomGraph::partition(&grid);

    for (from, room) in graph.rooms().iter().enumerate() {
        for &to in graph.links(from) {
            let target = graph.rooms().get(to).unwrap();
            assert!(manhattan(room.center, target.center) < 7);
            // The link may descend any amount but climbs at most two rows
            assert!(i64::from(room.center[1]) - i64::from(target.center[1]) <= 2);
        }
    }
}

#[test]
fn test_route_falls_back_to_corners_without_candidate_rooms() {
    let graph = RoomGraph::default();
    let mut rng = StdRng::seed_from_u64(1);

    let ends = select_route(&graph, 40, 30, &mut rng);
    assert_eq!(ends, default_ends(40, 30));
    assert_eq!(ends.start, [2, 2]);
    assert_eq!(ends.end, [37, 27]);
}

#[test]
fn test_route_endpoints_are_room_centers() {
    let mut grid = TileGrid::new(40, 24).unwrap();
    let mut rng = StdRng::seed_from_u64(23);
    grid.randomize(0.3, &mut rng);

    let graph = RoomGraph::partition(&grid);
    let has_top_room = graph.rooms().iter().any(|room| room.center[1] < 4);

    let ends = select_route(&graph, grid.width(), grid.height(), &mut rng);

    if has_top_room {
        assert!(
            graph
                .rooms()
                .iter()
                .any(|room| room.center == ends.start && room.center[1] < 4)
        );
        assert!(graph.rooms().iter().any(|room| room.center == ends.end));
    } else {
        assert_eq!(ends, default_ends(grid.width(), grid.height()));
    }
}

#[test]
fn test_default_ends_clamp_to_tiny_grids() {
    let ends = default_ends(2, 2);
    assert_eq!(ends.start, [1, 1]);
    assert_eq!(ends.end, [0, 0]);
}
