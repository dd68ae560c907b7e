//! Room partitioning and the directed room adjacency graph
//!
//! Rooms are seeded on a fixed lattice regardless of grid contents, then
//! pulled toward real open-space clusters by a bounded number of
//! assign-and-recenter passes. The relaxation is deliberately not run to
//! convergence; one or two passes are enough for the downstream route
//! selection and the fixed bound keeps the cost predictable.

use crate::io::configuration::{
    ASSIGNMENT_PASSES, LINK_MAX_MANHATTAN, LINK_UPWARD_SLACK, MIN_ROOM_TILES, ROOM_SEED_OFFSET,
    ROOM_STRIDE_X, ROOM_STRIDE_Y,
};
use crate::math::metrics::{euclidean_sq, manhattan};
use crate::spatial::grid::TileGrid;

/// A spatial cluster of open tiles represented by its center
#[derive(Clone, Debug)]
pub struct Room {
    /// Current center position, replaced by the centroid on recenter
    pub center: [i32; 2],
    /// Number of open tiles assigned in the most recent assignment pass
    pub tile_count: usize,
    /// Component-wise sum of assigned tile positions
    tile_sum: [i64; 2],
}

impl Room {
    const fn seeded_at(x: i32, y: i32) -> Self {
        Self {
            center: [x, y],
            tile_count: 0,
            tile_sum: [0, 0],
        }
    }

    fn absorb(&mut self, x: i32, y: i32) {
        self.tile_sum[0] += i64::from(x);
        self.tile_sum[1] += i64::from(y);
        self.tile_count += 1;
    }

    fn centroid(&self) -> [i32; 2] {
        if self.tile_count == 0 {
            return self.center;
        }
        let count = self.tile_count as i64;
        [
            (self.tile_sum[0] / count) as i32,
            (self.tile_sum[1] / count) as i32,
        ]
    }

    const fn clear_accumulators(&mut self) {
        self.tile_sum = [0, 0];
        self.tile_count = 0;
    }
}

/// Rooms plus directed adjacency lists keyed by room index
///
/// Links are computed per ordered pair and are not symmetrized; a link
/// i→j without the reverse j→i is a valid state the route selector
/// depends on.
#[derive(Clone, Debug, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    links: Vec<Vec<usize>>,
}

impl RoomGraph {
    /// Partition the grid's open space into rooms and link them
    ///
    /// Runs the assign-and-recenter cycle [`ASSIGNMENT_PASSES`] times,
    /// then one final assignment so surviving rooms carry populated tile
    /// counts, then derives the directed link lists.
    pub fn partition(grid: &TileGrid) -> Self {
        let mut rooms = seed_lattice(grid.width(), grid.height());

        for _ in 0..ASSIGNMENT_PASSES {
            assign_tiles(grid, &mut rooms);
            retain_and_recenter(&mut rooms);
        }
        assign_tiles(grid, &mut rooms);

        let links = link_rooms(&rooms);
        Self { rooms, links }
    }

    /// Number of surviving rooms
    pub const fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All surviving rooms in seeding order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Outgoing links of a room, empty for unknown indices
    pub fn links(&self, room: usize) -> &[usize] {
        self.links.get(room).map_or(&[], Vec::as_slice)
    }
}

/// Seed room centers on a fixed lattice covering the whole grid
///
/// Placement is independent of grid contents; the assignment passes are
/// what move centers toward actual open space.
pub fn seed_lattice(width: usize, height: usize) -> Vec<Room> {
    let mut rooms = Vec::new();
    let mut y = ROOM_SEED_OFFSET;
    while y < height {
        let mut x = ROOM_SEED_OFFSET;
        while x < width {
            rooms.push(Room::seeded_at(x as i32, y as i32));
            x += ROOM_STRIDE_X;
        }
        y += ROOM_STRIDE_Y;
    }
    rooms
}

/// Assign every open tile to its nearest room by Euclidean distance
///
/// Distances are compared against each room's current center as it stood
/// before this pass; ties keep the earliest-scanned room. Accumulators are
/// reset first, so after the pass the rooms' tile counts sum to the number
/// of open tiles in the grid.
pub fn assign_tiles(grid: &TileGrid, rooms: &mut [Room]) {
    for room in rooms.iter_mut() {
        room.clear_accumulators();
    }
    if rooms.is_empty() {
        return;
    }

    let centers: Vec<[i32; 2]> = rooms.iter().map(|room| room.center).collect();

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if !grid.get(x, y).is_open() {
                continue;
            }

            let mut nearest = 0;
            let mut nearest_sq = i64::MAX;
            for (index, center) in centers.iter().enumerate() {
                let sq = euclidean_sq([x, y], *center);
                if sq < nearest_sq {
                    nearest = index;
                    nearest_sq = sq;
                }
            }

            if let Some(room) = rooms.get_mut(nearest) {
                room.absorb(x, y);
            }
        }
    }
}

// Rooms at or below the tile threshold are dropped; survivors move to the
// centroid of their assigned tiles and start the next pass empty.
fn retain_and_recenter(rooms: &mut Vec<Room>) {
    rooms.retain_mut(|room| {
        if room.tile_count > MIN_ROOM_TILES {
            room.center = room.centroid();
            room.clear_accumulators();
            true
        } else {
            false
        }
    });
}

// Directed link i→j when j sits no more than LINK_UPWARD_SLACK tiles above
// i and the Manhattan center distance stays under LINK_MAX_MANHATTAN.
pub(crate) fn link_rooms(rooms: &[Room]) -> Vec<Vec<usize>> {
    let mut links = vec![Vec::new(); rooms.len()];

    for (from, a) in rooms.iter().enumerate() {
        for (to, b) in rooms.iter().enumerate() {
            if from == to {
                continue;
            }
            let upward = i64::from(a.center[1]) - i64::from(b.center[1]);
            if upward > LINK_UPWARD_SLACK {
                continue;
            }
            if manhattan(a.center, b.center) < LINK_MAX_MANHATTAN {
                if let Some(list) = links.get_mut(from) {
                    list.push(to);
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::{Room, link_rooms, seed_lattice};

    fn room_at(x: i32, y: i32) -> Room {
        Room {
            center: [x, y],
            tile_count: 0,
            tile_sum: [0, 0],
        }
    }

    // A room links downward freely but refuses to climb more than the
    // upward slack, producing an asymmetric edge pair
    #[test]
    fn test_links_are_directed_and_asymmetric() {
        let rooms = vec![room_at(10, 10), room_at(10, 14)];
        let links = link_rooms(&rooms);

        assert_eq!(links.first().map(Vec::as_slice), Some(&[1][..]));
        assert_eq!(links.get(1).map(Vec::as_slice), Some(&[][..]));
    }

    #[test]
    fn test_links_respect_manhattan_threshold() {
        let rooms = vec![room_at(0, 0), room_at(7, 0), room_at(6, 0)];
        let links = link_rooms(&rooms);

        // Distance 7 is excluded, distance 6 qualifies
        assert_eq!(links.first().map(Vec::as_slice), Some(&[2][..]));
    }

    #[test]
    fn test_lattice_covers_grid_independent_of_content() {
        let rooms = seed_lattice(20, 16);

        // Strides 5 and 4 from offset 2: x in {2, 7, 12, 17}, y in {2, 6, 10, 14}
        assert_eq!(rooms.len(), 16);
        assert!(rooms.iter().all(|room| room.tile_count == 0));
        assert_eq!(rooms.first().map(|room| room.center), Some([2, 2]));
        assert_eq!(rooms.last().map(|room| room.center), Some([17, 14]));
    }
}
