//! Neighbor-bitmask structural classification
//!
//! Each tile gets a 4-bit code from the blocked state of its cardinal
//! neighbors, and the code selects a structural category depending on the
//! tile's own state. The classifier is deliberately local (radius 1) and
//! the categories deliberately do not cover every code; counters are a
//! coarse structural fingerprint, not a partition of the grid.

use crate::spatial::grid::TileGrid;

/// Bit set when the north neighbor is blocked
pub const NORTH: u8 = 1;
/// Bit set when the south neighbor is blocked
pub const SOUTH: u8 = 2;
/// Bit set when the west neighbor is blocked
pub const WEST: u8 = 4;
/// Bit set when the east neighbor is blocked
pub const EAST: u8 = 8;

/// Build the 4-bit cardinal neighbor code for one tile
///
/// Out-of-bounds neighbors count as blocked, so edge and corner tiles
/// always carry the corresponding bits.
pub fn neighbor_code(grid: &TileGrid, x: i32, y: i32) -> u8 {
    let mut code = 0;
    if grid.get(x, y - 1).is_blocked() {
        code |= NORTH;
    }
    if grid.get(x, y + 1).is_blocked() {
        code |= SOUTH;
    }
    if grid.get(x - 1, y).is_blocked() {
        code |= WEST;
    }
    if grid.get(x + 1, y).is_blocked() {
        code |= EAST;
    }
    code
}

/// Per-category tile counters for one grid generation
///
/// Category counters do not sum to W·H: wall codes 5, 6, 9, 10 and open
/// codes 1, 2, 4, 5, 6, 8, 9, 10 increment nothing, and wall codes 7, 11,
/// 13, 14 increment only an orientation counter. Callers must not assume
/// the counts partition the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternCounts {
    /// Walls with no cardinal wall neighbor
    pub loners: usize,
    /// Walls with exactly one cardinal wall neighbor
    pub ends: usize,
    /// Walls with walls directly above and below only
    pub platforms: usize,
    /// Walls with walls directly left and right only
    pub spires: usize,
    /// Walls enclosed on all four sides
    pub solids: usize,
    /// Open cells with no cardinal wall neighbor
    pub empties: usize,
    /// Open cells with walls directly above and below only
    pub pits: usize,
    /// Open cells with walls directly left and right only
    pub tunnels: usize,
    /// Open cells with exactly three cardinal wall neighbors
    pub nooks: usize,
    /// Open cells enclosed on all four sides
    pub holes: usize,
    /// Orientation counter for horizontally-reading wall tiles
    pub horizontal_walls: usize,
    /// Orientation counter for vertically-reading wall tiles
    pub vertical_walls: usize,
}

/// Classify every tile of the grid in a single pass
pub fn classify(grid: &TileGrid) -> PatternCounts {
    let mut counts = PatternCounts::default();

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let code = neighbor_code(grid, x, y);
            if grid.get(x, y).is_blocked() {
                classify_wall(code, &mut counts);
            } else {
                classify_open(code, &mut counts);
            }
        }
    }

    counts
}

const fn classify_wall(code: u8, counts: &mut PatternCounts) {
    match code {
        0 => counts.loners += 1,
        1 | 2 | 4 | 8 => counts.ends += 1,
        3 => {
            counts.platforms += 1;
            counts.horizontal_walls += 1;
        }
        12 => {
            counts.spires += 1;
            counts.vertical_walls += 1;
        }
        15 => counts.solids += 1,
        7 | 11 => counts.vertical_walls += 1,
        13 | 14 => counts.horizontal_walls += 1,
        // 5, 6, 9, 10: diagonal-corner codes stay unclassified
        _ => {}
    }
}

const fn classify_open(code: u8, counts: &mut PatternCounts) {
    match code {
        0 => counts.empties += 1,
        3 => counts.pits += 1,
        12 => counts.tunnels += 1,
        7 | 11 | 13 | 14 => counts.nooks += 1,
        15 => counts.holes += 1,
        // remaining codes stay unclassified
        _ => {}
    }
}
