//! Best-first route carving with asymmetric directional costs
//!
//! The search runs over the full 4-connected grid graph: blocked cells are
//! enterable at a steep price rather than impassable, which is what lets
//! the carve guarantee a route through solid rock. Costs are asymmetric by
//! design; tunneling downward through a wall is punished far harder than
//! tunneling upward or sideways, so carved routes prefer descending
//! through air and climbing through rock.
//!
//! Two deliberate simplifications are preserved from the reference
//! behavior: the Euclidean heuristic is not admissible under these edge
//! costs, and a cell enqueued once is never re-enqueued when a cheaper
//! path to it appears later. Returned routes are feasible, not minimal.

use crate::io::configuration::{
    BLOCKED_DOWN_PENALTY, BLOCKED_LATERAL_PENALTY, BLOCKED_UP_PENALTY, OPEN_STEP_PENALTY,
    STEP_COST,
};
use crate::math::metrics::euclidean;
use crate::spatial::grid::{Cell, TileGrid};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// Expansion order: north, south, west, east
const NEIGHBOR_STEPS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Result of carving one route
#[derive(Clone, Debug)]
pub struct CarveOutcome {
    /// Carved cells from start to tail inclusive
    pub path: Vec<[i32; 2]>,
    /// Accumulated cost of the tail node under the directional cost model
    pub cost: f64,
    /// Whether the search reached the end position
    ///
    /// `false` means the frontier emptied first and the most recently
    /// popped cell served as a substitute tail; the carved route then ends
    /// somewhere other than the requested end.
    pub reached_end: bool,
}

// Per-cell search state, arena-indexed by y·W + x. A cell is enqueued at
// most once; the g recorded at discovery is the one that sticks.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Untouched,
    Open { g: f64, parent: Option<u32> },
    Closed { g: f64, parent: Option<u32> },
}

// Heap entry ordered min-first on estimated total cost, with the arena
// index as a deterministic tie-breaker.
struct Frontier {
    f: f64,
    index: u32,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.f == other.f
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Carve a route from start to end, opening every cell along it
///
/// Endpoints are clamped into bounds before the search. The search always
/// terminates: at most W·H cells can ever be enqueued, and every popped
/// cell is finalized permanently.
pub fn carve_route(grid: &mut TileGrid, start: [i32; 2], end: [i32; 2]) -> CarveOutcome {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let start = clamp_point(start, width, height);
    let end = clamp_point(end, width, height);

    let mut slots = vec![Slot::Untouched; (width * height) as usize];
    let mut heap = BinaryHeap::new();

    let start_index = index_of(start, width);
    let end_index = index_of(end, width);
    if let Some(slot) = slots.get_mut(start_index as usize) {
        *slot = Slot::Open { g: 0.0, parent: None };
    }
    heap.push(Frontier {
        f: euclidean(start, end),
        index: start_index,
    });

    let mut tail = start_index;
    let mut reached_end = false;

    while let Some(Frontier { index, .. }) = heap.pop() {
        let Some(&Slot::Open { g, parent }) = slots.get(index as usize) else {
            continue;
        };
        if let Some(slot) = slots.get_mut(index as usize) {
            *slot = Slot::Closed { g, parent };
        }
        tail = index;

        if index == end_index {
            reached_end = true;
            break;
        }

        let position = point_of(index, width);
        for (dx, dy) in NEIGHBOR_STEPS {
            let next = [position[0] + dx, position[1] + dy];
            if next[0] < 0 || next[1] < 0 || next[0] >= width || next[1] >= height {
                continue;
            }

            let next_index = index_of(next, width);
            if !matches!(slots.get(next_index as usize), Some(Slot::Untouched)) {
                continue;
            }

            let next_g = g + STEP_COST + step_penalty(grid.get(next[0], next[1]), dy);
            if let Some(slot) = slots.get_mut(next_index as usize) {
                *slot = Slot::Open {
                    g: next_g,
                    parent: Some(index),
                };
            }
            heap.push(Frontier {
                f: next_g + euclidean(next, end),
                index: next_index,
            });
        }
    }

    // Walk back-pointers from the tail to the start, opening every cell
    let mut path = Vec::new();
    let mut cursor = Some(tail);
    while let Some(index) = cursor {
        let position = point_of(index, width);
        grid.set_open(position[0], position[1]);
        path.push(position);
        cursor = match slots.get(index as usize) {
            Some(&(Slot::Closed { parent, .. } | Slot::Open { parent, .. })) => parent,
            _ => None,
        };
    }
    path.reverse();

    let cost = match slots.get(tail as usize) {
        Some(&(Slot::Closed { g, .. } | Slot::Open { g, .. })) => g,
        _ => 0.0,
    };

    CarveOutcome {
        path,
        cost,
        reached_end,
    }
}

// Penalty for stepping onto a cell, keyed by its state and the vertical
// direction of travel (dy = 1 moves down a row).
const fn step_penalty(cell: Cell, dy: i32) -> f64 {
    match cell {
        Cell::Open => OPEN_STEP_PENALTY,
        Cell::Blocked => match dy {
            1 => BLOCKED_DOWN_PENALTY,
            -1 => BLOCKED_UP_PENALTY,
            _ => BLOCKED_LATERAL_PENALTY,
        },
    }
}

const fn clamp_point(point: [i32; 2], width: i32, height: i32) -> [i32; 2] {
    [
        clamp_axis(point[0], width - 1),
        clamp_axis(point[1], height - 1),
    ]
}

const fn clamp_axis(value: i32, max: i32) -> i32 {
    if value < 0 {
        0
    } else if value > max {
        max
    } else {
        value
    }
}

const fn index_of(point: [i32; 2], width: i32) -> u32 {
    (point[1] * width + point[0]) as u32
}

const fn point_of(index: u32, width: i32) -> [i32; 2] {
    [(index as i32) % width, (index as i32) / width]
}
