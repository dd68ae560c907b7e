//! Route endpoint selection over the directed room graph
//!
//! The selector walks the graph breadth-first by whole frontier layers
//! rather than per-node distances; the route should span as many layers of
//! the graph as possible, and the identity of the individual deepest node
//! matters less than its depth.

use crate::io::configuration::{DEFAULT_END_MARGIN, START_ROW_BAND};
use crate::spatial::rooms::RoomGraph;
use bitvec::prelude::*;
use rand::Rng;

/// Start and end positions the carver must connect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEnds {
    /// Route start position
    pub start: [i32; 2],
    /// Route end position
    pub end: [i32; 2],
}

/// Fixed fallback endpoints near opposite grid corners
///
/// Used when no room qualifies as a start candidate, and as the initial
/// endpoint state before any selection has run.
pub fn default_ends(width: usize, height: usize) -> RouteEnds {
    let w = width as i32;
    let h = height as i32;
    RouteEnds {
        start: [DEFAULT_END_MARGIN.min(w - 1), DEFAULT_END_MARGIN.min(h - 1)],
        end: [
            (w - 1 - DEFAULT_END_MARGIN).max(0),
            (h - 1 - DEFAULT_END_MARGIN).max(0),
        ],
    }
}

/// Pick route endpoints from the room graph
///
/// A start room is drawn uniformly from the rooms whose center lies within
/// [`START_ROW_BAND`] rows of the top edge. From there a layered breadth-
/// first traversal follows outgoing links without revisiting; the last
/// room of the deepest non-empty layer becomes the end room. Both
/// positions are the chosen rooms' centers.
pub fn select_route(
    graph: &RoomGraph,
    width: usize,
    height: usize,
    rng: &mut impl Rng,
) -> RouteEnds {
    let candidates: Vec<usize> = graph
        .rooms()
        .iter()
        .enumerate()
        .filter(|(_, room)| room.center[1] < START_ROW_BAND)
        .map(|(index, _)| index)
        .collect();

    if candidates.is_empty() {
        return default_ends(width, height);
    }

    let chosen = rng.random_range(0..candidates.len());
    let start_room = candidates.get(chosen).copied().unwrap_or(0);

    let mut visited = bitvec![0; graph.room_count()];
    visited.set(start_room, true);

    let mut frontier = vec![start_room];
    let mut deepest = start_room;
    loop {
        let mut next_layer = Vec::new();
        for &room in &frontier {
            for &target in graph.links(room) {
                if visited.get(target).as_deref() == Some(&true) {
                    continue;
                }
                visited.set(target, true);
                next_layer.push(target);
            }
        }
        if next_layer.is_empty() {
            break;
        }
        deepest = next_layer.last().copied().unwrap_or(deepest);
        frontier = next_layer;
    }

    let start = graph
        .rooms()
        .get(start_room)
        .map_or([0, 0], |room| room.center);
    let end = graph.rooms().get(deepest).map_or(start, |room| room.center);
    RouteEnds { start, end }
}
