//! Cellular reshaping step driven by an injected decision capability
//!
//! One pass reads every tile's Moore neighborhood from the previous
//! generation, asks the decision function for a scalar, and writes the
//! rounded result into a scratch grid that replaces the original only
//! after the full pass. Sensor reads never observe partial updates.

use crate::spatial::grid::{Cell, TileGrid};

/// Decision capability mapping a neighborhood sensor vector to one scalar
///
/// Implementations are stateless from the caller's point of view and are
/// invoked once per tile per pass from a single thread. The evolutionary
/// machinery that breeds such functions lives outside this crate; anything
/// that can score a fixed-length sensor vector plugs in here.
pub trait CellDecision {
    /// Score one neighborhood; the caller rounds the result to a cell state
    fn decide(&self, sensors: &[f64]) -> f64;
}

/// Sensor vector length for a Moore neighborhood of the given radius
pub const fn sensor_len(radius: usize) -> usize {
    let side = 2 * radius + 1;
    side * side
}

/// Append the neighborhood states around one tile to a sensor buffer
///
/// Offsets are enumerated column-first (`dx` outer, `dy` inner) to match
/// the order decision functions are trained against. Out-of-bounds
/// neighbors read as `Blocked` through the grid's edge semantics.
pub fn collect_sensors(grid: &TileGrid, x: i32, y: i32, radius: usize, out: &mut Vec<f64>) {
    let r = radius as i32;
    for dx in -r..=r {
        for dy in -r..=r {
            out.push(grid.get(x + dx, y + dy).encode());
        }
    }
}

/// Run one all-at-once reshaping pass over the grid
///
/// Returns whether every raw decision value stayed within [0, 1]. Values
/// outside that range are still rounded and written; only the returned
/// flag records the violation.
pub fn reshape(grid: &mut TileGrid, radius: usize, decision: &dyn CellDecision) -> bool {
    let mut scratch = grid.snapshot();
    let mut sensors = Vec::with_capacity(sensor_len(radius));
    let mut in_range = true;

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            sensors.clear();
            collect_sensors(grid, x, y, radius, &mut sensors);

            let raw = decision.decide(&sensors);
            if !(0.0..=1.0).contains(&raw) {
                in_range = false;
            }

            let cell = if raw.round() >= 1.0 {
                Cell::Blocked
            } else {
                Cell::Open
            };
            if let Some(slot) = scratch.get_mut([y as usize, x as usize]) {
                *slot = cell;
            }
        }
    }

    grid.replace(scratch);
    in_range
}

/// Threshold decision voting with the blocked fraction of the neighborhood
///
/// The stand-in decision used by the CLI and tests; it smooths noise the
/// way classic cellular cave automata do while staying deterministic and
/// always in range.
#[derive(Clone, Copy, Debug)]
pub struct MajorityRule {
    /// Blocked fraction strictly above which the cell becomes a wall
    pub threshold: f64,
}

impl Default for MajorityRule {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl CellDecision for MajorityRule {
    fn decide(&self, sensors: &[f64]) -> f64 {
        if sensors.is_empty() {
            return 0.0;
        }
        let blocked: f64 = sensors.iter().sum();
        if blocked / sensors.len() as f64 > self.threshold {
            1.0
        } else {
            0.0
        }
    }
}
