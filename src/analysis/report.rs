//! Aggregated statistics surface for the external scoring layer
//!
//! The scoring functions that combine these numbers into a single fitness
//! value live outside this crate; the report is the complete set of
//! structural inputs they consume.

use crate::analysis::classifier::PatternCounts;
use crate::analysis::integral::IntegralImage;
use crate::io::configuration::{BAND_ROWS, EDGE_BAND_DEPTH};

/// Structural statistics derived from one grid generation
#[derive(Clone, Debug)]
pub struct LevelReport {
    /// Fraction of the whole grid that is blocked
    pub fill_fraction: f64,
    /// Blocked fraction of each row, top to bottom
    pub row_fills: Vec<f64>,
    /// Blocked fraction of each column, left to right
    pub column_fills: Vec<f64>,
    /// Densities of every [`BAND_ROWS`]-high band, sliding one row at a time
    pub band_densities: Vec<f64>,
    /// Density difference between the leftmost and rightmost edge bands
    pub edge_column_bias: f64,
    /// Density difference between the top and bottom edge bands
    pub edge_row_bias: f64,
    /// Classifier category and orientation counters
    pub counts: PatternCounts,
    /// Number of surviving rooms in the current partition
    pub room_count: usize,
}

impl LevelReport {
    /// Assemble the report from already-computed derived statistics
    pub fn compute(integral: &IntegralImage, counts: PatternCounts, room_count: usize) -> Self {
        Self {
            fill_fraction: integral.fill_fraction(),
            row_fills: (0..integral.height())
                .map(|y| integral.row_fill(y))
                .collect(),
            column_fills: (0..integral.width())
                .map(|x| integral.column_fill(x))
                .collect(),
            band_densities: integral.band_densities(BAND_ROWS),
            edge_column_bias: integral.edge_column_bias(EDGE_BAND_DEPTH),
            edge_row_bias: integral.edge_row_bias(EDGE_BAND_DEPTH),
            counts,
            room_count,
        }
    }
}
