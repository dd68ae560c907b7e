//! Version-keyed memoization of derived grid statistics
//!
//! The summed-area table and the classifier counts are pure functions of
//! the grid contents, so they are computed at most once per grid version
//! and dropped together the moment the version moves on.

use crate::analysis::classifier::{self, PatternCounts};
use crate::analysis::integral::IntegralImage;
use crate::spatial::grid::TileGrid;

/// Lazily computed statistics tied to one grid version
#[derive(Debug, Default)]
pub struct DerivedAnalysis {
    version: Option<u64>,
    integral: Option<IntegralImage>,
    counts: Option<PatternCounts>,
}

impl DerivedAnalysis {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self {
            version: None,
            integral: None,
            counts: None,
        }
    }

    // Drop stale values when the grid has moved past the cached version
    fn sync(&mut self, grid: &TileGrid) {
        if self.version != Some(grid.version()) {
            self.integral = None;
            self.counts = None;
            self.version = Some(grid.version());
        }
    }

    /// Summed-area table for the grid's current contents
    pub fn integral(&mut self, grid: &TileGrid) -> &IntegralImage {
        self.sync(grid);
        self.integral
            .get_or_insert_with(|| IntegralImage::build(grid))
    }

    /// Classifier counters for the grid's current contents
    pub fn pattern_counts(&mut self, grid: &TileGrid) -> PatternCounts {
        self.sync(grid);
        *self.counts.get_or_insert_with(|| classifier::classify(grid))
    }
}
