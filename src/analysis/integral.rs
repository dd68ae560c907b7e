//! Summed-area table over blocked cells
//!
//! One O(W·H) build pass buys O(1) blocked-cell counts for any axis-aligned
//! rectangle via inclusion-exclusion, which is what makes the density
//! statistics cheap enough to query repeatedly per generation.

use crate::spatial::grid::TileGrid;
use ndarray::Array2;

/// Prefix-sum table of blocked-cell counts
///
/// `table[x, y]` holds the number of blocked cells in the inclusive
/// rectangle from (0, 0) to (x, y), satisfying
/// `table[x,y] = grid[x,y] + table[x-1,y] + table[x,y-1] - table[x-1,y-1]`
/// with out-of-range terms treated as zero.
#[derive(Clone, Debug)]
pub struct IntegralImage {
    table: Array2<u32>,
    width: usize,
    height: usize,
}

impl IntegralImage {
    /// Build the table from the current grid contents in one pass
    pub fn build(grid: &TileGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut table = Array2::<u32>::zeros((height, width));

        for y in 0..height {
            for x in 0..width {
                let own = i64::from(grid.get(x as i32, y as i32).is_blocked());
                let value = own + prefix(&table, x as i32 - 1, y as i32)
                    + prefix(&table, x as i32, y as i32 - 1)
                    - prefix(&table, x as i32 - 1, y as i32 - 1);
                if let Some(slot) = table.get_mut([y, x]) {
                    *slot = value as u32;
                }
            }
        }

        Self {
            table,
            width,
            height,
        }
    }

    /// Width of the underlying grid in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the underlying grid in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Count blocked cells in the inclusive rectangle, clamped to bounds
    pub fn region_count(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        let y1 = y1.min(self.height as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return 0;
        }

        let sum = prefix(&self.table, x1, y1) - prefix(&self.table, x0 - 1, y1)
            - prefix(&self.table, x1, y0 - 1)
            + prefix(&self.table, x0 - 1, y0 - 1);
        sum as u32
    }

    /// Count blocked cells over the whole grid
    pub fn total_blocked(&self) -> u32 {
        self.region_count(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Fraction of the whole grid that is blocked
    pub fn fill_fraction(&self) -> f64 {
        f64::from(self.total_blocked()) / (self.width * self.height) as f64
    }

    /// Fraction of one row that is blocked
    pub fn row_fill(&self, y: usize) -> f64 {
        let count = self.region_count(0, y as i32, self.width as i32 - 1, y as i32);
        f64::from(count) / self.width as f64
    }

    /// Fraction of one column that is blocked
    pub fn column_fill(&self, x: usize) -> f64 {
        let count = self.region_count(x as i32, 0, x as i32, self.height as i32 - 1);
        f64::from(count) / self.height as f64
    }

    /// Blocked density of a horizontal band starting at `y0`
    ///
    /// Bands reaching past the bottom edge are truncated to the rows that
    /// exist; a band starting outside the grid has density zero.
    pub fn band_density(&self, y0: usize, rows: usize) -> f64 {
        if y0 >= self.height || rows == 0 {
            return 0.0;
        }
        let last = (y0 + rows - 1).min(self.height - 1);
        let count = self.region_count(0, y0 as i32, self.width as i32 - 1, last as i32);
        let cells = self.width * (last - y0 + 1);
        f64::from(count) / cells as f64
    }

    /// Densities of every `rows`-high band, sliding one row at a time
    pub fn band_densities(&self, rows: usize) -> Vec<f64> {
        if rows == 0 || rows > self.height {
            return Vec::new();
        }
        (0..=self.height - rows)
            .map(|y0| self.band_density(y0, rows))
            .collect()
    }

    /// Density difference between the leftmost and rightmost column bands
    pub fn edge_column_bias(&self, depth: usize) -> f64 {
        let depth = depth.clamp(1, self.width);
        let cells = (depth * self.height) as f64;
        let left = self.region_count(0, 0, depth as i32 - 1, self.height as i32 - 1);
        let right = self.region_count(
            (self.width - depth) as i32,
            0,
            self.width as i32 - 1,
            self.height as i32 - 1,
        );
        (f64::from(left) - f64::from(right)) / cells
    }

    /// Density difference between the top and bottom row bands
    pub fn edge_row_bias(&self, depth: usize) -> f64 {
        let depth = depth.clamp(1, self.height);
        let cells = (depth * self.width) as f64;
        let top = self.region_count(0, 0, self.width as i32 - 1, depth as i32 - 1);
        let bottom = self.region_count(
            0,
            (self.height - depth) as i32,
            self.width as i32 - 1,
            self.height as i32 - 1,
        );
        (f64::from(top) - f64::from(bottom)) / cells
    }
}

// Point lookup with out-of-range coordinates reading as zero
fn prefix(table: &Array2<u32>, x: i32, y: i32) -> i64 {
    if x < 0 || y < 0 {
        return 0;
    }
    table
        .get([y as usize, x as usize])
        .copied()
        .map_or(0, i64::from)
}
