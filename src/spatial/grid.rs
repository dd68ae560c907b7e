//! Mutable tile buffer with closed-edge bounds semantics
//!
//! The grid owns the level's cell states and is the single source of truth
//! every derived structure is computed from. Reads outside the grid always
//! observe [`Cell::Blocked`], so edge handling never needs special cases in
//! callers. A version counter increments on every mutation; derived caches
//! compare against it instead of embedding sentinel values.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::invalid_parameter;
use ndarray::Array2;
use rand::Rng;

/// State of a single level cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Traversable air
    Open,
    /// Solid wall
    Blocked,
}

impl Cell {
    /// Test for the wall state
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Test for the air state
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Numeric encoding used by sensor vectors (`Blocked` = 1, `Open` = 0)
    pub const fn encode(self) -> f64 {
        match self {
            Self::Open => 0.0,
            Self::Blocked => 1.0,
        }
    }
}

/// Fixed-size two-valued tile grid
///
/// Coordinates are `(x, y)` with `x` growing rightward and `y` growing
/// downward; storage is row-major `[y, x]`. The grid is replaced wholesale
/// by randomization and reshaping, and mutated cell-by-cell only while a
/// route is being carved.
#[derive(Clone, Debug)]
pub struct TileGrid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
    version: u64,
}

impl TileGrid {
    /// Create a grid of the given dimensions with every cell `Open`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(width: usize, height: usize) -> crate::io::error::Result<Self> {
        if width == 0 || width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if height == 0 || height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        Ok(Self {
            cells: Array2::from_elem((height, width), Cell::Open),
            width,
            height,
            version: 0,
        })
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Mutation counter used to invalidate derived caches
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Read a cell, treating every out-of-bounds coordinate as `Blocked`
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return Cell::Blocked;
        }
        self.cells
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(Cell::Blocked)
    }

    /// Open a cell in place, ignoring out-of-bounds coordinates
    ///
    /// Route carving near the grid edge may produce coordinates one cell
    /// outside the declared bounds; those writes are dropped here rather
    /// than guarded at every call site.
    pub fn set_open(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        if let Some(cell) = self.cells.get_mut([y as usize, x as usize]) {
            if cell.is_blocked() {
                *cell = Cell::Open;
                self.version += 1;
            }
        }
    }

    /// Independently set each cell to `Blocked` with the given probability
    pub fn randomize(&mut self, fill_probability: f64, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = if rng.random::<f64>() < fill_probability {
                Cell::Blocked
            } else {
                Cell::Open
            };
        }
        self.version += 1;
    }

    /// Atomically swap in a replacement cell array
    ///
    /// The replacement's dimensions become the grid's dimensions; derived
    /// caches are invalidated through the version counter even when the
    /// replacement is identical to the current contents.
    pub fn replace(&mut self, cells: Array2<Cell>) {
        let (height, width) = cells.dim();
        self.cells = cells;
        self.width = width;
        self.height = height;
        self.version += 1;
    }

    /// Clone the cell array as a scratch buffer for all-at-once updates
    pub fn snapshot(&self) -> Array2<Cell> {
        self.cells.clone()
    }
}
