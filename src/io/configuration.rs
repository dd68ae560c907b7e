//! Generation constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Room lattice seeding
/// Horizontal stride between seeded room centers
pub const ROOM_STRIDE_X: usize = 5;
/// Vertical stride between seeded room centers
pub const ROOM_STRIDE_Y: usize = 4;
/// Offset of the first seeded center from the grid origin
pub const ROOM_SEED_OFFSET: usize = 2;
/// Assigned-tile count a room must exceed to survive recentering
pub const MIN_ROOM_TILES: usize = 4;

// The lattice converges toward open-space clusters within a pass or two;
// the bound is fixed rather than convergence-driven
/// Number of assign-and-recenter passes per partition
pub const ASSIGNMENT_PASSES: usize = 2;

// Room linking
/// Manhattan center distance below which rooms link
pub const LINK_MAX_MANHATTAN: i64 = 7;
/// Maximum upward displacement a link may climb, in tiles
pub const LINK_UPWARD_SLACK: i64 = 2;

// Route selection
/// Rows from the top edge in which start rooms are sought
pub const START_ROW_BAND: i32 = 4;
/// Corner margin of the fallback endpoints
pub const DEFAULT_END_MARGIN: i32 = 2;

// Carving cost model
/// Base cost of any single step
pub const STEP_COST: f64 = 1.0;
/// Penalty for stepping onto an open cell, direction-independent
pub const OPEN_STEP_PENALTY: f64 = 1.0;
/// Penalty for tunneling downward into a blocked cell
pub const BLOCKED_DOWN_PENALTY: f64 = 500.0;
/// Penalty for tunneling upward into a blocked cell
pub const BLOCKED_UP_PENALTY: f64 = 50.0;
/// Penalty for tunneling sideways into a blocked cell
pub const BLOCKED_LATERAL_PENALTY: f64 = 200.0;

// Statistics
/// Height of the sliding density bands, in rows
pub const BAND_ROWS: usize = 5;
/// Depth of the opposite edge bands compared for density symmetry
pub const EDGE_BAND_DEPTH: usize = 3;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid width
pub const DEFAULT_WIDTH: usize = 40;
/// Default grid height
pub const DEFAULT_HEIGHT: usize = 30;
/// Default initial wall fill percentage
pub const DEFAULT_FILL_PERCENT: u8 = 40;
/// Default Moore neighborhood radius for reshape sensors
pub const DEFAULT_RADIUS: usize = 1;
/// Default number of reshape passes
pub const DEFAULT_RESHAPE_STEPS: usize = 2;
/// Default number of levels per batch
pub const DEFAULT_LEVEL_COUNT: usize = 1;

// Level export metadata defaults; the downstream loader consumes these
// lines opaquely but requires their presence and order
/// Author line written into exported levels
pub const LEVEL_AUTHOR: &str = "cavegen";
/// Title line written into exported levels
pub const LEVEL_TITLE: &str = "Generated cave";
/// Numeric header fields following the title line
pub const LEVEL_NUMERIC_FIELDS: [i32; 4] = [200, 16, 16, 0];
/// Revision field closing the numeric header block
pub const LEVEL_REVISION: i32 = 1;
