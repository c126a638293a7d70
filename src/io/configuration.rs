//! Grid constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Status contract shared with callers that expect integer results
/// Status returned by successful initialization
pub const STATUS_OK: i32 = 0;
/// Status returned by any failed operation
pub const STATUS_FAILURE: i32 = -1;

/// Edge length of a single cell in world units
pub const DEFAULT_CELL_SIZE: f32 = 10.0;

// One cell size, so a drop only locks onto its own or a directly adjacent anchor
/// Maximum planar distance at which a dragged tile still snaps
pub const DEFAULT_SNAP_RANGE: f32 = 10.0;

/// Catalog id of the filler tile used to backfill vacant cells
pub const EMPTY_TILE_ID: i32 = 100;

/// Catalog name of the filler tile
pub const EMPTY_TILE_NAME: &str = "empty";

/// Default lattice width and height
pub const DEFAULT_GRID_SIZE: usize = 96;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed lattice dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Session simulation defaults
/// Fixed seed for reproducible sessions
pub const DEFAULT_SEED: u64 = 42;
/// Number of simulated drag gestures
pub const DEFAULT_DRAG_COUNT: usize = 500;
/// Number of direct placements before dragging starts
pub const DEFAULT_PLACEMENT_COUNT: usize = 200;
/// Probability that a simulated drag picks up an already placed tile
pub const PICK_UP_PROBABILITY: f64 = 0.3;
/// Drop jitter around the target cell centre, in cells
pub const DROP_JITTER_CELLS: f32 = 1.5;

// Debug image settings
/// Pixels used for each cell edge in exported debug images
pub const DEBUG_PIXELS_PER_CELL: u32 = 8;
/// Colour of the lattice lines
pub const GRID_LINE_COLOR: [u8; 4] = [0, 255, 255, 255];
/// Colour of cells holding the filler tile
pub const EMPTY_TILE_COLOR: [u8; 4] = [48, 48, 48, 255];
/// Palette cycled through for populated tile kinds
pub const TILE_PALETTE: [[u8; 4]; 6] = [
    [230, 57, 70, 255],
    [241, 250, 238, 255],
    [69, 123, 157, 255],
    [244, 162, 97, 255],
    [42, 157, 143, 255],
    [233, 196, 106, 255],
];

/// Runtime configuration for a [`TileGrid`](crate::grid::TileGrid)
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Edge length of one cell in world units
    pub cell_size: f32,
    /// Maximum distance at which a dragged tile snaps
    pub snap_range: f32,
    /// Catalog id used when backfilling vacant cells
    pub empty_tile_id: i32,
    /// Whether filler tiles register snap points; off by default so only
    /// populated tiles are anchors
    pub snap_to_empty: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            snap_range: DEFAULT_SNAP_RANGE,
            empty_tile_id: EMPTY_TILE_ID,
            snap_to_empty: false,
        }
    }
}

impl GridConfig {
    /// Configuration with the given dimensions and defaults elsewhere
    pub fn with_size(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            ..Self::default()
        }
    }

    /// Check every parameter before any grid state is built
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - width or height is zero or above [`MAX_GRID_DIMENSION`]
    /// - cell size is not a positive finite number
    /// - snap range is negative or not finite
    /// - the filler id is negative
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be within 1..={MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be a positive finite number",
            ));
        }

        if !(self.snap_range.is_finite() && self.snap_range >= 0.0) {
            return Err(invalid_parameter(
                "snap_range",
                &self.snap_range,
                &"must be a non-negative finite number",
            ));
        }

        if self.empty_tile_id < 0 {
            return Err(invalid_parameter(
                "empty_tile_id",
                &self.empty_tile_id,
                &"must be a non-negative catalog id",
            ));
        }

        Ok(())
    }
}
