//! Grid owner: holds the grid and reports setup status
//!
//! Replaces process-wide grid access. Whoever needs the grid borrows it from
//! the owner.

use tracing::{error, info};

use crate::grid::tile_grid::TileGrid;
use crate::io::configuration::{GridConfig, STATUS_OK};
use crate::io::error::{GridError, Result};
use crate::spatial::Position;
use crate::tiles::TileFactory;

/// Owner of a single [`TileGrid`] centred on the owner's position
pub struct GridOwner<F: TileFactory> {
    position: Position,
    config: GridConfig,
    grid: Option<TileGrid<F>>,
}

impl<F: TileFactory> GridOwner<F> {
    /// Owner at `position`; `config` supplies everything `init` does not
    pub const fn new(position: Position, config: GridConfig) -> Self {
        Self {
            position,
            config,
            grid: None,
        }
    }

    /// Build the grid and report `0` on success or `-1` on failure
    ///
    /// A failed call leaves any previously built grid in place.
    pub fn init(&mut self, width: usize, height: usize, cell_size: f32, factory: Option<F>) -> i32 {
        match self.try_init(width, height, cell_size, factory) {
            Ok(_) => STATUS_OK,
            Err(err) => {
                error!(%err, "grid initialization failed");
                err.status_code()
            }
        }
    }

    /// Build the grid, replacing any existing one
    ///
    /// The replaced grid is dropped, which destroys its presentations.
    ///
    /// # Errors
    ///
    /// Propagates configuration and factory errors from [`TileGrid::init`].
    pub fn try_init(
        &mut self,
        width: usize,
        height: usize,
        cell_size: f32,
        factory: Option<F>,
    ) -> Result<&mut TileGrid<F>> {
        let config = GridConfig {
            width,
            height,
            cell_size,
            ..self.config.clone()
        };
        let grid = TileGrid::init(config.clone(), self.position, factory)?;
        info!(position = %self.position, "grid attached to owner");
        self.config = config;
        Ok(self.grid.insert(grid))
    }

    /// Whether a grid has been built
    pub const fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// The owned grid
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` before a successful `init`.
    pub fn grid(&self) -> Result<&TileGrid<F>> {
        self.grid.as_ref().ok_or(GridError::NotInitialized)
    }

    /// The owned grid, mutably
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` before a successful `init`.
    pub fn grid_mut(&mut self) -> Result<&mut TileGrid<F>> {
        self.grid.as_mut().ok_or(GridError::NotInitialized)
    }

    /// World position the grid is centred on
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Configuration used by the most recent successful `init`
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }
}
