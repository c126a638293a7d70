//! Tile placement, replacement, backfill and drag commits over one lattice
//!
//! The grid owns its lattice, the snap-point list and the draggable set.
//! Every mutation goes through `&mut self`, so a grid is only ever driven by
//! one event at a time.

use tracing::{debug, info, warn};

use crate::grid::snap::{DragOutcome, DragSnapResolver, SnapCandidate, SnapDecision, SnapPoint};
use crate::io::configuration::GridConfig;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Cell, Lattice, Position};
use crate::tiles::{Presentation, Tile, TileFactory, TileId, TileKind};

/// Counts of cell states across the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccupancyCensus {
    /// Cells holding the filler tile
    pub empty_tiles: usize,
    /// Cells holding a populated tile
    pub populated_tiles: usize,
    /// Cells holding nothing
    pub vacant_cells: usize,
}

/// Orchestrator for a fixed-size tile lattice
///
/// Dropping the grid destroys every resident and draggable presentation.
pub struct TileGrid<F: TileFactory> {
    config: GridConfig,
    lattice: Lattice<Cell<F::Presentation>>,
    factory: F,
    resolver: DragSnapResolver,
    snap_points: Vec<SnapPoint>,
    draggables: Vec<Tile<F::Presentation>>,
    next_tile_id: u64,
}

impl<F: TileFactory> TileGrid<F> {
    /// Build a grid centred on `owner_position` and backfill every cell
    ///
    /// The lattice origin is the owner position shifted by half the grid
    /// extent on each axis.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the configuration fails validation
    /// - no tile factory is supplied
    /// - the factory cannot produce the filler tile
    pub fn init(config: GridConfig, owner_position: Position, factory: Option<F>) -> Result<Self> {
        config.validate()?;
        let factory = factory.ok_or_else(|| {
            invalid_parameter(
                "tile_factory",
                &"none",
                &"a tile factory must be supplied before initialization",
            )
        })?;

        let offset = Position::new(
            config.width as f32 * config.cell_size / 2.0,
            config.height as f32 * config.cell_size / 2.0,
        );
        let lattice = Lattice::new(
            config.width,
            config.height,
            config.cell_size,
            owner_position - offset,
            |x, y| Cell::new(x as i32, y as i32),
        )?;

        let mut grid = Self {
            resolver: DragSnapResolver::new(config.snap_range),
            config,
            lattice,
            factory,
            snap_points: Vec::new(),
            draggables: Vec::new(),
            next_tile_id: 0,
        };

        let filled = grid.fill_null_tiles()?;
        info!(
            width = grid.config.width,
            height = grid.config.height,
            cell_size = grid.config.cell_size,
            filled,
            "tile grid initialized"
        );

        Ok(grid)
    }

    /// Place the tile registered under `id` at `(x, y)`, replacing any occupant
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is negative
    /// - `(x, y)` is outside the lattice
    /// - the factory produces nothing, or a presentation without tile data
    pub fn add_tile(&mut self, id: i32, x: i32, y: i32) -> Result<&Tile<F::Presentation>> {
        if id < 0 {
            return Err(GridError::InvalidTileId { id });
        }
        self.check_bounds(x, y)?;

        let center = self.cell_center(x, y);
        let presentation = self
            .factory
            .create_by_id(id, center)
            .ok_or_else(|| factory_failure(format!("id {id}"), center))?;

        self.install(x, y, presentation, "add_tile")?;
        self.tile_at(x, y)
    }

    /// Place the tile registered under `name` at `(x, y)`, replacing any occupant
    ///
    /// Name validity is left to the factory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `(x, y)` is outside the lattice
    /// - the factory produces nothing, or a presentation without tile data
    pub fn add_tile_by_name(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
    ) -> Result<&Tile<F::Presentation>> {
        self.check_bounds(x, y)?;

        let center = self.cell_center(x, y);
        let presentation = self
            .factory
            .create_by_name(name, center)
            .ok_or_else(|| factory_failure(format!("name '{name}'"), center))?;

        self.install(x, y, presentation, "add_tile_by_name")?;
        self.tile_at(x, y)
    }

    /// World position of the centre anchor of `(x, y)`
    pub fn cell_center(&self, x: i32, y: i32) -> Position {
        self.lattice.cell_center(x, y)
    }

    /// Fill every vacant cell with the filler tile, x outer and y inner
    ///
    /// Returns the number of cells filled; a second call in a row fills none.
    ///
    /// # Errors
    ///
    /// Returns the first placement error, typically the factory not knowing
    /// the filler id.
    pub fn fill_null_tiles(&mut self) -> Result<usize> {
        let vacant: Vec<(i32, i32)> = self
            .lattice
            .iter()
            .filter(|(_, cell)| !cell.is_occupied())
            .map(|(coordinates, _)| coordinates)
            .collect();

        let empty_id = self.config.empty_tile_id;
        for &(x, y) in &vacant {
            debug!(x, y, "cell is vacant, filling");
            self.add_tile(empty_id, x, y)?;
        }

        Ok(vacant.len())
    }

    /// Hand a presentation to the grid as a draggable tile
    ///
    /// # Errors
    ///
    /// Returns `MissingTileData` if the presentation carries no tile data;
    /// the presentation is destroyed in that case.
    pub fn register_draggable(&mut self, presentation: F::Presentation) -> Result<TileId> {
        let Some(kind) = presentation.tile_kind() else {
            presentation.destroy();
            return Err(GridError::MissingTileData {
                operation: "register_draggable",
            });
        };

        let mut tile = Tile::new(self.allocate_id(), kind, presentation);
        tile.set_parent(self.lattice.origin());
        let id = tile.id();
        debug!(tile = %id, position = %tile.position(), "draggable registered");
        self.draggables.push(tile);
        Ok(id)
    }

    /// Create a tile by id at `position` and register it as draggable
    ///
    /// # Errors
    ///
    /// Returns an error if the id is negative, the factory produces nothing,
    /// or the result carries no tile data.
    pub fn spawn_draggable(&mut self, id: i32, position: Position) -> Result<TileId> {
        if id < 0 {
            return Err(GridError::InvalidTileId { id });
        }
        let presentation = self
            .factory
            .create_by_id(id, position)
            .ok_or_else(|| factory_failure(format!("id {id}"), position))?;
        self.register_draggable(presentation)
    }

    /// Lift the tile out of `(x, y)` into the draggable set
    ///
    /// The cell stays vacant until the drag resolves.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `VacantCell`.
    pub fn begin_drag_from_cell(&mut self, x: i32, y: i32) -> Result<TileId> {
        self.check_bounds(x, y)?;
        let tile = self
            .lattice
            .get_mut(x, y)
            .and_then(Cell::vacate)
            .ok_or(GridError::VacantCell { x, y })?;

        let id = tile.id();
        self.remove_snap_point(id);
        debug!(tile = %id, x, y, "tile lifted from cell");
        self.draggables.push(tile);
        Ok(id)
    }

    /// Move a draggable tile; called by whatever captures the gesture
    ///
    /// # Errors
    ///
    /// Returns `UnknownDraggable` if `id` is not being dragged.
    pub fn move_draggable(&mut self, id: TileId, position: Position) -> Result<()> {
        let tile = self
            .draggables
            .iter_mut()
            .find(|tile| tile.id() == id)
            .ok_or(GridError::UnknownDraggable { tile: id })?;
        tile.set_position(position);
        Ok(())
    }

    /// Resolve a completed drag of `id`
    ///
    /// The nearest snap point within range wins and the tile is locked onto
    /// it, replacing whatever occupied that cell. Otherwise the tile is
    /// destroyed. Either way vacant cells are backfilled afterwards.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDraggable` if `id` is not being dragged, or a
    /// backfill error. A backfill error after a snap arrives once the dragged
    /// tile is already installed and any previous occupant destroyed; only
    /// the refill of vacant cells is missing, and a later
    /// [`fill_null_tiles`](Self::fill_null_tiles) completes it.
    pub fn end_drag(&mut self, id: TileId) -> Result<DragOutcome> {
        let index = self
            .draggables
            .iter()
            .position(|tile| tile.id() == id)
            .ok_or(GridError::UnknownDraggable { tile: id })?;
        let mut tile = self.draggables.remove(index);

        let candidate = match self.resolver.evaluate(self.snap_points(), tile.position()) {
            SnapDecision::Snap(candidate) => candidate,
            SnapDecision::Reject(nearest) => return self.reject(tile, nearest),
        };

        tile.set_position(candidate.position);
        let Some((x, y)) = self.lattice.coordinates_at(tile.position()) else {
            return self.reject(tile, Some(candidate));
        };

        let replaced = self.place(x, y, tile)?;
        let backfilled = self.fill_null_tiles()?;
        debug!(tile = %id, x, y, distance = candidate.distance, "drag snapped");

        Ok(DragOutcome::Snapped {
            tile: id,
            cell: (x, y),
            position: candidate.position,
            replaced,
            backfilled,
        })
    }

    /// Snap anchors in registration order
    pub fn snap_points(&self) -> impl Iterator<Item = (TileId, Position)> + '_ {
        self.snap_points.iter().filter_map(|point| {
            let (x, y) = point.cell;
            let tile = self.lattice.get(x, y).and_then(Cell::tile)?;
            (tile.id() == point.tile).then(|| (point.tile, tile.position()))
        })
    }

    /// Number of registered snap anchors
    pub fn snap_point_count(&self) -> usize {
        self.snap_points.len()
    }

    /// Cell at `(x, y)`
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell<F::Presentation>> {
        self.lattice.get(x, y)
    }

    /// Cell a world position rounds to
    pub fn cell_at(&self, position: Position) -> Option<&Cell<F::Presentation>> {
        self.lattice.get_at(position)
    }

    /// Tile resident at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `VacantCell`.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<&Tile<F::Presentation>> {
        self.check_bounds(x, y)?;
        self.lattice
            .get(x, y)
            .and_then(Cell::tile)
            .ok_or(GridError::VacantCell { x, y })
    }

    /// Tile currently being dragged
    pub fn draggable(&self, id: TileId) -> Option<&Tile<F::Presentation>> {
        self.draggables.iter().find(|tile| tile.id() == id)
    }

    /// Ids of every tile currently being dragged
    pub fn draggable_ids(&self) -> Vec<TileId> {
        self.draggables.iter().map(Tile::id).collect()
    }

    /// Lattice width, height and cell size
    pub fn map_settings(&self) -> (usize, usize, f32) {
        (
            self.lattice.width(),
            self.lattice.height(),
            self.lattice.cell_size(),
        )
    }

    /// Count filler, populated and vacant cells
    pub fn occupancy(&self) -> OccupancyCensus {
        self.lattice
            .iter()
            .fold(OccupancyCensus::default(), |mut census, (_, cell)| {
                match cell.tile().map(Tile::kind) {
                    Some(TileKind::Empty) => census.empty_tiles += 1,
                    Some(TileKind::Populated(_)) => census.populated_tiles += 1,
                    None => census.vacant_cells += 1,
                }
                census
            })
    }

    /// Read-only view of the lattice
    pub const fn lattice(&self) -> &Lattice<Cell<F::Presentation>> {
        &self.lattice
    }

    /// Configuration the grid was built with
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Snap tolerance in world units
    pub const fn snap_range(&self) -> f32 {
        self.resolver.snap_range()
    }

    /// The registered tile factory
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    fn install(
        &mut self,
        x: i32,
        y: i32,
        presentation: F::Presentation,
        operation: &'static str,
    ) -> Result<Option<TileId>> {
        let Some(kind) = presentation.tile_kind() else {
            warn!(x, y, operation, "factory output carries no tile data");
            presentation.destroy();
            return Err(GridError::MissingTileData { operation });
        };

        let mut tile = Tile::new(self.allocate_id(), kind, presentation);
        tile.set_parent(self.lattice.origin());
        if kind.is_empty() {
            tile.set_active(false);
        }
        debug!(tile = %tile.id(), x, y, position = %tile.position(), "tile created");

        self.place(x, y, tile)
    }

    // Installs `tile`, destroying any occupant and keeping snap points in step
    fn place(&mut self, x: i32, y: i32, tile: Tile<F::Presentation>) -> Result<Option<TileId>> {
        let id = tile.id();
        let registers = self.registers_snap_point(tile.kind());

        let Some(cell) = self.lattice.get_mut(x, y) else {
            tile.destroy();
            return Err(self.out_of_bounds(x, y));
        };
        let previous = cell.occupy(tile);

        let replaced = previous.map(|old| {
            let old_id = old.id();
            debug!(tile = %old_id, x, y, "cell already occupied, destroying previous tile");
            self.remove_snap_point(old_id);
            old.destroy();
            old_id
        });

        if registers {
            self.snap_points.push(SnapPoint {
                tile: id,
                cell: (x, y),
            });
        }

        Ok(replaced)
    }

    fn reject(
        &mut self,
        tile: Tile<F::Presentation>,
        nearest: Option<SnapCandidate>,
    ) -> Result<DragOutcome> {
        let id = tile.id();
        let nearest_distance = nearest.map(|candidate| candidate.distance);
        debug!(tile = %id, ?nearest_distance, "drag rejected, destroying tile");
        tile.destroy();

        let backfilled = self.fill_null_tiles()?;
        Ok(DragOutcome::Rejected {
            tile: id,
            nearest_distance,
            backfilled,
        })
    }

    const fn registers_snap_point(&self, kind: TileKind) -> bool {
        !kind.is_empty() || self.config.snap_to_empty
    }

    fn remove_snap_point(&mut self, id: TileId) {
        self.snap_points.retain(|point| point.tile != id);
    }

    const fn allocate_id(&mut self) -> TileId {
        self.next_tile_id += 1;
        TileId(self.next_tile_id)
    }

    fn check_bounds(&self, x: i32, y: i32) -> Result<()> {
        if self.lattice.contains(x, y) {
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.lattice.width(),
            height: self.lattice.height(),
        }
    }
}

impl<F: TileFactory> Drop for TileGrid<F> {
    fn drop(&mut self) {
        let mut destroyed = 0_usize;
        for (x, y) in self.lattice.coordinates() {
            if let Some(tile) = self.lattice.get_mut(x, y).and_then(Cell::vacate) {
                tile.destroy();
                destroyed += 1;
            }
        }
        for tile in self.draggables.drain(..) {
            tile.destroy();
            destroyed += 1;
        }
        self.snap_points.clear();
        debug!(destroyed, "tile grid torn down");
    }
}

fn factory_failure(request: String, position: Position) -> GridError {
    warn!(%request, %position, "tile factory produced nothing");
    GridError::FactoryFailure { request, position }
}
