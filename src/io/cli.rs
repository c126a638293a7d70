//! Command-line interface for simulating placement and drag sessions

use crate::grid::{DragOutcome, GridOwner, OccupancyCensus, TileGrid};
use crate::io::configuration::{
    DEBUG_PIXELS_PER_CELL, DEFAULT_CELL_SIZE, DEFAULT_DRAG_COUNT, DEFAULT_GRID_SIZE,
    DEFAULT_PLACEMENT_COUNT, DEFAULT_SEED, DEFAULT_SNAP_RANGE, DROP_JITTER_CELLS, GridConfig,
    PICK_UP_PROBABILITY,
};
use crate::io::debug_image::export_grid_as_png;
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SessionProgress;
use crate::spatial::Position;
use crate::tiles::{TileCatalog, TileId, TileKind};
use clap::Parser;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(
    author,
    version,
    about = "Simulate tile placement and drag-to-snap sessions on a fixed grid"
)]
/// Command-line arguments for the session simulator
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub height: usize,

    /// Cell edge length in world units
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Maximum distance at which a dropped tile snaps
    #[arg(short = 'r', long, default_value_t = DEFAULT_SNAP_RANGE)]
    pub snap_range: f32,

    /// Random seed for reproducible sessions
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of simulated drag gestures
    #[arg(short, long, default_value_t = DEFAULT_DRAG_COUNT)]
    pub drags: usize,

    /// Number of direct placements before dragging starts
    #[arg(short, long, default_value_t = DEFAULT_PLACEMENT_COUNT)]
    pub placements: usize,

    /// Write a debug PNG of the final lattice
    #[arg(short, long, value_name = "PNG")]
    pub export: Option<PathBuf>,

    /// Let filler tiles act as snap anchors
    #[arg(long)]
    pub snap_to_empty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every placement, replacement and snap
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Grid configuration described by the arguments
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            snap_range: self.snap_range,
            snap_to_empty: self.snap_to_empty,
            ..GridConfig::with_size(self.width, self.height, self.cell_size)
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            "tilegrid=debug"
        } else {
            "tilegrid=info"
        }
    }
}

/// Totals gathered over one simulated session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Direct placements performed
    pub placements: usize,
    /// Drags resolved
    pub drags: usize,
    /// Drags that snapped
    pub snapped: usize,
    /// Drags whose tile was discarded
    pub rejected: usize,
    /// Snaps that destroyed a previous occupant
    pub replaced: usize,
    /// Drags that started by lifting a placed tile
    pub picked_up: usize,
    /// Cells refilled after drags
    pub backfilled: usize,
    /// Final cell states
    pub census: OccupancyCensus,
    /// Snap anchors registered at the end
    pub snap_points: usize,
    /// Presentations the catalog produced
    pub presentations_created: u64,
    /// Presentations destroyed by the grid
    pub presentations_destroyed: usize,
}

impl SessionReport {
    fn record(&mut self, outcome: &DragOutcome) {
        self.drags += 1;
        match *outcome {
            DragOutcome::Snapped {
                replaced,
                backfilled,
                ..
            } => {
                self.snapped += 1;
                self.replaced += usize::from(replaced.is_some());
                self.backfilled += backfilled;
            }
            DragOutcome::Rejected { backfilled, .. } => {
                self.rejected += 1;
                self.backfilled += backfilled;
            }
        }
    }
}

/// Runs a seeded session against the default catalog
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Initialise a grid, place random tiles, then replay random drags
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a grid operation
    /// fails, or the debug image cannot be written.
    pub fn run(&self) -> Result<SessionReport> {
        let config = self.cli.grid_config();
        config.validate()?;

        let catalog = TileCatalog::with_defaults();
        let ids = catalog.populated_ids();
        let ledger = catalog.ledger();
        if ids.is_empty() {
            return Err(invalid_parameter(
                "catalog",
                &"default",
                &"no placeable tiles registered",
            ));
        }

        let mut owner = GridOwner::new(Position::ORIGIN, config.clone());
        let grid = owner.try_init(config.width, config.height, config.cell_size, Some(catalog))?;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut report = SessionReport::default();

        for _ in 0..self.cli.placements {
            let id = pick_id(&ids, &mut rng)?;
            let (x, y) = random_cell(&config, &mut rng);
            grid.add_tile(id, x, y)?;
            report.placements += 1;
        }

        let mut progress = if self.cli.should_show_progress() {
            SessionProgress::new(self.cli.drags)
        } else {
            SessionProgress::hidden(self.cli.drags)
        };

        for _ in 0..self.cli.drags {
            let (tile, picked_up) = start_drag(grid, &ids, &config, &mut rng)?;
            report.picked_up += usize::from(picked_up);

            let (x, y) = random_cell(&config, &mut rng);
            let spread = config.cell_size * DROP_JITTER_CELLS;
            let jitter = Position::new(
                rng.random_range(-spread..=spread),
                rng.random_range(-spread..=spread),
            );
            grid.move_draggable(tile, grid.cell_center(x, y) + jitter)?;

            let outcome = grid.end_drag(tile)?;
            progress.record(outcome.is_snapped());
            report.record(&outcome);
        }
        progress.finish();

        report.census = grid.occupancy();
        report.snap_points = grid.snap_point_count();
        report.presentations_created = ledger.created();
        report.presentations_destroyed = ledger.destroyed();

        if let Some(path) = &self.cli.export {
            export_grid_as_png(grid, DEBUG_PIXELS_PER_CELL, path)?;
            info!(path = %path.display(), "debug image written");
        }

        info!(
            placements = report.placements,
            drags = report.drags,
            snapped = report.snapped,
            rejected = report.rejected,
            replaced = report.replaced,
            populated = report.census.populated_tiles,
            "session finished"
        );

        Ok(report)
    }
}

// Either lifts a populated tile off the board or spawns a fresh one
fn start_drag(
    grid: &mut TileGrid<TileCatalog>,
    ids: &[i32],
    config: &GridConfig,
    rng: &mut StdRng,
) -> Result<(TileId, bool)> {
    if rng.random_bool(PICK_UP_PROBABILITY) {
        let (x, y) = random_cell(config, rng);
        let populated = grid
            .cell(x, y)
            .and_then(|cell| cell.tile())
            .is_some_and(|tile| matches!(tile.kind(), TileKind::Populated(_)));
        if populated {
            return Ok((grid.begin_drag_from_cell(x, y)?, true));
        }
    }

    let id = pick_id(ids, rng)?;
    let (x, y) = random_cell(config, rng);
    Ok((grid.spawn_draggable(id, grid.cell_center(x, y))?, false))
}

fn pick_id(ids: &[i32], rng: &mut StdRng) -> Result<i32> {
    ids.choose(rng)
        .copied()
        .ok_or_else(|| invalid_parameter("catalog", &"default", &"no placeable tiles registered"))
}

fn random_cell(config: &GridConfig, rng: &mut StdRng) -> (i32, i32) {
    (
        rng.random_range(0..config.width as i32),
        rng.random_range(0..config.height as i32),
    )
}
