//! Fixed-size tile lattice with placement, backfill and drag-to-snap repositioning
//!
//! A `TileGrid` owns a lattice of cells, fills every cell through a
//! caller-supplied tile factory, and resolves completed drag gestures by
//! locking the dragged tile onto the nearest snap anchor within range.

#![forbid(unsafe_code)]

/// Tile grid orchestration, drag resolution and the grid owner
pub mod grid;
/// Configuration, errors, debug output and the CLI
pub mod io;
/// Positions, the lattice and its cells
pub mod spatial;
/// Tile records, presentation seams and the built-in catalog
pub mod tiles;

pub use grid::{DragOutcome, GridOwner, TileGrid};
pub use io::configuration::GridConfig;
pub use io::error::{GridError, Result};
pub use spatial::{Lattice, Position};
