//! Tile records and the collaborators that produce them
//!
//! This module contains:
//! - Tile identity and classification
//! - The presentation and factory traits
//! - An in-memory catalog implementing the factory

/// In-memory catalog and presentations
pub mod catalog;
/// Presentation and factory traits
pub mod factory;
/// Tile identity, kind and placed tile record
pub mod tile;

pub use catalog::{SceneLedger, SceneTile, TileCatalog, TileTemplate};
pub use factory::{Presentation, TileFactory};
pub use tile::{Tile, TileId, TileKind};
