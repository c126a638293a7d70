//! Tile identity, classification and the placed tile record

use std::fmt;

use crate::spatial::Position;
use crate::tiles::factory::Presentation;

/// Grid-assigned identity of a tile, unique for the lifetime of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tile data classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Filler occupying otherwise vacant cells
    Empty,
    /// A real tile of the given catalog category
    Populated(u32),
}

impl TileKind {
    /// Whether this is the filler kind
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A presentation paired with the tile data read from it
#[derive(Debug)]
pub struct Tile<P> {
    id: TileId,
    kind: TileKind,
    presentation: P,
}

impl<P: Presentation> Tile<P> {
    /// Pair a presentation with its identity and kind
    pub const fn new(id: TileId, kind: TileKind, presentation: P) -> Self {
        Self {
            id,
            kind,
            presentation,
        }
    }

    /// Grid-assigned identity
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Tile data classification
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// The backing presentation
    pub const fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Current position of the presentation
    pub fn position(&self) -> Position {
        self.presentation.position()
    }

    /// Move the presentation
    pub fn set_position(&mut self, position: Position) {
        self.presentation.set_position(position);
    }

    /// Show or hide the presentation
    pub fn set_active(&mut self, active: bool) {
        self.presentation.set_active(active);
    }

    /// Attach the presentation under the grid transform
    pub fn set_parent(&mut self, parent: Position) {
        self.presentation.set_parent(parent);
    }

    /// Remove the presentation from the scene
    pub fn destroy(self) {
        self.presentation.destroy();
    }
}
