//! Seams to the scene: tile presentations and the factory that makes them

use crate::spatial::Position;
use crate::tiles::tile::TileKind;

/// Handle to the visual object backing a tile
///
/// Implemented by whatever owns the scene graph. The grid only moves,
/// reparents, hides and destroys presentations; it never renders them.
pub trait Presentation {
    /// Tile data attached to this presentation, `None` when it carries none
    fn tile_kind(&self) -> Option<TileKind>;

    /// Current world position
    fn position(&self) -> Position;

    /// Move to a world position
    fn set_position(&mut self, position: Position);

    /// Attach under the grid transform located at `parent`
    fn set_parent(&mut self, parent: Position);

    /// Toggle visibility
    fn set_active(&mut self, active: bool);

    /// Remove from the scene
    fn destroy(self)
    where
        Self: Sized;
}

/// Capability that manufactures presentations from an id or a name
pub trait TileFactory {
    /// Presentation type produced by this factory
    type Presentation: Presentation;

    /// Create the tile registered under `id` at `position`
    fn create_by_id(&mut self, id: i32, position: Position) -> Option<Self::Presentation>;

    /// Create the tile registered under `name` at `position`
    fn create_by_name(&mut self, name: &str, position: Position) -> Option<Self::Presentation>;
}
