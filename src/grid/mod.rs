/// Grid owner and setup status
pub mod owner;
/// Drag-completion snap resolution
pub mod snap;
/// Placement, replacement and backfill orchestration
pub mod tile_grid;

pub use owner::GridOwner;
pub use snap::{DragOutcome, DragSnapResolver, SnapCandidate, SnapDecision, SnapPoint};
pub use tile_grid::{OccupancyCensus, TileGrid};
