//! Nearest-anchor search for completed drag gestures
//!
//! The resolver only decides; committing an accepted snap (cell replacement,
//! snap-point bookkeeping, backfill) is done by the grid that owns the state.

use crate::spatial::Position;
use crate::tiles::TileId;

/// Anchor registered for an occupied cell
///
/// Holds no position of its own; the position is read from the tile's
/// presentation whenever a drag is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPoint {
    /// Tile whose presentation provides the anchor
    pub tile: TileId,
    /// Cell the tile occupies
    pub cell: (i32, i32),
}

/// Closest anchor found by a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapCandidate {
    /// Tile providing the anchor
    pub tile: TileId,
    /// Anchor position
    pub position: Position,
    /// Planar distance from the dragged tile
    pub distance: f32,
}

/// Verdict for one completed drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapDecision {
    /// Lock onto this anchor
    Snap(SnapCandidate),
    /// Discard the dragged tile; carries the nearest anchor if there was one
    Reject(Option<SnapCandidate>),
}

/// Find the nearest anchor in registration order
///
/// Only a strictly smaller distance replaces the current best, so equal
/// distances keep the earliest-registered anchor.
pub fn nearest_snap_point<I>(anchors: I, from: Position) -> Option<SnapCandidate>
where
    I: IntoIterator<Item = (TileId, Position)>,
{
    let mut best: Option<SnapCandidate> = None;
    for (tile, position) in anchors {
        let distance = from.planar_distance(position);
        match &best {
            Some(current) if distance >= current.distance => {}
            _ => {
                best = Some(SnapCandidate {
                    tile,
                    position,
                    distance,
                });
            }
        }
    }
    best
}

/// Drag-completion policy: nearest anchor within a fixed tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapResolver {
    snap_range: f32,
}

impl DragSnapResolver {
    /// Resolver accepting anchors no further than `snap_range`
    pub const fn new(snap_range: f32) -> Self {
        Self { snap_range }
    }

    /// Snap tolerance in world units
    pub const fn snap_range(&self) -> f32 {
        self.snap_range
    }

    /// Decide where a tile dropped at `from` goes
    pub fn evaluate<I>(&self, anchors: I, from: Position) -> SnapDecision
    where
        I: IntoIterator<Item = (TileId, Position)>,
    {
        match nearest_snap_point(anchors, from) {
            Some(candidate) if candidate.distance <= self.snap_range => {
                SnapDecision::Snap(candidate)
            }
            nearest => SnapDecision::Reject(nearest),
        }
    }
}

/// Result of resolving a drag against the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The tile was locked onto an anchor and installed into a cell
    Snapped {
        /// The dragged tile
        tile: TileId,
        /// Cell it now occupies
        cell: (i32, i32),
        /// Final position, exactly the anchor position
        position: Position,
        /// Tile that previously occupied the cell and was destroyed
        replaced: Option<TileId>,
        /// Vacant cells refilled afterwards
        backfilled: usize,
    },
    /// The tile was destroyed without being installed anywhere
    Rejected {
        /// The dragged tile
        tile: TileId,
        /// Distance to the nearest anchor, if any existed
        nearest_distance: Option<f32>,
        /// Vacant cells refilled afterwards, non-zero only when the tile was
        /// picked up from a cell
        backfilled: usize,
    },
}

impl DragOutcome {
    /// Whether the drag ended in a snap
    pub const fn is_snapped(&self) -> bool {
        matches!(self, Self::Snapped { .. })
    }
}
