//! Single addressable lattice slot

use crate::tiles::{Presentation, Tile};

/// What a cell currently holds
#[derive(Debug)]
pub enum Occupancy<P> {
    /// No tile, only valid transiently between a removal and the next backfill
    Empty,
    /// A presentation together with its tile data
    Occupied(Tile<P>),
}

/// One lattice slot
#[derive(Debug)]
pub struct Cell<P> {
    x: i32,
    y: i32,
    occupancy: Occupancy<P>,
}

impl<P: Presentation> Cell<P> {
    /// Vacant cell at `(x, y)`
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            occupancy: Occupancy::Empty,
        }
    }

    /// Lattice coordinates of this cell
    pub const fn coordinates(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Current occupancy
    pub const fn occupancy(&self) -> &Occupancy<P> {
        &self.occupancy
    }

    /// Whether a tile is present
    pub const fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied(_))
    }

    /// The resident tile, if any
    pub const fn tile(&self) -> Option<&Tile<P>> {
        match &self.occupancy {
            Occupancy::Occupied(tile) => Some(tile),
            Occupancy::Empty => None,
        }
    }

    /// Install `tile`, handing back the previous occupant
    pub fn occupy(&mut self, tile: Tile<P>) -> Option<Tile<P>> {
        match std::mem::replace(&mut self.occupancy, Occupancy::Occupied(tile)) {
            Occupancy::Occupied(previous) => Some(previous),
            Occupancy::Empty => None,
        }
    }

    /// Take the resident tile out, leaving the cell vacant
    pub fn vacate(&mut self) -> Option<Tile<P>> {
        match std::mem::replace(&mut self.occupancy, Occupancy::Empty) {
            Occupancy::Occupied(previous) => Some(previous),
            Occupancy::Empty => None,
        }
    }
}
