//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - World positions and planar distance
//! - The fixed-size lattice and its world transform
//! - Cell occupancy

/// Single lattice slot and its occupancy
pub mod cell;
/// Fixed-size lattice with world transform
pub mod lattice;
/// World-space positions
pub mod position;

pub use cell::{Cell, Occupancy};
pub use lattice::Lattice;
pub use position::Position;
