//! Error types and status mapping for grid operations

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::STATUS_FAILURE;
use crate::spatial::Position;
use crate::tiles::TileId;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Grid or lattice parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cell coordinates fall outside the lattice
    OutOfBounds {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
        /// Lattice width
        width: usize,
        /// Lattice height
        height: usize,
    },

    /// Numeric tile id is not a valid catalog id
    InvalidTileId {
        /// The rejected id
        id: i32,
    },

    /// The tile factory produced nothing for a request
    FactoryFailure {
        /// Description of the requested tile (`id 5`, `name 'hull'`)
        request: String,
        /// World position the tile was requested at
        position: Position,
    },

    /// A presentation was supplied without tile data attached
    MissingTileData {
        /// Operation that received the presentation
        operation: &'static str,
    },

    /// The tile is not in the draggable set
    UnknownDraggable {
        /// Id of the tile that was looked up
        tile: TileId,
    },

    /// The cell holds no tile to pick up
    VacantCell {
        /// Cell column
        x: i32,
        /// Cell row
        y: i32,
    },

    /// The grid owner has not completed initialization
    NotInitialized,

    /// Failed to save a debug image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Coarse classification of a [`GridError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing collaborators or invalid dimensions at setup time
    Configuration,
    /// Coordinates, ids or handles that address nothing
    Bounds,
    /// The tile factory could not produce a usable tile
    Factory,
    /// File system or encoding failures in the debug tooling
    Io,
}

impl GridError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } | Self::NotInitialized => ErrorCategory::Configuration,
            Self::OutOfBounds { .. }
            | Self::InvalidTileId { .. }
            | Self::UnknownDraggable { .. }
            | Self::VacantCell { .. } => ErrorCategory::Bounds,
            Self::FactoryFailure { .. } | Self::MissingTileData { .. } => ErrorCategory::Factory,
            Self::ImageExport { .. } | Self::FileSystem { .. } => ErrorCategory::Io,
        }
    }

    /// Integer status reported to callers that use the status-code contract
    pub const fn status_code(&self) -> i32 {
        STATUS_FAILURE
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Cell [{x}, {y}] is out of bounds for a {width}x{height} lattice"
                )
            }
            Self::InvalidTileId { id } => write!(f, "Tile id {id} is invalid"),
            Self::FactoryFailure { request, position } => {
                write!(f, "Tile factory produced nothing for {request} at {position}")
            }
            Self::MissingTileData { operation } => {
                write!(f, "Presentation passed to {operation} carries no tile data")
            }
            Self::UnknownDraggable { tile } => {
                write!(f, "Tile {tile} is not registered as draggable")
            }
            Self::VacantCell { x, y } => write!(f, "Cell [{x}, {y}] holds no tile"),
            Self::NotInitialized => write!(f, "Grid has not been initialized"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Collapse a result into the `0` / `-1` status contract
pub fn status<T>(result: &Result<T>) -> i32 {
    result
        .as_ref()
        .map_or_else(GridError::status_code, |_| crate::io::configuration::STATUS_OK)
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
