//! Shared error taxonomy.

use thiserror::Error;

/// Recoverable gameplay errors surfaced as plain text at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A block key that is not part of the catalog.
    #[error("Unknown block type '{0}'")]
    UnknownBlock(String),
    /// A direction token that is not one of the six cardinal directions.
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
    /// World construction with non-positive width/depth or height <= 4.
    #[error("World dimensions must be positive with height > 4 (got {width}x{depth}x{height})")]
    InvalidWorldDimensions {
        /// Requested world width (x extent).
        width: i32,
        /// Requested world depth (z extent).
        depth: i32,
        /// Requested world height (y extent).
        height: i32,
    },
}
