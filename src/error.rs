//! Error types for puzzle operations and persistence

use std::io;

/// Errors raised by grid access and puzzle mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// A cell outside the current grid was addressed
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Grid dimensions must both be positive
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Not every word could be fitted into the grid
    #[error("could not place {unplaced} word(s) in a {width}x{height} grid")]
    PlacementFailed {
        unplaced: usize,
        width: usize,
        height: usize,
    },

    /// A word index outside the word list
    #[error("no word at index {index} (puzzle has {len} words)")]
    NoSuchWord { index: usize, len: usize },
}

impl PuzzleError {
    /// True for the recoverable "grid too small" outcome
    #[must_use]
    pub const fn is_placement_failure(&self) -> bool {
        matches!(self, Self::PlacementFailed { .. })
    }
}

/// Errors raised while saving or loading puzzle documents
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed puzzle document: {0}")]
    Format(#[from] serde_json::Error),

    #[error("unsupported puzzle document version {0}")]
    UnsupportedVersion(u32),

    #[error("invalid puzzle document: {0}")]
    Invalid(#[from] PuzzleError),
}
