//! Error types for the match engine

use thiserror::Error;

use crate::types::Position;

/// Addressing errors raised by the grid.
///
/// These are programming errors: every index the engine handles on a gameplay
/// path comes from the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A position with a component outside `-1..=1`
    #[error("invalid coordinate ({}, {}, {})", .0.x, .0.y, .0.z)]
    InvalidCoordinate(Position),

    /// A linear index outside `0..27`
    #[error("invalid cell index {0}")]
    InvalidIndex(usize),
}

/// Highscore persistence failures.
///
/// Stores log and swallow these; they never reach gameplay code.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("highscore file I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed highscore document: {0}")]
    Json(#[from] serde_json::Error),
}
