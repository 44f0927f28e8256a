//! Typed failures for the board model.
//!
//! Every rejection is local and synchronous: construction errors leave no
//! partial board, query and move errors leave the board untouched.

use thiserror::Error;

/// Rejected board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The arm thickness is zero or even.
    #[error("arm thickness must be a positive odd number, got {0}")]
    ArmThickness(usize),
    /// The designated empty slot is not a playable cross position.
    #[error("invalid empty slot position ({row}, {col})")]
    EmptySlot { row: usize, col: usize },
}

/// A query position outside the square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position ({row}, {col}) is outside the {size}x{size} board")]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

/// A rejected move. One variant per legality check, in the order the checks
/// run; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// An endpoint is off the playable cross (or off the grid entirely).
    #[error("position ({row}, {col}) is not on the playable cross")]
    NotPlayable { row: usize, col: usize },
    /// The endpoints are not exactly one diagonal step apart.
    #[error("move must be exactly one step along a diagonal")]
    NotDiagonal,
    /// The source slot does not hold a marble.
    #[error("source slot does not hold a marble")]
    SourceNotMarble,
    /// The destination slot is not empty.
    #[error("destination slot is not empty")]
    DestinationNotEmpty,
    /// The midpoint slot holds no marble to capture.
    #[error("no marble to capture between the two slots")]
    NothingToCapture,
}
