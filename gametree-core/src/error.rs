//! Error types for move application and strategy persistence

use thiserror::Error;

/// Errors raised when a position would be driven into an invalid state
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move {index} out of range (must be below {limit})")]
    MoveOutOfRange { index: usize, limit: usize },

    #[error("invalid move: cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("invalid move: board {board} already has a completed line (move {index})")]
    BoardInactive { board: usize, index: usize },

    #[error("game already over")]
    GameOver,

    #[error("a Notakto game needs at least one board")]
    NoBoards,

    #[error("strategy table serialization error: {0}")]
    StrategyIo(#[from] serde_json::Error),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
