//! Error types.
//!
//! Nothing here is fatal. Every failure in the engine comes back as a
//! `GameError` value so a front end can show a notice and keep going.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which history operation was attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryAction::Undo => f.write_str("undo"),
            HistoryAction::Redo => f.write_str("redo"),
        }
    }
}

/// Errors reported by the board, history and game state.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A board mutator was given a cell outside the grid.
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    InvalidPosition {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// `move_to` was asked to move a tile from an empty cell.
    #[error("no tile at ({row}, {col})")]
    EmptyCell { row: usize, col: usize },

    /// A tile value of zero; empty cells are absent, never stored as `0`.
    #[error("tile at ({row}, {col}) must have a positive value")]
    ZeroTile { row: usize, col: usize },

    /// Undo or redo with nothing stored.
    #[error("{0} is not available: history is empty")]
    EmptyHistory(HistoryAction),

    /// Configuration rejected by `GameConfig::validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias used across the crate.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidPosition { row: 4, col: 0, rows: 4, cols: 4 };
        assert_eq!(err.to_string(), "position (4, 0) is outside the 4x4 board");

        let err = GameError::EmptyCell { row: 1, col: 2 };
        assert_eq!(err.to_string(), "no tile at (1, 2)");

        let err = GameError::ZeroTile { row: 0, col: 3 };
        assert_eq!(err.to_string(), "tile at (0, 3) must have a positive value");

        let err = GameError::EmptyHistory(HistoryAction::Undo);
        assert_eq!(err.to_string(), "undo is not available: history is empty");

        let err = GameError::EmptyHistory(HistoryAction::Redo);
        assert_eq!(err.to_string(), "redo is not available: history is empty");
    }
}
