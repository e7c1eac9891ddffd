//! Win and game-over detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won yet.
    InProgress,
    /// Some tile reached the win threshold. Play may continue.
    Won,
    /// The board is full and nothing can merge.
    GameOver,
}

impl GameStatus {
    /// Check if no further move can change the board.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

/// Check if any tile is at or above `threshold`.
#[must_use]
pub fn is_won(board: &Board, threshold: u32) -> bool {
    board.tiles().any(|tile| tile.value >= threshold)
}

/// Check if the board is full and no two orthogonal neighbours match.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() && !board.has_adjacent_equal()
}

/// Classify a board. Game over wins ties: a stuck board is over even if it
/// also holds a winning tile.
#[must_use]
pub fn evaluate(board: &Board, threshold: u32) -> GameStatus {
    if is_game_over(board) {
        GameStatus::GameOver
    } else if is_won(board, threshold) {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}
