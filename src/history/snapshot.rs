//! Board snapshots for undo/redo.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// A frozen copy of the board and the score at that moment.
///
/// Taking a snapshot is O(1) because `Board` is backed by a persistent map.
/// Later writes to the live board never reach a stored snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    score: u64,
}

impl Snapshot {
    /// Capture a board and score.
    #[must_use]
    pub fn new(board: Board, score: u64) -> Self {
        Self { board, score }
    }

    /// The stored board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The stored score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Split into board and score.
    #[must_use]
    pub fn into_parts(self) -> (Board, u64) {
        (self.board, self.score)
    }
}
