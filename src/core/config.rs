//! Game configuration.
//!
//! `GameConfig` fixes everything that stays constant for one game: grid
//! size, win threshold, undo depth, spawn odds and the RNG seed. Build one
//! with `Default` plus the `with_*` methods, then hand it to `GameState::new`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Default number of snapshots kept for undo.
pub const DEFAULT_UNDO_DEPTH: usize = 5;

/// Default tile value that wins the game.
pub const DEFAULT_WIN_THRESHOLD: u32 = 2048;

/// Default chance that a spawned tile is a 4 instead of a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Largest board accepted, in cells.
pub const MAX_CELLS: usize = 1 << 20;

/// Cell count of a `rows × cols` board, or `InvalidConfig` if either side is
/// zero or the product is past `MAX_CELLS`.
pub(crate) fn checked_cell_count(rows: usize, cols: usize) -> GameResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(GameError::InvalidConfig("board must have at least one row and one column"));
    }
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_CELLS => Ok(cells),
        _ => Err(GameError::InvalidConfig("board has too many cells")),
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (at least 1).
    pub rows: usize,

    /// Number of columns (at least 1).
    pub cols: usize,

    /// A tile reaching this value wins the game.
    pub win_threshold: u32,

    /// Maximum snapshots kept on the undo stack.
    /// The oldest is dropped when a new one would exceed it.
    pub undo_depth: usize,

    /// Probability in `[0, 1]` that a spawned tile is a 4.
    pub four_probability: f64,

    /// Tiles spawned when a game starts.
    pub initial_tiles: usize,

    /// Random seed for tile spawning.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            undo_depth: DEFAULT_UNDO_DEPTH,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: 2,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a config for a `rows × cols` board with default settings.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the winning tile value.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the undo depth.
    #[must_use]
    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self
    }

    /// Set the chance of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of tiles on a fresh board.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total cells on the board. Saturates instead of overflowing.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        let cells = checked_cell_count(self.rows, self.cols)?;
        if self.win_threshold == 0 {
            return Err(GameError::InvalidConfig("win threshold must be positive"));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidConfig("four probability must lie in [0, 1]"));
        }
        if self.initial_tiles > cells {
            return Err(GameError::InvalidConfig("more initial tiles than cells"));
        }
        Ok(())
    }
}
