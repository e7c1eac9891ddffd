//! Game state: the single owner of everything a running game needs.
//!
//! ## GameState
//!
//! - Board and undo/redo history
//! - Score (sum of every merge result)
//! - Deterministic RNG for spawns
//! - Cached win / game-over flags, refreshed after every command
//!
//! ## Move lifecycle
//!
//! 1. Snapshot the live board (O(1), copy-on-write).
//! 2. Run the move engine.
//! 3. If nothing moved, stop: no spawn, no history entry.
//! 4. Otherwise save the snapshot, add the merge score, spawn a tile.
//! 5. Refresh the cached flags.

use tracing::debug;

use super::config::GameConfig;
use super::direction::{Command, Direction};
use super::error::{GameError, GameResult, HistoryAction};
use super::rng::{GameRng, GameRngState};
use crate::board::{Board, Tile};
use crate::history::{History, Snapshot};
use crate::moves::{self, MoveOutcome};
use crate::rules::{self, GameStatus};

/// What `dispatch` did with a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A move that changed the board.
    Moved(MoveOutcome),
    /// A move that changed nothing. No tile was spawned.
    Blocked,
    /// Undo succeeded.
    Undone,
    /// Redo succeeded.
    Redone,
    /// The player asked to stop.
    Quit,
}

/// Full game state.
///
/// Exclusively owned by whatever drives the game loop. Every operation runs
/// to completion before returning.
///
/// ## Usage
///
/// ```
/// use rust_2048::core::{Direction, GameConfig, GameState};
///
/// let mut game = GameState::new(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(game.count(), 2);
///
/// let outcome = game.apply_move(Direction::Left);
/// if outcome.moved {
///     assert!(game.can_undo());
///     game.undo().unwrap();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    history: History,
    rng: GameRng,
    score: u64,
    moves: u32,
    won: bool,
    game_over: bool,
}

impl GameState {
    /// Start a new game.
    ///
    /// Spawns `config.initial_tiles` tiles on an empty board.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;

        let mut state = Self {
            board: Board::new(config.rows, config.cols),
            history: History::new(config.undo_depth),
            rng: GameRng::new(config.seed),
            score: 0,
            moves: 0,
            won: false,
            game_over: false,
            config,
        };
        state.spawn_initial_tiles();
        state.refresh_flags();

        debug!(
            rows = state.config.rows,
            cols = state.config.cols,
            seed = state.rng.seed(),
            "new game"
        );
        Ok(state)
    }

    /// Start from an existing board instead of a fresh one.
    ///
    /// Rows and columns come from the board; nothing is spawned, so
    /// `initial_tiles` is not checked against the board size. Useful for
    /// puzzles, tests and resuming a saved game.
    pub fn from_board(config: GameConfig, board: Board) -> GameResult<Self> {
        let config = config.with_size(board.rows(), board.cols());
        config.clone().with_initial_tiles(0).validate()?;

        let mut state = Self {
            board,
            history: History::new(config.undo_depth),
            rng: GameRng::new(config.seed),
            score: 0,
            moves: 0,
            won: false,
            game_over: false,
            config,
        };
        state.refresh_flags();
        Ok(state)
    }

    /// Throw the current game away and start over on a `rows × cols` board.
    ///
    /// Score and history reset. The RNG keeps running, so consecutive games
    /// differ.
    pub fn new_game(&mut self, rows: usize, cols: usize) -> GameResult<()> {
        let config = self.config.clone().with_size(rows, cols);
        config.validate()?;

        self.board = Board::new(rows, cols);
        self.history = History::new(config.undo_depth);
        self.config = config;
        self.score = 0;
        self.moves = 0;
        self.spawn_initial_tiles();
        self.refresh_flags();

        debug!(rows, cols, "restarted");
        Ok(())
    }

    /// Continue the spawn sequence from a saved RNG state.
    ///
    /// Together with `from_board` this resumes a game with the same tiles
    /// it would have spawned had it never stopped.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..self.config.initial_tiles {
            self.spawn();
        }
    }

    fn spawn(&mut self) -> Option<Tile> {
        let tile = self
            .board
            .spawn_random_tile(&mut self.rng, self.config.four_probability);
        if let Some(tile) = tile {
            debug!(%tile, "spawned");
        }
        tile
    }

    fn refresh_flags(&mut self) {
        self.won = rules::is_won(&self.board, self.config.win_threshold);
        self.game_over = rules::is_game_over(&self.board);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.score)
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let (board, score) = snapshot.into_parts();
        self.board = board;
        self.score = score;
        self.refresh_flags();
    }

    // === Commands ===

    /// Slide every tile toward `direction`.
    ///
    /// When anything moved, the pre-move board goes onto the undo stack, redo
    /// is cleared, merge results are added to the score and one tile spawns.
    /// When nothing moved, the game is left exactly as it was.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.snapshot();
        let outcome = moves::apply_move(&mut self.board, direction);

        if !outcome.moved {
            debug!(%direction, "move changed nothing");
            return outcome;
        }

        self.history.save(before);
        self.score += outcome.score_gained;
        self.moves += 1;
        self.spawn();
        self.refresh_flags();

        debug!(
            %direction,
            merges = outcome.merges(),
            gained = outcome.score_gained,
            score = self.score,
            "moved"
        );
        outcome
    }

    /// Return to the state before the last successful move.
    pub fn undo(&mut self) -> GameResult<()> {
        let previous = self
            .history
            .undo(self.snapshot())
            .ok_or(GameError::EmptyHistory(HistoryAction::Undo))?;
        self.restore(previous);

        debug!(score = self.score, "undo");
        Ok(())
    }

    /// Re-apply the state most recently undone.
    pub fn redo(&mut self) -> GameResult<()> {
        let next = self
            .history
            .redo(self.snapshot())
            .ok_or(GameError::EmptyHistory(HistoryAction::Redo))?;
        self.restore(next);

        debug!(score = self.score, "redo");
        Ok(())
    }

    /// Run one front-end command.
    ///
    /// Undo/redo with empty history come back as `Err(EmptyHistory)`; the
    /// game is unchanged and play can continue.
    pub fn dispatch(&mut self, command: Command) -> GameResult<CommandOutcome> {
        match command {
            Command::Move(direction) => {
                let outcome = self.apply_move(direction);
                if outcome.moved {
                    Ok(CommandOutcome::Moved(outcome))
                } else {
                    Ok(CommandOutcome::Blocked)
                }
            }
            Command::Undo => self.undo().map(|()| CommandOutcome::Undone),
            Command::Redo => self.redo().map(|()| CommandOutcome::Redone),
            Command::Quit => Ok(CommandOutcome::Quit),
        }
    }

    // === Queries ===

    /// Tile at `(row, col)`; `None` if empty or off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.board.get(row, col)
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn count(&self) -> usize {
        self.board.count()
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Moves that changed the board since the game started. Undo and redo
    /// leave it alone.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Check if any tile has reached the win threshold.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Check if no move can change the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Combined status. Game over takes precedence over won.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The undo/redo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Where the spawn RNG currently stands, for saving the game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The configuration this game runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "Score: {}", self.score)
    }
}
