//! # rust-2048
//!
//! Core engine for 2048-style sliding-tile puzzles.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, input devices or sound. Front ends
//!    read the query surface and send `Command`s.
//!
//! 2. **Any Grid Size**: Rows and columns are configured per game, not
//!    fixed at 4×4.
//!
//! 3. **Deterministic**: Spawns come from a seeded RNG, so a seed plus a
//!    command list replays a whole game.
//!
//! ## Architecture
//!
//! - **Sparse Board**: Occupied cells only, keyed by position in row-major
//!   order.
//!
//! - **Persistent Data Structures**: O(1) board snapshots via `im-rs`, so
//!   taking an undo snapshot before every move costs nothing.
//!
//! - **Key-Based Anchors**: The move engine tracks merge candidates by
//!   position, never by reference into the board.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, commands, configuration, errors, RNG,
//!   game state
//! - `board`: Sparse tile storage and random spawning
//! - `moves`: Sliding and merging along rows or columns
//! - `history`: Bounded undo and unbounded redo of snapshots
//! - `rules`: Win and game-over detection

pub mod core;
pub mod board;
pub mod moves;
pub mod history;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Position, Direction, Command,
    GameConfig, GameError, GameResult, HistoryAction,
    GameRng, GameRngState,
    GameState, CommandOutcome,
};

pub use crate::board::{Board, Tile};

pub use crate::moves::{apply_move, can_move, available_moves, Line, MoveOutcome};

pub use crate::history::{History, Snapshot};

pub use crate::rules::{GameStatus, evaluate, is_game_over, is_won};
