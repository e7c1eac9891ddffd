//! Game rules outside the move itself: when a game is won or over.
//!
//! These are pure functions of the board so front ends and tests can ask
//! without going through a `GameState`.

pub mod status;

pub use status::{evaluate, is_game_over, is_won, GameStatus};
