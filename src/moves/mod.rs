//! Move engine: direction-parameterized sliding and merging.
//!
//! `apply_move` compacts every line of the board toward one wall, merging
//! equal neighbours once per move. It reports what changed and leaves
//! spawning and history to the caller.

pub mod engine;
pub mod line;

pub use engine::{apply_move, available_moves, can_move, MoveOutcome};
pub use line::Line;
