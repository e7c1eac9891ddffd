//! Core engine types: positions, directions, configuration, errors, RNG and
//! the game state that ties them together.

pub mod position;
pub mod direction;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use position::Position;
pub use direction::{Command, Direction};
pub use config::GameConfig;
pub use error::{GameError, GameResult, HistoryAction};
pub use rng::{GameRng, GameRngState};
pub use state::{CommandOutcome, GameState};
