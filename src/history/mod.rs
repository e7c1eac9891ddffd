//! Undo/redo history.
//!
//! `History` stores `Snapshot`s taken before each successful move. It never
//! looks inside them; the game state decides what to capture and restore.

pub mod manager;
pub mod snapshot;

pub use manager::History;
pub use snapshot::Snapshot;
