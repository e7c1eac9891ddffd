//! A single tile: a value sitting at a position.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// A numbered tile on the board.
///
/// Tiles are plain values. The board stores `position → value` and hands
/// out `Tile`s on lookup, so holding one never borrows the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Tile value (2, 4, or any merge result).
    pub value: u32,
    /// Where the tile sits.
    pub position: Position,
}

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(value: u32, position: Position) -> Self {
        Self { value, position }
    }

    /// Row of this tile.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.position.row
    }

    /// Column of this tile.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.position.col
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.value, self.position)
    }
}
