//! Board storage: a sparse grid of tiles.
//!
//! The board only knows where tiles are and what they're worth. Sliding and
//! merging live in `moves`; undo/redo lives in `history`.

pub mod grid;
pub mod tile;

pub use grid::Board;
pub use tile::Tile;
