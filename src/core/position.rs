//! Grid coordinates.
//!
//! A `Position` is a `(row, col)` pair. Positions order row-major (row
//! first, then column), which is the traversal order of every board.
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::Position;
//!
//! let a = Position::new(0, 3);
//! let b = Position::new(1, 0);
//!
//! // Row-major ordering
//! assert!(a < b);
//!
//! // Bounds checks need the grid size
//! assert!(a.in_bounds(4, 4));
//! assert!(!Position::new(4, 0).in_bounds(4, 4));
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// Field order matters: the derived `Ord` compares `row` before `col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this position lies inside a `rows × cols` grid.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Offset by a signed delta.
    ///
    /// Returns `None` if either coordinate would go negative. The result is
    /// not bounds-checked against any grid.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
