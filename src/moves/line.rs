//! Lines: the rows or columns a move compacts independently.
//!
//! A left/right move works row by row, an up/down move column by column.
//! Each `Line` lists its cells in travel order, starting at the wall the
//! tiles slide toward. The engine then only ever walks index 0, 1, 2, ...
//! and never needs to know which axis or which wall it is on.

use smallvec::SmallVec;

use crate::core::{Direction, Position};

/// Cells of one row or column, wall side first.
///
/// Inline storage covers boards up to 8 wide; larger boards spill to the
/// heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    cells: SmallVec<[Position; 8]>,
}

impl Line {
    /// Build line `index` of a `rows × cols` board for `direction`.
    ///
    /// `index` is a row for horizontal moves and a column for vertical ones.
    #[must_use]
    pub fn new(rows: usize, cols: usize, direction: Direction, index: usize) -> Self {
        let len = if direction.is_horizontal() { cols } else { rows };

        let at = |step: usize| {
            let along = if direction.toward_start() { step } else { len - 1 - step };
            if direction.is_horizontal() {
                Position::new(index, along)
            } else {
                Position::new(along, index)
            }
        };

        Self {
            cells: (0..len).map(at).collect(),
        }
    }

    /// Every line of the board for `direction`, in row/column order.
    pub fn all(rows: usize, cols: usize, direction: Direction) -> impl Iterator<Item = Line> {
        let count = if direction.is_horizontal() { rows } else { cols };
        (0..count).map(move |index| Line::new(rows, cols, direction, index))
    }

    /// Cells in travel order, wall first.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of cells in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the line has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
