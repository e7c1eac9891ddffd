//! Sparse board storage.
//!
//! The board maps occupied positions to tile values. Empty cells are simply
//! absent from the map. Keys order row-major, so iterating the map walks
//! the board top-left to bottom-right with no extra sorting.
//!
//! Storage is an `im::OrdMap`: cloning a board is O(1) and later writes to
//! either copy never show up in the other. History snapshots rely on this.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::config::{checked_cell_count, MAX_CELLS};
use crate::core::{GameError, GameResult, GameRng, Position};

/// Orthogonal neighbour offsets: right, down, left, up.
const NEIGHBOURS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A `rows × cols` grid of tiles.
///
/// ## Invariants
///
/// - Every stored position lies in `[0, rows) × [0, cols)`.
/// - At most one tile per position, so `count() <= rows * cols`.
/// - Stored values are positive.
///
/// ## Usage
///
/// ```
/// use rust_2048::board::Board;
///
/// let mut board = Board::new(2, 3);
/// board.place(2, 0, 1).unwrap();
/// board.place(4, 1, 2).unwrap();
///
/// assert_eq!(board.count(), 2);
/// assert_eq!(board.get(0, 1).map(|t| t.value), Some(2));
/// assert!(board.get(5, 5).is_none());
///
/// // Row-major traversal
/// let values: Vec<u32> = board.tiles().map(|t| t.value).collect();
/// assert_eq!(values, vec![2, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardRepr", try_from = "BoardRepr")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: OrdMap<Position, u32>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one row and one column");
        assert!(
            rows.checked_mul(cols).is_some_and(|cells| cells <= MAX_CELLS),
            "Board must have at most {} cells",
            MAX_CELLS
        );

        Self {
            rows,
            cols,
            cells: OrdMap::new(),
        }
    }

    /// Build a board from a dense grid, where `0` marks an empty cell.
    ///
    /// All rows must have the same, non-zero length.
    ///
    /// ```
    /// use rust_2048::board::Board;
    ///
    /// let board = Board::from_grid(&[[2, 0], [0, 4]]);
    /// assert_eq!(board.count(), 2);
    /// assert_eq!(board.get(1, 1).map(|t| t.value), Some(4));
    /// ```
    #[must_use]
    pub fn from_grid<R: AsRef<[u32]>>(grid: &[R]) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.as_ref().len());
        let mut board = Self::new(rows, cols);

        for (row, line) in grid.iter().enumerate() {
            let line = line.as_ref();
            assert_eq!(line.len(), cols, "All rows must have the same length");
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.cells.insert(Position::new(row, col), value);
                }
            }
        }

        board
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a position lies on this board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.in_bounds(self.rows, self.cols)
    }

    fn check_bounds(&self, position: Position) -> GameResult<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GameError::InvalidPosition {
                row: position.row,
                col: position.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // === Lookup ===

    /// Get the tile at `(row, col)`.
    ///
    /// Out-of-range positions are simply empty; this never fails.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        let position = Position::new(row, col);
        self.value_at(position).map(|value| Tile::new(value, position))
    }

    /// Get the value at a position, if occupied.
    #[must_use]
    pub fn value_at(&self, position: Position) -> Option<u32> {
        self.cells.get(&position).copied()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the board has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.len() == self.rows * self.cols
    }

    /// Iterate over tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().map(|(&position, &value)| Tile::new(value, position))
    }

    /// All unoccupied positions, row-major.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut empty = Vec::with_capacity(self.rows * self.cols - self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position::new(row, col);
                if !self.cells.contains_key(&position) {
                    empty.push(position);
                }
            }
        }
        empty
    }

    /// Largest tile value, or `None` on an empty board.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.cells.values().copied().max()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.cells.values().map(|&v| u64::from(v)).sum()
    }

    /// Check if any two orthogonally adjacent tiles share a value that can
    /// still merge. Pairs whose sum overflows a `u32` do not count.
    #[must_use]
    pub fn has_adjacent_equal(&self) -> bool {
        self.cells.iter().any(|(&position, &value)| {
            value.checked_add(value).is_some()
                && NEIGHBOURS.iter().any(|&(d_row, d_col)| {
                    position
                        .offset(d_row, d_col)
                        .and_then(|neighbour| self.value_at(neighbour))
                        == Some(value)
                })
        })
    }

    /// Dense copy of the board, `0` for empty cells.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        let mut grid = vec![vec![0; self.cols]; self.rows];
        for (position, &value) in &self.cells {
            grid[position.row][position.col] = value;
        }
        grid
    }

    // === Mutation ===

    /// Place a new tile at `(row, col)`.
    ///
    /// The cell should be empty. Placing onto an occupied cell overwrites the
    /// old value, which is returned; callers should not rely on this.
    ///
    /// A value of `0` is rejected with `ZeroTile`; empty cells are never
    /// stored.
    pub fn place(&mut self, value: u32, row: usize, col: usize) -> GameResult<Option<u32>> {
        let position = Position::new(row, col);
        self.check_bounds(position)?;
        if value == 0 {
            return Err(GameError::ZeroTile { row, col });
        }
        Ok(self.cells.insert(position, value))
    }

    /// Remove the tile at `(row, col)`, returning its value.
    ///
    /// No-op if the cell is empty or off the board.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<u32> {
        self.cells.remove(&Position::new(row, col))
    }

    /// Move an existing tile to another cell.
    ///
    /// The target should be empty; an occupant would be overwritten, same
    /// as `place`.
    pub fn move_to(&mut self, from: Position, to: Position) -> GameResult<()> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        if !self.cells.contains_key(&from) {
            return Err(GameError::EmptyCell {
                row: from.row,
                col: from.col,
            });
        }
        self.relocate(from, to);
        Ok(())
    }

    /// Move whatever sits at `from` to `to`. Both must be on the board.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        if from == to {
            return;
        }
        if let Some(value) = self.cells.remove(&from) {
            self.cells.insert(to, value);
        }
    }

    /// Overwrite the value of an occupied cell. Both must be on the board.
    pub(crate) fn set_value(&mut self, position: Position, value: u32) {
        self.cells.insert(position, value);
    }

    /// Spawn a tile on a random empty cell.
    ///
    /// The cell is chosen uniformly. The value is 4 with probability
    /// `four_probability`, otherwise 2. Returns `None` without touching the
    /// RNG when the board is full.
    pub fn spawn_random_tile(&mut self, rng: &mut GameRng, four_probability: f64) -> Option<Tile> {
        let empty = self.empty_positions();
        let &position = rng.choose(&empty)?;
        let value = if rng.gen_bool(four_probability) { 4 } else { 2 };

        self.cells.insert(position, value);
        Some(Tile::new(value, position))
    }
}

impl std::fmt::Display for Board {
    /// One line per row, cells separated by tabs, `[]` for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str("\t")?;
                }
                match self.value_at(Position::new(row, col)) {
                    Some(value) => write!(f, "{}", value)?,
                    None => f.write_str("[]")?,
                }
            }
        }
        Ok(())
    }
}

/// Wire form of a board: dimensions plus a row-major tile list.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            rows: board.rows,
            cols: board.cols,
            tiles: board.tiles().collect(),
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        checked_cell_count(repr.rows, repr.cols)?;
        let mut board = Board::new(repr.rows, repr.cols);
        for tile in repr.tiles {
            board.check_bounds(tile.position)?;
            if tile.value == 0 {
                return Err(GameError::ZeroTile {
                    row: tile.position.row,
                    col: tile.position.col,
                });
            }
            if board.cells.insert(tile.position, tile.value).is_some() {
                return Err(GameError::InvalidConfig("two tiles share a position"));
            }
        }
        Ok(board)
    }
}
