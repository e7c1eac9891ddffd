//! Sliding and merging.
//!
//! ## Algorithm
//!
//! Each line is scanned from the wall outward with two pieces of state:
//!
//! - `frontier`: index of the cell the next tile lands on.
//! - `anchor`: position of the last tile placed, if it can still merge.
//!
//! For each occupied cell in scan order:
//!
//! 1. No anchor: slide the tile to the frontier; it becomes the anchor.
//! 2. Anchor has the same value: the anchor doubles, the scanned tile is
//!    removed, the frontier advances and the anchor is cleared. A merged
//!    tile never merges again in the same move.
//! 3. Otherwise: advance the frontier, slide the tile there; it becomes the
//!    new anchor.
//!
//! Two tiles whose sum would not fit in a `u32` are treated as unequal and
//! never merge.
//!
//! Tiles only ever move toward the wall, so cells still ahead of the scan
//! are untouched when reached. The anchor is stored as a position key, never
//! as a reference into the board.

use smallvec::SmallVec;
use tracing::trace;

use super::line::Line;
use crate::board::{Board, Tile};
use crate::core::{Direction, Position};

/// What a move did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True if any tile changed position or any merge happened.
    pub moved: bool,
    /// Tiles produced by merges, with their final value and position.
    pub merged: SmallVec<[Tile; 4]>,
    /// Sum of all merge results.
    pub score_gained: u64,
}

impl MoveOutcome {
    /// Number of merges performed.
    #[must_use]
    pub fn merges(&self) -> usize {
        self.merged.len()
    }
}

/// Slide and merge every line of `board` toward `direction`.
///
/// Mutates the board in place. Never spawns tiles and never records
/// history; the caller does both, and only when `moved` is true.
///
/// ```
/// use rust_2048::board::Board;
/// use rust_2048::core::Direction;
/// use rust_2048::moves::apply_move;
///
/// let mut board = Board::from_grid(&[[2, 2, 2, 2]]);
/// let outcome = apply_move(&mut board, Direction::Left);
///
/// assert!(outcome.moved);
/// assert_eq!(outcome.merges(), 2);
/// assert_eq!(board.to_grid(), vec![vec![4, 4, 0, 0]]);
/// ```
pub fn apply_move(board: &mut Board, direction: Direction) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for line in Line::all(board.rows(), board.cols(), direction) {
        compact_line(board, &line, &mut outcome);
    }

    outcome
}

/// Check whether a move in `direction` would change the board.
///
/// Runs the move on a clone; board clones are O(1).
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let mut scratch = board.clone();
    apply_move(&mut scratch, direction).moved
}

/// Directions that would change the board.
#[must_use]
pub fn available_moves(board: &Board) -> SmallVec<[Direction; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(board, direction))
        .collect()
}

fn compact_line(board: &mut Board, line: &Line, outcome: &mut MoveOutcome) {
    let cells = line.cells();
    let mut frontier = 0usize;
    let mut anchor: Option<Position> = None;

    for &position in cells {
        let Some(value) = board.value_at(position) else {
            continue;
        };

        let merge = anchor
            .filter(|&at| board.value_at(at) == Some(value))
            .and_then(|at| value.checked_add(value).map(|sum| (at, sum)));

        match (merge, anchor) {
            (Some((at, sum)), _) => {
                board.set_value(at, sum);
                board.remove(position.row, position.col);

                trace!(%at, %position, sum, "merged");
                outcome.merged.push(Tile::new(sum, at));
                outcome.score_gained += u64::from(sum);
                outcome.moved = true;

                frontier += 1;
                anchor = None;
            }
            (None, Some(_)) => {
                frontier += 1;
                anchor = Some(slide(board, position, cells[frontier], outcome));
            }
            (None, None) => {
                anchor = Some(slide(board, position, cells[frontier], outcome));
            }
        }
    }
}

fn slide(board: &mut Board, from: Position, to: Position, outcome: &mut MoveOutcome) -> Position {
    if from != to {
        board.relocate(from, to);
        outcome.moved = true;
    }
    to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(grid: &[&[u32]], direction: Direction) -> (Vec<Vec<u32>>, MoveOutcome) {
        let mut board = Board::from_grid(grid);
        let outcome = apply_move(&mut board, direction);
        (board.to_grid(), outcome)
    }

    #[test]
    fn test_pair_merges_left() {
        let (grid, outcome) = moved(&[&[2, 2], &[0, 0]], Direction::Left);

        assert_eq!(grid, vec![vec![4, 0], vec![0, 0]]);
        assert!(outcome.moved);
        assert_eq!(outcome.merges(), 1);
        assert_eq!(outcome.score_gained, 4);
        assert_eq!(outcome.merged[0], Tile::new(4, Position::new(0, 0)));
    }

    #[test]
    fn test_four_equal_merge_pairwise() {
        let (grid, outcome) = moved(&[&[2, 2, 2, 2]], Direction::Left);
        assert_eq!(grid, vec![vec![4, 4, 0, 0]]);
        assert_eq!(outcome.merges(), 2);
        assert_eq!(outcome.score_gained, 8);

        let (grid, _) = moved(&[&[2, 2, 2, 2]], Direction::Right);
        assert_eq!(grid, vec![vec![0, 0, 4, 4]]);
    }

    #[test]
    fn test_three_equal_merge_wall_side_first() {
        let (grid, _) = moved(&[&[2, 2, 2]], Direction::Left);
        assert_eq!(grid, vec![vec![4, 2, 0]]);

        let (grid, _) = moved(&[&[2, 2, 2]], Direction::Right);
        assert_eq!(grid, vec![vec![0, 2, 4]]);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let (grid, outcome) = moved(&[&[4, 2, 2, 0]], Direction::Left);
        assert_eq!(grid, vec![vec![4, 4, 0, 0]]);
        assert_eq!(outcome.merges(), 1);
    }

    #[test]
    fn test_compacts_across_gaps() {
        let (grid, outcome) = moved(&[&[0, 2, 0, 4]], Direction::Left);
        assert_eq!(grid, vec![vec![2, 4, 0, 0]]);
        assert!(outcome.moved);
        assert_eq!(outcome.merges(), 0);

        let (grid, _) = moved(&[&[2, 0, 0, 2]], Direction::Left);
        assert_eq!(grid, vec![vec![4, 0, 0, 0]]);

        let (grid, _) = moved(&[&[2, 0, 4, 0]], Direction::Right);
        assert_eq!(grid, vec![vec![0, 0, 2, 4]]);
    }

    #[test]
    fn test_tile_after_merge_lands_next_to_it() {
        let (grid, _) = moved(&[&[2, 2, 0, 8]], Direction::Left);
        assert_eq!(grid, vec![vec![4, 8, 0, 0]]);

        let (grid, _) = moved(&[&[8, 0, 2, 2]], Direction::Right);
        assert_eq!(grid, vec![vec![0, 0, 8, 4]]);
    }

    #[test]
    fn test_vertical_moves() {
        let grid: &[&[u32]] = &[&[2, 0], &[2, 4], &[0, 4]];

        let (up, outcome) = moved(grid, Direction::Up);
        assert_eq!(up, vec![vec![4, 8], vec![0, 0], vec![0, 0]]);
        assert_eq!(outcome.score_gained, 12);

        let (down, _) = moved(grid, Direction::Down);
        assert_eq!(down, vec![vec![0, 0], vec![0, 0], vec![4, 8]]);
    }

    #[test]
    fn test_packed_line_without_pairs_does_not_move() {
        let (grid, outcome) = moved(&[&[2, 4, 8, 16]], Direction::Left);
        assert_eq!(grid, vec![vec![2, 4, 8, 16]]);
        assert!(!outcome.moved);

        let (_, outcome) = moved(&[&[2, 4, 8, 16]], Direction::Right);
        assert!(!outcome.moved);
    }

    #[test]
    fn test_empty_and_single_tile_lines() {
        let (grid, outcome) = moved(&[&[0, 0, 0]], Direction::Left);
        assert_eq!(grid, vec![vec![0, 0, 0]]);
        assert!(!outcome.moved);

        let (grid, outcome) = moved(&[&[0, 0, 8]], Direction::Left);
        assert_eq!(grid, vec![vec![8, 0, 0]]);
        assert!(outcome.moved);
        assert_eq!(outcome.merges(), 0);

        let (_, outcome) = moved(&[&[8, 0, 0]], Direction::Left);
        assert!(!outcome.moved);
    }

    #[test]
    fn test_lines_are_independent() {
        let (grid, outcome) = moved(&[&[2, 4], &[0, 2]], Direction::Left);
        assert_eq!(grid, vec![vec![2, 4], vec![2, 0]]);
        assert!(outcome.moved);
    }

    #[test]
    fn test_non_power_of_two_values_merge_by_sum() {
        let (grid, outcome) = moved(&[&[3, 3, 5]], Direction::Left);
        assert_eq!(grid, vec![vec![6, 5, 0]]);
        assert_eq!(outcome.score_gained, 6);
    }

    #[test]
    fn test_overflowing_pair_does_not_merge() {
        let big = 1u32 << 31;
        let (grid, outcome) = moved(&[&[big, big]], Direction::Left);
        assert_eq!(grid, vec![vec![big, big]]);
        assert!(!outcome.moved);
        assert_eq!(outcome.merges(), 0);

        // Just below the cap still merges
        let half = big - 1;
        let (grid, outcome) = moved(&[&[0, half, half]], Direction::Right);
        assert_eq!(grid, vec![vec![0, 0, u32::MAX - 1]]);
        assert_eq!(outcome.score_gained, u64::from(u32::MAX - 1));
    }

    #[test]
    fn test_can_move_leaves_board_untouched() {
        let board = Board::from_grid(&[[2, 0], [4, 0]]);
        let before = board.clone();

        assert!(can_move(&board, Direction::Right));
        assert!(!can_move(&board, Direction::Left));
        assert_eq!(board, before);
    }

    #[test]
    fn test_available_moves() {
        let stuck = Board::from_grid(&[[2, 4], [4, 2]]);
        assert!(available_moves(&stuck).is_empty());

        let corner = Board::from_grid(&[[2, 0], [0, 0]]);
        let moves = available_moves(&corner);
        assert_eq!(moves.as_slice(), &[Direction::Down, Direction::Right]);
    }
}
