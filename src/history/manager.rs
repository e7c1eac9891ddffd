//! Bounded undo stack and unbounded redo stack.
//!
//! ## State machine
//!
//! - `save` always ends with undo non-empty and redo empty.
//! - `undo` moves one snapshot from undo to live, and live to redo.
//! - `redo` moves one snapshot from redo to live, and live to undo.
//!
//! Only the undo stack is bounded. When it is full, pushing drops its oldest
//! entry, whether the push comes from `save` or `redo`.

use im::Vector;

use super::snapshot::Snapshot;
use crate::core::config::DEFAULT_UNDO_DEPTH;

/// Undo/redo history of board snapshots.
///
/// ## Usage
///
/// ```
/// use rust_2048::board::Board;
/// use rust_2048::history::{History, Snapshot};
///
/// let mut history = History::new(5);
/// let before = Snapshot::new(Board::from_grid(&[[2, 2]]), 0);
/// let after = Snapshot::new(Board::from_grid(&[[4, 0]]), 4);
///
/// history.save(before.clone());
///
/// // Undo hands back the saved snapshot and keeps `after` for redo
/// assert_eq!(history.undo(after.clone()), Some(before.clone()));
/// assert_eq!(history.redo(before), Some(after));
/// ```
#[derive(Clone, Debug)]
pub struct History {
    /// Oldest at the front, most recent at the back.
    undo: Vector<Snapshot>,
    /// Most recent at the back.
    redo: Vector<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}

impl History {
    /// Create an empty history keeping at most `capacity` undo snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: Vector::new(),
            redo: Vector::new(),
            capacity,
        }
    }

    /// Maximum undo depth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record the state from before a successful move.
    ///
    /// Clears the redo stack.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        self.redo.clear();
    }

    /// Step back one state.
    ///
    /// `current` is the live state being replaced; it goes onto the redo
    /// stack. Returns `None`, leaving both stacks untouched, if there is
    /// nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push_back(current);
        Some(previous)
    }

    /// Step forward one state.
    ///
    /// `current` goes back onto the undo stack. Returns `None`, leaving both
    /// stacks untouched, if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop_back()?;
        self.push_undo(current);
        Some(next)
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Snapshots on the undo stack.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Snapshots on the redo stack.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
