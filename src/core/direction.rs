//! Move directions and player commands.
//!
//! A `Direction` says which wall tiles slide toward. A `Command` is anything
//! a front end can ask the game to do: a move, undo, redo, or quit. Front
//! ends (console, GUI, test harness) translate their input into `Command`s
//! and hand them to `GameState::dispatch`.

use serde::{Deserialize, Serialize};

/// The four sliding directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True for left/right, where each line is a row.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True if tiles travel toward index 0 of their line (left or up).
    #[must_use]
    pub const fn toward_start(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A request from the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Undo,
    Redo,
    Quit,
}

impl Command {
    /// Map a keyboard key to a command.
    ///
    /// `w`/`a`/`s`/`d` move up/left/down/right, `u` undoes, `r` redoes and
    /// `q` quits. Case-insensitive. Any other key yields `None`.
    ///
    /// ```
    /// use rust_2048::core::{Command, Direction};
    ///
    /// assert_eq!(Command::from_key('a'), Some(Command::Move(Direction::Left)));
    /// assert_eq!(Command::from_key('U'), Some(Command::Undo));
    /// assert_eq!(Command::from_key('x'), None);
    /// ```
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            'u' => Some(Command::Undo),
            'r' => Some(Command::Redo),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}
