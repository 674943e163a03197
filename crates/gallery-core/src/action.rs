//! Agent actions: the four cardinal moves and the shot.
//!
//! Actions have a one-letter text form (`U`, `D`, `L`, `R`, `S`) so that
//! solutions can be written and read as plain strings such as `"UURS"`.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// A cardinal direction of movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in `U`, `D`, `L`, `R` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }
}

/// One atomic agent operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Step one cell in a direction.
    Move(Direction),
    /// Fire along every line of sight from the current cell.
    Shoot,
}

impl Action {
    /// Whether this is the shoot action.
    #[inline]
    pub fn is_shoot(self) -> bool {
        matches!(self, Action::Shoot)
    }

    /// One-letter text form of this action.
    pub const fn letter(self) -> char {
        match self {
            Action::Move(Direction::Up) => 'U',
            Action::Move(Direction::Down) => 'D',
            Action::Move(Direction::Left) => 'L',
            Action::Move(Direction::Right) => 'R',
            Action::Shoot => 'S',
        }
    }
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        Action::Move(d)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Action {
    type Error = ActionError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'U' => Ok(Action::Move(Direction::Up)),
            'D' => Ok(Action::Move(Direction::Down)),
            'L' => Ok(Action::Move(Direction::Left)),
            'R' => Ok(Action::Move(Direction::Right)),
            'S' => Ok(Action::Shoot),
            _ => Err(ActionError::InvalidLetter { ch, pos: 0 }),
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Action::try_from(ch),
            _ => Err(ActionError::NotSingleLetter(s.to_string())),
        }
    }
}

/// Parse a whole action string such as `"UURS"`. Whitespace is ignored.
pub fn parse_actions(s: &str) -> Result<Vec<Action>, ActionError> {
    s.chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(pos, ch)| {
            Action::try_from(ch).map_err(|_| ActionError::InvalidLetter { ch, pos })
        })
        .collect()
}

/// Format a sequence of actions as its letter string.
pub fn format_actions(actions: &[Action]) -> String {
    actions.iter().map(|a| a.letter()).collect()
}

/// Errors that can occur when reading actions from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A character that is not one of `U`, `D`, `L`, `R`, `S`.
    InvalidLetter { ch: char, pos: usize },
    /// A single action was expected but the input had zero or several letters.
    NotSingleLetter(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter { ch, pos } => {
                write!(f, "invalid action \u{201c}{ch}\u{201d} at position {pos}")
            }
            Self::NotSingleLetter(s) => write!(f, "expected a single action letter, got {s:?}"),
        }
    }
}

impl std::error::Error for ActionError {}
