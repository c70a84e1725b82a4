//! Blank-tile move directions
//!
//! A direction names where the blank travels, so `Up` swaps the blank with the
//! tile directly above it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four directions the blank can slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Error type for moves that cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The blank sits on the edge of the grid in this direction
    #[error("Invalid move: the blank cannot move {direction} from here")]
    Blocked { direction: Direction },
    /// The text is not one of up/down/left/right
    #[error("Invalid move: '{0}' is not a direction (expected up, down, left or right)")]
    UnknownDirection(String),
}

impl Direction {
    /// All directions in expansion order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Signed change of the blank's linear index when moving this way
    #[inline]
    #[must_use]
    pub const fn index_offset(self) -> isize {
        match self {
            Self::Up => -3,
            Self::Down => 3,
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// The direction that undoes this one
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name as used in command scripts
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(MoveError::UnknownDirection(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" down ".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(MoveError::UnknownDirection("sideways".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.index_offset(), -dir.opposite().index_offset());
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }
}
