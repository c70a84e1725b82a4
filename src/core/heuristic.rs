//! Heuristic selector for A* search

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which distance estimate guides the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `h1`: number of non-blank tiles out of place
    MisplacedTiles,
    /// `h2`: sum of Manhattan distances of the non-blank tiles
    Manhattan,
}

/// Error for a heuristic tag other than `h1` or `h2`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown heuristic '{0}' (expected h1 or h2)")]
pub struct UnknownHeuristic(pub String);

impl Heuristic {
    /// Short tag used in command scripts
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "h1",
            Self::Manhattan => "h2",
        }
    }

    /// Human readable name for reports
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "misplaced tiles",
            Self::Manhattan => "Manhattan distance",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h1" => Ok(Self::MisplacedTiles),
            "h2" => Ok(Self::Manhattan),
            other => Err(UnknownHeuristic(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_tags() {
        assert_eq!("h1".parse::<Heuristic>(), Ok(Heuristic::MisplacedTiles));
        assert_eq!("H2".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
    }

    #[test]
    fn rejects_other_tags() {
        assert_eq!(
            "h3".parse::<Heuristic>(),
            Err(UnknownHeuristic("h3".to_string()))
        );
    }
}
