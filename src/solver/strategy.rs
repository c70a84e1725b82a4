//! Search algorithm selection
//!
//! Mirrors the `solve <algorithm> <param>` command: the parameter is a
//! heuristic tag for A* and a beam width for local beam search.

use crate::core::{Heuristic, UnknownHeuristic};
use std::fmt;
use thiserror::Error;

/// A fully parameterised search algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// A* guided by the given heuristic
    AStar(Heuristic),
    /// Local beam search keeping `width` candidates per generation
    Beam { width: usize },
}

/// Error type for unrecognised algorithm selections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("Unknown algorithm '{0}' (expected A-star or beam)")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Heuristic(#[from] UnknownHeuristic),
    #[error("Beam width must be a positive integer, got '{0}'")]
    InvalidWidth(String),
}

impl Algorithm {
    /// Build an algorithm from its name and parameter
    ///
    /// Names are case-insensitive: `A-star`, `astar`, `a*` select A*, `beam`
    /// selects beam search.
    ///
    /// # Errors
    /// Returns `AlgorithmError` for an unknown name, an unknown heuristic tag,
    /// or a beam width that is not a positive integer.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::core::Heuristic;
    /// use eight_puzzle::solver::Algorithm;
    ///
    /// let a = Algorithm::from_parts("A-star", "h2").unwrap();
    /// assert_eq!(a, Algorithm::AStar(Heuristic::Manhattan));
    ///
    /// let b = Algorithm::from_parts("beam", "3").unwrap();
    /// assert_eq!(b, Algorithm::Beam { width: 3 });
    /// ```
    pub fn from_parts(name: &str, param: &str) -> Result<Self, AlgorithmError> {
        match name.trim().to_lowercase().as_str() {
            "a-star" | "astar" | "a*" => Ok(Self::AStar(param.parse()?)),
            "beam" => match param.trim().parse::<usize>() {
                Ok(width) if width > 0 => Ok(Self::Beam { width }),
                _ => Err(AlgorithmError::InvalidWidth(param.trim().to_string())),
            },
            other => Err(AlgorithmError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// Short machine-friendly label, e.g. `astar-h1` or `beam-3`
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::AStar(heuristic) => format!("astar-{heuristic}"),
            Self::Beam { width } => format!("beam-{width}"),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AStar(heuristic) => {
                write!(f, "A* using {} ({heuristic})", heuristic.description())
            }
            Self::Beam { width } => write!(f, "local beam search (k = {width})"),
        }
    }
}
