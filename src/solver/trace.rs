//! Move sequence reconstruction from parent links

use super::node::{NodeId, SearchTree};
use crate::core::{Board, Direction, MoveError};
use std::fmt;

/// Root-to-terminal sequence of blank moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    moves: Vec<Direction>,
}

impl Trace {
    /// Collect move labels from `terminal` up to its root, then reverse
    ///
    /// The walk stops at the first node that has no parent link and no move
    /// label.
    #[must_use]
    pub fn build(tree: &SearchTree, terminal: NodeId) -> Self {
        let mut moves: Vec<Direction> = tree
            .ancestry(terminal)
            .map_while(|node| node.parent().and(node.move_taken()))
            .collect();
        moves.reverse();
        Self { moves }
    }

    #[must_use]
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Number of moves
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when the root already was the terminal node
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Apply every move to `start`
    ///
    /// # Errors
    /// Returns the first `MoveError` if `start` is not the board the trace was
    /// recorded from.
    pub fn replay(&self, start: &Board) -> Result<Board, MoveError> {
        self.moves
            .iter()
            .try_fold(*start, |board, &direction| board.apply_move(direction))
    }
}

impl From<Vec<Direction>> for Trace {
    fn from(moves: Vec<Direction>) -> Self {
        Self { moves }
    }
}

impl fmt::Display for Trace {
    /// Uppercase, comma separated: `UP, LEFT, LEFT`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, direction) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&direction.name().to_uppercase())?;
        }
        Ok(())
    }
}
