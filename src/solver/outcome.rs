//! What a search hands back to its caller

use super::node::{NodeId, PuzzleState, SearchTree};
use super::strategy::Algorithm;
use super::trace::Trace;
use crate::core::Board;
use std::fmt;
use std::time::Duration;

/// How a search terminated
///
/// Only `Solved` means the terminal node is the goal. The other variants are
/// normal results, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Terminal node matches the solved layout
    Solved,
    /// More nodes than the budget allows were visited or generated
    BudgetExceeded,
    /// A* ran out of frontier before reaching the goal
    Exhausted,
    /// Beam search was left with an empty candidate pool
    Stalled,
}

impl SearchStatus {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Solved => "solved",
            Self::BudgetExceeded => "node budget exceeded",
            Self::Exhausted => "search space exhausted",
            Self::Stalled => "beam stalled",
        };
        f.write_str(s)
    }
}

/// Terminal node of a search together with the tree that produced it
///
/// Keeping the tree alongside the terminal id lets the trace be rebuilt after
/// the solver has returned.
#[derive(Debug, Clone)]
pub struct SearchResult {
    algorithm: Algorithm,
    tree: SearchTree,
    terminal: NodeId,
    status: SearchStatus,
    nodes_visited: usize,
    elapsed: Duration,
}

impl SearchResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        tree: SearchTree,
        terminal: NodeId,
        status: SearchStatus,
        nodes_visited: usize,
    ) -> Self {
        Self {
            algorithm,
            tree,
            terminal,
            status,
            nodes_visited,
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.status.is_solved()
    }

    /// Nodes popped (A*) or generated (beam)
    #[must_use]
    pub const fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn tree(&self) -> &SearchTree {
        &self.tree
    }

    #[must_use]
    pub const fn terminal_id(&self) -> NodeId {
        self.terminal
    }

    /// The node the search stopped on
    #[must_use]
    pub fn terminal(&self) -> &PuzzleState {
        &self.tree[self.terminal]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.terminal().board()
    }

    /// Moves from the root to the terminal node
    #[must_use]
    pub fn trace(&self) -> Trace {
        Trace::build(&self.tree, self.terminal)
    }
}
