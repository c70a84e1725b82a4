//! Main 8-puzzle solver interface

use super::astar::solve_astar;
use super::beam::solve_beam;
use super::outcome::SearchResult;
use super::strategy::Algorithm;
use crate::core::Board;
use log::info;
use std::time::Instant;

/// Node budget used when none is configured
///
/// Large enough to be effectively unbounded for solvable 8-puzzles under the
/// Manhattan heuristic.
pub const DEFAULT_NODE_BUDGET: usize = 69_420;

/// Main 8-puzzle solver
///
/// Holds the node budget and dispatches to the selected algorithm. Every call
/// to `solve` builds its own frontier and tree; nothing carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    node_budget: usize,
}

impl Solver {
    /// Create a solver with the given node budget
    #[must_use]
    pub const fn new(node_budget: usize) -> Self {
        Self { node_budget }
    }

    #[must_use]
    pub const fn node_budget(&self) -> usize {
        self.node_budget
    }

    pub const fn set_node_budget(&mut self, node_budget: usize) {
        self.node_budget = node_budget;
    }

    /// Search from `root` with `algorithm`
    ///
    /// The returned result is never an error: check `status()` or
    /// `is_solved()` to tell a goal from an exhausted search.
    #[must_use]
    pub fn solve(&self, algorithm: Algorithm, root: Board) -> SearchResult {
        info!("Solving {root} with {algorithm}");
        let start = Instant::now();

        let result = match algorithm {
            Algorithm::AStar(heuristic) => solve_astar(heuristic, root, self.node_budget),
            Algorithm::Beam { width } => solve_beam(width, root, self.node_budget),
        };
        let result = result.with_elapsed(start.elapsed());

        info!(
            "{}: {} after {} nodes in {:.3}s",
            algorithm.label(),
            result.status(),
            result.nodes_visited(),
            result.elapsed().as_secs_f64()
        );
        result
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Heuristic;
    use crate::solver::SearchStatus;

    #[test]
    fn default_budget() {
        assert_eq!(Solver::default().node_budget(), 69_420);
    }

    #[test]
    fn set_node_budget_applies_to_later_solves() {
        let mut solver = Solver::default();
        solver.set_node_budget(10);
        let unsolvable = Board::parse("b21 345 678").unwrap();
        let result = solver.solve(Algorithm::AStar(Heuristic::Manhattan), unsolvable);
        assert_eq!(result.status(), SearchStatus::BudgetExceeded);
        assert_eq!(result.algorithm(), Algorithm::AStar(Heuristic::Manhattan));
    }

    #[test]
    fn dispatches_to_both_algorithms() {
        let solver = Solver::default();
        let start = Board::parse("1b2 345 678").unwrap();

        for algorithm in [
            Algorithm::AStar(Heuristic::MisplacedTiles),
            Algorithm::AStar(Heuristic::Manhattan),
            Algorithm::Beam { width: 2 },
        ] {
            let result = solver.solve(algorithm, start);
            assert!(result.is_solved(), "{algorithm}");
            assert_eq!(result.trace().len(), 1);
            assert_eq!(result.algorithm(), algorithm);
        }
    }

    #[test]
    fn solved_root_has_empty_trace_for_every_algorithm() {
        let solver = Solver::default();
        for algorithm in [
            Algorithm::AStar(Heuristic::MisplacedTiles),
            Algorithm::AStar(Heuristic::Manhattan),
            Algorithm::Beam { width: 1 },
        ] {
            let result = solver.solve(algorithm, Board::parse("b12 345 678").unwrap());
            assert!(result.is_solved());
            assert!(result.trace().is_empty());
        }
    }
}
