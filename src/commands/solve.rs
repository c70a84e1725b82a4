//! Layout solving command
//!
//! Solves a single layout and packages the result for display.

use crate::core::{Board, BoardError, is_solvable};
use crate::solver::{Algorithm, DEFAULT_NODE_BUDGET, SearchResult, Solver, Trace};

/// Configuration for solving a layout
pub struct SolveConfig {
    pub layout: String,
    pub algorithm: Algorithm,
    pub node_budget: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(layout: String, algorithm: Algorithm) -> Self {
        Self {
            layout,
            algorithm,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }
}

/// Result of solving a layout
#[derive(Debug)]
pub struct SolveReport {
    /// Board the search started from
    pub start: Board,
    /// Parity verdict for `start`
    pub solvable: bool,
    /// Root-to-terminal moves
    pub trace: Trace,
    pub result: SearchResult,
}

impl SolveReport {
    #[must_use]
    pub fn new(start: Board, result: SearchResult) -> Self {
        Self {
            start,
            solvable: is_solvable(&start),
            trace: result.trace(),
            result,
        }
    }
}

/// Parse `config.layout` and search it
///
/// # Errors
///
/// Returns `BoardError` if the layout is malformed. An unsolved search is not
/// an error; inspect `report.result.status()`.
pub fn solve_layout(config: SolveConfig) -> Result<SolveReport, BoardError> {
    let start = Board::parse(&config.layout)?;
    let solver = Solver::new(config.node_budget);
    let result = solver.solve(config.algorithm, start);
    Ok(SolveReport::new(start, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Heuristic};
    use crate::solver::SearchStatus;

    #[test]
    fn already_solved_layout() {
        for algorithm in [
            Algorithm::AStar(Heuristic::MisplacedTiles),
            Algorithm::Beam { width: 3 },
        ] {
            let config = SolveConfig::new("b12 345 678".to_string(), algorithm);
            let report = solve_layout(config).unwrap();
            assert!(report.solvable);
            assert!(report.result.is_solved());
            assert!(report.trace.is_empty());
        }
    }

    #[test]
    fn one_move_layout_with_h1() {
        let config = SolveConfig::new(
            "1b2 345 678".to_string(),
            Algorithm::AStar(Heuristic::MisplacedTiles),
        );
        let report = solve_layout(config).unwrap();
        assert_eq!(report.trace.moves(), &[Direction::Left]);
        assert_eq!(report.trace.replay(&report.start), Ok(Board::solved()));
    }

    #[test]
    fn malformed_layout_is_an_error() {
        let config = SolveConfig::new(
            "1b2 345".to_string(),
            Algorithm::AStar(Heuristic::Manhattan),
        );
        assert_eq!(solve_layout(config).err(), Some(BoardError::InvalidLength(6)));
    }

    #[test]
    fn respects_node_budget() {
        let mut config = SolveConfig::new(
            "b21 345 678".to_string(),
            Algorithm::AStar(Heuristic::MisplacedTiles),
        );
        config.node_budget = 25;
        let report = solve_layout(config).unwrap();
        assert!(!report.solvable);
        assert_eq!(report.result.status(), SearchStatus::BudgetExceeded);
    }
}
