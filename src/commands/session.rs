//! Command interpreter state
//!
//! A session owns the single mutable current board that every script command
//! reads or replaces, plus the solver configuration.

use super::randomize::{DEFAULT_SEED, scramble};
use super::script::Command;
use super::solve::SolveReport;
use crate::core::{Board, BoardError, Direction, MoveError, is_solvable};
use crate::solver::{Algorithm, DEFAULT_NODE_BUDGET, Solver};
use log::{info, warn};
use thiserror::Error;

/// Settings a session starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Node budget handed to every solve
    pub node_budget: usize,
    /// Seed for `randomizeState`
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
            seed: DEFAULT_SEED,
        }
    }
}

/// Error type for commands that leave the current board unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    MalformedLayout(#[from] BoardError),
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
}

/// What a successfully executed command did
#[derive(Debug)]
pub enum Outcome {
    /// A layout was installed; `solvable` is the parity verdict
    StateSet { board: Board, solvable: bool },
    /// The board was replaced by a seeded scramble of `moves` moves
    Randomized { moves: usize, board: Board },
    /// The current board, for display
    Printed(Board),
    /// The blank moved
    Moved { direction: Direction, board: Board },
    /// A search ran
    Solved(Box<SolveReport>),
    /// The node budget changed
    BudgetSet(usize),
}

/// Interpreter holding the current board
#[derive(Debug, Clone)]
pub struct Session {
    current: Board,
    solver: Solver,
    seed: u64,
}

impl Session {
    /// Start at the solved layout
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self {
            current: Board::solved(),
            solver: Solver::new(config.node_budget),
            seed: config.seed,
        }
    }

    #[must_use]
    pub const fn current(&self) -> &Board {
        &self.current
    }

    #[must_use]
    pub const fn node_budget(&self) -> usize {
        self.solver.node_budget()
    }

    /// Parse and install `layout`, returning whether it is solvable
    ///
    /// An unsolvable layout is still installed; the caller decides whether to
    /// warn.
    ///
    /// # Errors
    /// Returns `BoardError` for a malformed layout; the current board is kept.
    pub fn set_state(&mut self, layout: &str) -> Result<bool, BoardError> {
        let board = Board::parse(layout)?;
        let solvable = is_solvable(&board);
        if !solvable {
            warn!("State {board} has odd inversion parity and cannot be solved");
        }
        self.current = board;
        Ok(solvable)
    }

    /// Replace the board with `moves` seeded random moves from solved
    pub fn randomize(&mut self, moves: usize) -> &Board {
        self.current = scramble(moves, self.seed);
        info!("Randomized {moves} moves with seed {}: {}", self.seed, self.current);
        &self.current
    }

    /// Move the blank once
    ///
    /// # Errors
    /// Returns `MoveError::Blocked` if the blank is on that edge; the board is
    /// left unchanged.
    pub fn move_blank(&mut self, direction: Direction) -> Result<&Board, MoveError> {
        self.current = self.current.apply_move(direction)?;
        Ok(&self.current)
    }

    /// Search from the current board
    ///
    /// On success the current board becomes the solved layout; an unsolved
    /// search leaves it as it was.
    pub fn solve(&mut self, algorithm: Algorithm) -> SolveReport {
        let start = self.current;
        let result = self.solver.solve(algorithm, start);
        if result.is_solved() {
            self.current = *result.board();
        }
        SolveReport::new(start, result)
    }

    pub const fn set_node_budget(&mut self, node_budget: usize) {
        self.solver.set_node_budget(node_budget);
    }

    /// Run one parsed command
    ///
    /// # Errors
    /// Returns `SessionError` for malformed layouts and blocked moves.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let outcome = match command {
            Command::SetState(layout) => {
                let solvable = self.set_state(&layout)?;
                Outcome::StateSet {
                    board: self.current,
                    solvable,
                }
            }
            Command::Randomize(moves) => Outcome::Randomized {
                moves,
                board: *self.randomize(moves),
            },
            Command::Print => Outcome::Printed(self.current),
            Command::Move(direction) => Outcome::Moved {
                direction,
                board: *self.move_blank(direction)?,
            },
            Command::Solve(algorithm) => Outcome::Solved(Box::new(self.solve(algorithm))),
            Command::MaxNodes(budget) => {
                self.set_node_budget(budget);
                Outcome::BudgetSet(budget)
            }
        };
        Ok(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
