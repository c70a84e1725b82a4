//! 8-Puzzle Solver
//!
//! Solves the 3x3 sliding tile puzzle with A* (misplaced tiles or Manhattan
//! distance) and local beam search, driven by a small command language.
//!
//! # Quick Start
//!
//! ```rust
//! use eight_puzzle::core::{Board, Heuristic};
//! use eight_puzzle::solver::{Algorithm, Solver};
//!
//! let board = Board::parse("312 475 b68").unwrap();
//! let result = Solver::default().solve(Algorithm::AStar(Heuristic::Manhattan), board);
//!
//! assert!(result.is_solved());
//! println!("{} ({} moves)", result.trace(), result.trace().len());
//! ```

// Board, moves, heuristics and solvability
pub mod core;

// Search algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
