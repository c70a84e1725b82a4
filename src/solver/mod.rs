//! 8-puzzle search algorithms
//!
//! A* with a choice of heuristic and local beam search, sharing a node arena
//! and a common result type.

pub mod astar;
pub mod beam;
mod engine;
mod node;
mod outcome;
pub mod strategy;
mod trace;

pub use astar::solve_astar;
pub use beam::solve_beam;
pub use engine::{DEFAULT_NODE_BUDGET, Solver};
pub use node::{NodeId, PuzzleState, SearchTree};
pub use outcome::{SearchResult, SearchStatus};
pub use strategy::{Algorithm, AlgorithmError};
pub use trace::Trace;
