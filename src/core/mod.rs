//! Core domain types for the 8-puzzle
//!
//! Pure value types: the tile grid, move directions, the heuristic selector
//! and the parity check. Nothing here allocates search state.

mod board;
mod direction;
mod heuristic;
pub mod solvability;

pub use board::{BLANK_SYMBOL, Board, BoardError, CELLS, SIDE, symbol};
pub use direction::{Direction, MoveError};
pub use heuristic::{Heuristic, UnknownHeuristic};
pub use solvability::is_solvable;
