//! Seeded scrambles
//!
//! Scrambles walk the blank from the solved layout, so every result is
//! solvable.

use crate::core::{Board, Direction};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u64 = 69;

/// Apply exactly `moves` random valid moves to the solved layout
///
/// Each step picks uniformly among the moves legal from the current blank
/// position, so no pick is wasted. The same `seed` always yields the same
/// board.
///
/// # Examples
/// ```
/// use eight_puzzle::commands::randomize::scramble;
/// use eight_puzzle::core::is_solvable;
///
/// let board = scramble(30, 7);
/// assert_eq!(board, scramble(30, 7));
/// assert!(is_solvable(&board));
/// ```
#[must_use]
pub fn scramble(moves: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::solved();

    for _ in 0..moves {
        let options: Vec<Direction> = board.valid_moves().collect();
        let Some(&direction) = options.choose(&mut rng) else {
            break;
        };
        if let Ok(next) = board.apply_move(direction) {
            board = next;
        }
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_solvable;

    #[test]
    fn zero_moves_is_solved() {
        assert!(scramble(0, DEFAULT_SEED).is_solved());
    }

    #[test]
    fn one_move_leaves_solved_layout() {
        let board = scramble(1, DEFAULT_SEED);
        assert!(!board.is_solved());
        assert_eq!(board.manhattan_distance(), 1);
    }

    #[test]
    fn same_seed_same_board() {
        for moves in [3, 10, 50] {
            assert_eq!(scramble(moves, 1234), scramble(moves, 1234));
        }
    }

    #[test]
    fn scrambles_are_always_solvable() {
        for seed in 0..20 {
            assert!(is_solvable(&scramble(40, seed)));
        }
    }
}
