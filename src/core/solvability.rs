//! Inversion-parity solvability check
//!
//! On a grid of odd width a horizontal blank move leaves the tile order
//! unchanged and a vertical one jumps a tile over two others, so the parity of
//! the inversion count is invariant. The solved layout has zero inversions,
//! hence exactly the even-parity arrangements are reachable.
//!
//! Flattening the blank as `0` never adds a pair: it is skipped on both sides.

use super::Board;

/// Number of pairs `i < j` of numbered tiles with `tile[i] > tile[j]`
///
/// The blank is flattened as `0` and left out of the pairs.
#[must_use]
pub fn count_inversions(board: &Board) -> usize {
    let flattened = board.tiles();
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Whether the solved layout can be reached from `board`
///
/// Advisory only: callers warn on `false` but may still search.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    count_inversions(board) % 2 == 0
}
