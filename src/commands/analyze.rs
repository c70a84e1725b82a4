//! Layout analysis command
//!
//! Reports heuristic values and solvability for a layout without searching.

use crate::core::solvability::count_inversions;
use crate::core::{Board, BoardError, Direction, is_solvable};

/// Result of analyzing a layout
pub struct AnalysisResult {
    pub board: Board,
    /// h1
    pub misplaced: u32,
    /// h2
    pub manhattan: u32,
    pub inversions: usize,
    pub solvable: bool,
    pub canonical: String,
    pub valid_moves: Vec<Direction>,
}

/// Analyze a layout
///
/// # Errors
///
/// Returns `BoardError` if the layout is malformed.
pub fn analyze_layout(layout: &str) -> Result<AnalysisResult, BoardError> {
    let board = Board::parse(layout)?;
    let inversions = count_inversions(&board);

    Ok(AnalysisResult {
        board,
        misplaced: board.misplaced_tiles(),
        manhattan: board.manhattan_distance(),
        inversions,
        solvable: is_solvable(&board),
        canonical: board.canonical_string(),
        valid_moves: board.valid_moves().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_solved_layout() {
        let result = analyze_layout("b12 345 678").unwrap();

        assert_eq!(result.misplaced, 0);
        assert_eq!(result.manhattan, 0);
        assert_eq!(result.inversions, 0);
        assert!(result.solvable);
        assert_eq!(result.canonical, "b12345678");
        assert_eq!(result.valid_moves, vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn analyze_scrambled_layout() {
        let result = analyze_layout("312 645 b78").unwrap();

        assert_eq!(result.misplaced, 2);
        assert_eq!(result.manhattan, 2);
        assert!(result.solvable);
        assert_eq!(result.valid_moves, vec![Direction::Up, Direction::Right]);
    }

    #[test]
    fn analyze_unsolvable_layout() {
        let result = analyze_layout("b21 345 678").unwrap();

        assert_eq!(result.inversions, 1);
        assert!(!result.solvable);
    }

    #[test]
    fn analyze_invalid_layout() {
        assert!(analyze_layout("b12 345 67x").is_err());
    }

    #[test]
    fn manhattan_dominates_misplaced() {
        for layout in ["736 4b2 185", "876 543 21b", "1b2 345 678"] {
            let result = analyze_layout(layout).unwrap();
            assert!(result.manhattan >= result.misplaced);
        }
    }
}
