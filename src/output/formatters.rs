//! Formatting utilities for terminal output

use crate::core::{Board, SIDE};
use crate::solver::Trace;

/// Render a board as three rows of space-separated symbols
#[must_use]
pub fn board_grid(board: &Board) -> Vec<String> {
    (0..SIDE)
        .map(|row| {
            board
                .row_symbols(row)
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// `Solved In 1 Move` or `Solved In n Moves`
#[must_use]
pub fn move_count_line(moves: usize) -> String {
    if moves == 1 {
        "Solved In 1 Move".to_string()
    } else {
        format!("Solved In {moves} Moves")
    }
}

/// Move sequence line, or `None` when the start was already solved
#[must_use]
pub fn move_sequence(trace: &Trace) -> Option<String> {
    (!trace.is_empty()).then(|| format!("Sequence of Moves: {trace}"))
}

/// `Command #n -> Title`
#[must_use]
pub fn command_header(number: usize, title: &str) -> String {
    format!("Command #{number} -> {title}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
