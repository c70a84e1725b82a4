//! Display functions for command results

use super::formatters::{
    board_grid, command_header, create_progress_bar, move_count_line, move_sequence,
};
use crate::commands::{AnalysisResult, BenchmarkResult, Outcome, ScriptStep, SolveReport};
use crate::core::Board;
use crate::solver::SearchStatus;
use colored::Colorize;

/// Print a board as a 3x3 grid
pub fn print_board(board: &Board) {
    for row in board_grid(board) {
        println!("   {}", row.bright_white().bold());
    }
    println!();
}

/// Print the outcome of a search
pub fn print_solve_report(report: &SolveReport) {
    let result = &report.result;
    println!(
        "{} {}",
        "Algorithm:".bright_cyan(),
        result.algorithm().to_string().bright_yellow()
    );

    match result.status() {
        SearchStatus::Solved => {
            println!("{}", "Solved the puzzle!".green().bold());
            println!("The solved board state:");
            print_board(result.board());
            match move_sequence(&report.trace) {
                Some(sequence) => {
                    println!("{}", move_count_line(report.trace.len()).green());
                    println!("{sequence}");
                }
                None => println!("{}", "The board was already solved!".green()),
            }
        }
        status => {
            if !report.solvable {
                println!(
                    "{}",
                    "This board is unsolvable because the inversion number is odd"
                        .red()
                        .bold()
                );
            }
            let message = match status {
                SearchStatus::BudgetExceeded => format!(
                    "Number of nodes has been exceeded ({} visited)",
                    result.nodes_visited()
                ),
                SearchStatus::Stalled => "Beam search stalled with no candidates left".to_string(),
                _ => "Search space exhausted without reaching the goal".to_string(),
            };
            println!("{}", message.yellow().bold());
            println!("Last board examined:");
            print_board(result.board());
        }
    }

    println!(
        "   Nodes visited: {}   Time: {:.2}ms",
        result.nodes_visited(),
        result.elapsed().as_secs_f64() * 1000.0
    );
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::StateSet { board, solvable } => {
            if !solvable {
                println!("{}", "WARNING... THIS STATE IS NOT SOLVABLE!".red().bold());
            }
            println!("Generating state...");
            print_board(board);
        }
        Outcome::Randomized { moves, board } => {
            println!("Randomizing with {moves} moves...");
            print_board(board);
        }
        Outcome::Printed(board) => print_board(board),
        Outcome::Moved { direction, board } => {
            println!("Moving blank tile: {}", direction.name().to_uppercase());
            print_board(board);
        }
        Outcome::Solved(report) => print_solve_report(report),
        Outcome::BudgetSet(budget) => println!("Max nodes set to: {budget}"),
    }
}

/// Print one script step with its numbered header
pub fn print_script_step(step: &ScriptStep) {
    if let (Some(number), Some(command)) = (step.number, &step.command) {
        println!("{}", command_header(number, command.title()).bright_cyan().bold());
    }

    match &step.result {
        Ok(outcome) => print_outcome(outcome),
        Err(error) => eprintln!("{} line {}: {error}", "error:".red().bold(), step.line),
    }
    println!();
}

/// Print the result of layout analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} ",
        "LAYOUT ANALYSIS:".bright_cyan().bold(),
        result.board.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(40).cyan());
    println!();
    print_board(&result.board);

    println!("   Misplaced tiles (h1): {}", result.misplaced);
    println!("   Manhattan (h2):       {}", result.manhattan);
    println!("   Inversions:           {}", result.inversions);
    println!("   Canonical:            {}", result.canonical);
    let moves: Vec<&str> = result.valid_moves.iter().map(|d| d.name()).collect();
    println!("   Valid moves:          {}", moves.join(", "));

    if result.solvable {
        println!("   {}", "Solvable (even inversions)".green());
    } else {
        println!("   {}", "Unsolvable (odd inversions)".red());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_results(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!("\n📊 {}", result.algorithm.to_string().bright_cyan().bold());
        println!(
            "   Solved:         [{}] {}/{}",
            create_progress_bar(result.solve_rate(), 1.0, 20).green(),
            result.solved,
            result.runs
        );
        println!(
            "   Average moves:  {}",
            format!("{:.2}", result.average_moves()).bright_yellow().bold()
        );
        println!("   Average nodes:  {:.1}", result.average_nodes());
        println!("   Time taken:     {:.2}s", result.duration.as_secs_f64());
    }
}
