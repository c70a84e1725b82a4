//! Terminal output formatting
//!
//! Display utilities for boards, search results and command outcomes.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_results, print_board, print_script_step,
    print_solve_report,
};
