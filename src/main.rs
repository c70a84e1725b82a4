//! 8-Puzzle Solver - CLI
//!
//! Runs command scripts against a single puzzle state, or solves, analyzes and
//! benchmarks layouts directly.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use eight_puzzle::{
    commands::{
        BenchmarkConfig, DEFAULT_SEED, ScriptRunner, Session, SessionConfig, SolveConfig,
        analyze_layout, run_benchmark, solve_layout,
    },
    output::{
        print_analysis_result, print_benchmark_results, print_script_step, print_solve_report,
    },
    solver::{Algorithm, DEFAULT_NODE_BUDGET},
};
use log::{LevelFilter, info};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "eight_puzzle",
    about = "8-puzzle solver using A* (h1/h2) and local beam search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum nodes a single search may visit
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_NODE_BUDGET)]
    max_nodes: usize,

    /// Seed for randomizeState and benchmark scrambles
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command script (default; reads stdin when no file is given)
    Run {
        /// Script file, one command per line
        file: Option<PathBuf>,
    },

    /// Solve a single layout such as "312 475 b68"
    Solve {
        /// Layout, rows may be separated by spaces
        layout: String,

        /// Algorithm: astar or beam
        #[arg(short, long, default_value = "astar")]
        algorithm: String,

        /// Heuristic for A*: h1 (misplaced tiles) or h2 (Manhattan)
        #[arg(long, default_value = "h2")]
        heuristic: String,

        /// Beam width for beam search
        #[arg(short = 'k', long, default_value_t = 10)]
        width: usize,
    },

    /// Show heuristic values and solvability of a layout
    Analyze {
        /// Layout to analyze
        layout: String,
    },

    /// Compare A* h1, A* h2 and beam search on seeded scrambles
    Benchmark {
        /// Number of scrambled boards
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,

        /// Random moves per scramble
        #[arg(long, default_value_t = 20)]
        scramble: usize,

        /// Beam width
        #[arg(short = 'k', long, default_value_t = 10)]
        width: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let command = cli.command.unwrap_or(Commands::Run { file: None });

    match command {
        Commands::Run { file } => run_script_command(file.as_deref(), cli.max_nodes, cli.seed),
        Commands::Solve {
            layout,
            algorithm,
            heuristic,
            width,
        } => run_solve_command(layout, &algorithm, &heuristic, width, cli.max_nodes),
        Commands::Analyze { layout } => {
            let result = analyze_layout(&layout)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            scramble,
            width,
        } => {
            run_benchmark_command(BenchmarkConfig {
                count,
                scramble_depth: scramble,
                seed: cli.seed,
                node_budget: cli.max_nodes,
                beam_width: width,
            });
            Ok(())
        }
    }
}

fn read_script(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn run_script_command(file: Option<&Path>, node_budget: usize, seed: u64) -> Result<()> {
    let source = read_script(file)?;
    let mut session = Session::new(SessionConfig { node_budget, seed });

    let mut failures = 0;
    for step in ScriptRunner::new(&mut session, &source) {
        if step.result.is_err() {
            failures += 1;
        }
        print_script_step(&step);
    }

    info!("Script finished with {failures} failed line(s)");
    Ok(())
}

fn run_solve_command(
    layout: String,
    algorithm: &str,
    heuristic: &str,
    width: usize,
    node_budget: usize,
) -> Result<()> {
    let param = if algorithm.eq_ignore_ascii_case("beam") {
        width.to_string()
    } else {
        heuristic.to_string()
    };
    let algorithm = Algorithm::from_parts(algorithm, &param)?;

    let mut config = SolveConfig::new(layout, algorithm);
    config.node_budget = node_budget;
    let report = solve_layout(config)?;

    print_solve_report(&report);
    Ok(())
}

fn run_benchmark_command(config: BenchmarkConfig) {
    println!(
        "Running benchmark on {} scrambles of {} moves...",
        config.count, config.scramble_depth
    );
    let results = run_benchmark(&config);
    print_benchmark_results(&results);
}
