//! Benchmark command
//!
//! Runs A* h1, A* h2 and beam search over the same set of seeded scrambles.

use super::randomize::scramble;
use crate::core::{Board, Heuristic};
use crate::solver::{Algorithm, DEFAULT_NODE_BUDGET, Solver};
use log::debug;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of scrambled boards
    pub count: usize,
    /// Random moves per scramble
    pub scramble_depth: usize,
    /// Seed of the first scramble; board `i` uses `seed + i`
    pub seed: u64,
    pub node_budget: usize,
    pub beam_width: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 20,
            scramble_depth: 20,
            seed: super::randomize::DEFAULT_SEED,
            node_budget: DEFAULT_NODE_BUDGET,
            beam_width: 10,
        }
    }
}

/// Aggregate statistics for one algorithm
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub solved: usize,
    /// Total moves over solved runs only
    pub total_moves: usize,
    pub total_nodes: usize,
    pub duration: Duration,
}

impl BenchmarkResult {
    const fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            runs: 0,
            solved: 0,
            total_moves: 0,
            total_nodes: 0,
            duration: Duration::ZERO,
        }
    }

    /// Mean solution length over solved runs
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.solved as f64
        }
    }

    /// Mean nodes visited over all runs
    #[must_use]
    pub fn average_nodes(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_nodes as f64 / self.runs as f64
        }
    }

    /// Fraction of runs that reached the goal
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.solved as f64 / self.runs as f64
        }
    }
}

/// Algorithms compared by the benchmark, in report order
#[must_use]
pub const fn benchmark_algorithms(beam_width: usize) -> [Algorithm; 3] {
    [
        Algorithm::AStar(Heuristic::MisplacedTiles),
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::Beam { width: beam_width },
    ]
}

/// Generate the boards a benchmark runs over
#[must_use]
pub fn benchmark_boards(config: &BenchmarkConfig) -> Vec<Board> {
    (0..config.count as u64)
        .map(|i| scramble(config.scramble_depth, config.seed.wrapping_add(i)))
        .collect()
}

/// Run every benchmark algorithm over the configured scrambles
pub fn run_benchmark(config: &BenchmarkConfig) -> Vec<BenchmarkResult> {
    let boards = benchmark_boards(config);
    let solver = Solver::new(config.node_budget);

    benchmark_algorithms(config.beam_width)
        .into_iter()
        .map(|algorithm| {
            let mut stats = BenchmarkResult::empty(algorithm);
            let start = Instant::now();

            for board in &boards {
                let result = solver.solve(algorithm, *board);
                stats.runs += 1;
                stats.total_nodes += result.nodes_visited();
                if result.is_solved() {
                    stats.solved += 1;
                    stats.total_moves += result.trace().len();
                }
            }

            stats.duration = start.elapsed();
            debug!(
                "{}: {}/{} solved in {:?}",
                algorithm.label(),
                stats.solved,
                stats.runs,
                stats.duration
            );
            stats
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchmarkConfig {
        BenchmarkConfig {
            count: 5,
            scramble_depth: 8,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs_all_algorithms() {
        let results = run_benchmark(&small_config());

        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.runs, 5);
            assert!(result.solved <= result.runs);
            assert!(result.total_nodes > 0);
        }
    }

    #[test]
    fn astar_solves_shallow_scrambles_optimally() {
        let results = run_benchmark(&small_config());
        let h1 = &results[0];
        let h2 = &results[1];

        assert_eq!(h1.solved, 5);
        assert_eq!(h2.solved, 5);
        // Both heuristics are admissible, so both find optimal solutions
        assert_eq!(h1.total_moves, h2.total_moves);
        assert!(h1.average_moves() <= 8.0);
    }

    #[test]
    fn boards_are_reproducible() {
        let config = small_config();
        assert_eq!(benchmark_boards(&config), benchmark_boards(&config));
    }

    #[test]
    fn empty_benchmark() {
        let config = BenchmarkConfig {
            count: 0,
            ..BenchmarkConfig::default()
        };
        let results = run_benchmark(&config);

        for result in &results {
            assert_eq!(result.runs, 0);
            assert!(result.average_nodes().abs() < f64::EPSILON);
            assert!(result.solve_rate().abs() < f64::EPSILON);
        }
    }
}
