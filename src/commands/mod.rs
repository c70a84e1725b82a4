//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod randomize;
pub mod script;
pub mod session;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_layout};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use randomize::{DEFAULT_SEED, scramble};
pub use script::{Command, ScriptError, ScriptRunner, ScriptStep};
pub use session::{Outcome, Session, SessionConfig, SessionError};
pub use solve::{SolveConfig, SolveReport, solve_layout};
