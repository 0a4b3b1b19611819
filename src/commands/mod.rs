//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod edit;
pub mod generate;

pub use analyze::{AnalysisResult, LayoutProblem, analyze_puzzle, verify_layout};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use edit::{EditAction, EditOutcome, apply_edit};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzle};
