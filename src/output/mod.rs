//! Terminal output formatting
//!
//! Display utilities for puzzles, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_puzzle, render_puzzle};
