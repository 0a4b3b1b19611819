//! Placement search and grid sizing
//!
//! This module contains the algorithm that fits a word list into a grid.

mod engine;
mod sizing;

pub use engine::{Outcome, SearchConfig, SearchReport, Sizing, populate};
pub use sizing::optimum_size;
