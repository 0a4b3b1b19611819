//! Find That Word
//!
//! A word search puzzle generator. Words are hidden in a letter grid in any of
//! eight directions by a bounded randomized search that grows the grid when
//! the words do not fit.
//!
//! # Quick Start
//!
//! ```rust
//! use findthatword::puzzle::Puzzle;
//!
//! let mut puzzle = Puzzle::with_seed(7);
//! puzzle.add_word("otter", Some("River swimmer")).unwrap();
//! puzzle.add_word("heron", None).unwrap();
//!
//! assert!(puzzle.is_complete());
//! println!("{}x{} grid", puzzle.grid().width(), puzzle.grid().height());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Placement search
pub mod solver;

// Puzzle document
pub mod puzzle;

// Render data for front ends
pub mod render;

// Plain-text export
pub mod export;

// JSON persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
