//! Word lists for puzzles
//!
//! Loading of user word lists plus an embedded sample list.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordEntry;
