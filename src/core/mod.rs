//! Core domain types for word search puzzles
//!
//! Grid cells, words and their placements. Everything here works on an
//! explicitly passed grid and random source; the puzzle owns both.

mod direction;
mod grid;
mod text;
mod word;

pub use direction::Direction;
pub use grid::{Grid, Layer, MAX_GRID_SIDE, Position};
pub use text::normalize;
pub use word::{Placement, Word};
