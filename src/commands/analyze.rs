//! Puzzle analysis command
//!
//! Reports layout statistics for a puzzle and checks that every placed word
//! can actually be read back from the grid.

use crate::core::{Layer, Position};
use crate::puzzle::{Puzzle, PuzzleStats};
use std::fmt;

/// A defect found while checking a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutProblem {
    /// A word has no placement
    Unplaced { word: String },
    /// A placed word runs off the grid at its `letter`th letter
    OutOfBounds { word: String, letter: usize },
    /// The grid holds a different letter than the word expects
    Mismatch {
        word: String,
        position: Position,
        expected: char,
        found: Option<char>,
    },
}

impl fmt::Display for LayoutProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unplaced { word } => write!(f, "'{word}' is not placed"),
            Self::OutOfBounds { word, letter } => {
                write!(f, "'{word}' leaves the grid at letter {}", letter + 1)
            }
            Self::Mismatch {
                word,
                position,
                expected,
                found,
            } => write!(
                f,
                "'{word}' expects '{expected}' at ({}, {}) but found '{}'",
                position.x,
                position.y,
                found.unwrap_or(' ')
            ),
        }
    }
}

/// Result of analyzing a puzzle
pub struct AnalysisResult {
    pub title: String,
    pub stats: PuzzleStats,
    pub problems: Vec<LayoutProblem>,
}

impl AnalysisResult {
    /// True when every word is placed and reads back correctly
    #[must_use]
    pub fn is_sound(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check that each word's letters sit in the grid's word layer
#[must_use]
pub fn verify_layout(puzzle: &Puzzle) -> Vec<LayoutProblem> {
    let grid = puzzle.grid();
    let mut problems = Vec::new();

    for word in puzzle.words() {
        let Some(placement) = word.placement() else {
            problems.push(LayoutProblem::Unplaced {
                word: word.text().to_string(),
            });
            continue;
        };

        for (i, expected) in word.letters().bytes().enumerate() {
            let Some(position) = placement.cell(i).filter(|&p| grid.contains(p)) else {
                problems.push(LayoutProblem::OutOfBounds {
                    word: word.text().to_string(),
                    letter: i,
                });
                break;
            };
            let found = grid.get_cell(position.x, position.y, Layer::Words);
            if found != Some(expected) {
                problems.push(LayoutProblem::Mismatch {
                    word: word.text().to_string(),
                    position,
                    expected: char::from(expected),
                    found: found.map(char::from),
                });
            }
        }
    }

    problems
}

/// Analyze a puzzle's layout
#[must_use]
pub fn analyze_puzzle(puzzle: &Puzzle) -> AnalysisResult {
    AnalysisResult {
        title: puzzle.title().to_string(),
        stats: PuzzleStats::collect(puzzle),
        problems: verify_layout(puzzle),
    }
}
