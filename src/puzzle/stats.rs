//! Puzzle statistics
//!
//! Derived facts about a populated puzzle, used by the analyze command and
//! the benchmark.

use super::Puzzle;
use crate::core::{Direction, Position};
use rustc_hash::FxHashMap;

/// Summary of how a puzzle's words sit in its grid
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleStats {
    pub words: usize,
    pub placed: usize,
    pub unplaced: usize,
    pub width: usize,
    pub height: usize,
    pub optimum_size: usize,
    pub longest_word: usize,
    pub total_letters: usize,
    /// Cells holding a word letter
    pub letter_cells: usize,
    /// Cells covered by more than one word
    pub shared_cells: usize,
    /// Placed words per direction
    pub directions: FxHashMap<Direction, usize>,
}

impl PuzzleStats {
    /// Gather statistics for `puzzle`
    #[must_use]
    pub fn collect(puzzle: &Puzzle) -> Self {
        let mut coverage: FxHashMap<Position, usize> = FxHashMap::default();
        let mut directions: FxHashMap<Direction, usize> = FxHashMap::default();

        for word in puzzle.words() {
            if let Some(placement) = word.placement() {
                *directions.entry(placement.direction).or_insert(0) += 1;
            }
            for (position, _) in word.cells() {
                *coverage.entry(position).or_insert(0) += 1;
            }
        }

        let placed = puzzle.words().iter().filter(|w| w.is_placed()).count();
        let (width, height) = puzzle.grid().size();

        Self {
            words: puzzle.word_count(),
            placed,
            unplaced: puzzle.word_count() - placed,
            width,
            height,
            optimum_size: puzzle.optimum_size(),
            longest_word: puzzle.longest_word_length(),
            total_letters: puzzle.total_letters(),
            letter_cells: puzzle.grid().letter_count(),
            shared_cells: coverage.values().filter(|&&count| count > 1).count(),
            directions,
        }
    }

    /// Fraction of grid cells occupied by word letters
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.letter_cells as f64 / (self.width * self.height) as f64
    }

    /// Letters saved by words sharing cells
    #[must_use]
    pub const fn overlap_savings(&self) -> usize {
        self.total_letters.saturating_sub(self.letter_cells)
    }

    /// How many grid sides the search added beyond the optimum
    #[must_use]
    pub const fn growth(&self) -> usize {
        self.width.saturating_sub(self.optimum_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_puzzle_stats() {
        let puzzle = Puzzle::with_seed(1);
        let stats = PuzzleStats::collect(&puzzle);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.letter_cells, 0);
        assert_eq!(stats.shared_cells, 0);
        assert!(stats.directions.is_empty());
        assert!(stats.fill_ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn counts_placed_words_and_letters() {
        let mut puzzle = Puzzle::with_seed(5);
        puzzle.add_word("lion", None).unwrap();
        puzzle.add_word("tiger", None).unwrap();

        let stats = PuzzleStats::collect(&puzzle);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.placed, 2);
        assert_eq!(stats.unplaced, 0);
        assert_eq!(stats.total_letters, 9);
        assert_eq!(stats.directions.values().sum::<usize>(), 2);
        // Shared cells are counted once in the grid
        assert_eq!(stats.letter_cells + stats.overlap_savings(), 9);
        assert!(stats.shared_cells <= stats.overlap_savings());
    }

    #[test]
    fn forced_overlap_is_detected() {
        // Only one row: "abc" and "cba" must share all three cells
        let mut puzzle = Puzzle::with_seed(9);
        puzzle.set_forced_size(3, 1).unwrap();
        puzzle.add_word("abc", None).unwrap();
        puzzle.add_word("cba", None).unwrap();

        let stats = PuzzleStats::collect(&puzzle);
        assert_eq!(stats.letter_cells, 3);
        assert_eq!(stats.shared_cells, 3);
        assert_eq!(stats.overlap_savings(), 3);
    }

    #[test]
    fn unplaced_words_are_counted() {
        let mut puzzle = Puzzle::with_seed(3);
        puzzle.set_forced_size(2, 2).unwrap();
        assert!(puzzle.add_word("elephant", None).is_err());

        let stats = PuzzleStats::collect(&puzzle);
        assert_eq!(stats.unplaced, 1);
        assert_eq!(stats.letter_cells, 0);
    }
}
