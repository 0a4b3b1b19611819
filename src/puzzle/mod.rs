//! Word search puzzle
//!
//! A [`Puzzle`] owns the grid, the ordered word list and the random source.
//! Every structural change to the word list re-runs the placement search so
//! the grid always reflects the current words.

mod stats;

pub use stats::PuzzleStats;

use crate::core::{Grid, MAX_GRID_SIDE, Placement, Word};
use crate::error::PuzzleError;
use crate::render::RenderView;
use crate::solver::{SearchConfig, SearchReport, Sizing, optimum_size, populate};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Grid size before the first resize
const INITIAL_GRID_SIZE: usize = 4;

/// Forced dimensions offered before automatic sizing has picked any
const DEFAULT_FORCED_SIZE: usize = 10;

/// Which neighbour a word swaps with in [`Puzzle::move_word`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// A word search puzzle document
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<Word>,
    title: String,
    narrative: String,
    forced: bool,
    forced_width: usize,
    forced_height: usize,
    longest_word: usize,
    total_letters: usize,
    config: SearchConfig,
    rng: StdRng,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle {
    /// Create an empty puzzle seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), StdRng::from_os_rng())
    }

    /// Create an empty puzzle with a reproducible random source
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(SearchConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Create an empty puzzle with custom search settings
    #[must_use]
    pub fn with_config(config: SearchConfig, rng: StdRng) -> Self {
        let mut puzzle = Self {
            grid: Grid::new(INITIAL_GRID_SIZE, INITIAL_GRID_SIZE),
            words: Vec::new(),
            title: String::new(),
            narrative: String::new(),
            forced: false,
            forced_width: DEFAULT_FORCED_SIZE,
            forced_height: DEFAULT_FORCED_SIZE,
            longest_word: 0,
            total_letters: 0,
            config,
            rng,
        };
        puzzle.fit_grid_size();
        puzzle.search();
        puzzle
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words in display order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn set_narrative(&mut self, narrative: impl Into<String>) {
        self.narrative = narrative.into();
    }

    #[must_use]
    pub const fn is_forced_size(&self) -> bool {
        self.forced
    }

    /// Dimensions used while the size is forced
    #[must_use]
    pub const fn forced_size(&self) -> (usize, usize) {
        (self.forced_width, self.forced_height)
    }

    #[must_use]
    pub const fn longest_word_length(&self) -> usize {
        self.longest_word
    }

    #[must_use]
    pub const fn total_letters(&self) -> usize {
        self.total_letters
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// True when every word has a placement
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(Word::is_placed)
    }

    /// Side of the square grid the current words should fit in
    #[must_use]
    pub fn optimum_size(&self) -> usize {
        optimum_size(self.longest_word, self.total_letters)
    }

    #[must_use]
    pub fn hidden_message(&self) -> &str {
        self.grid.hidden_message()
    }

    #[must_use]
    pub const fn random_padding(&self) -> bool {
        self.grid.random_padding()
    }

    pub fn set_hidden_message(&mut self, message: &str) {
        self.grid.set_hidden_message(message, &mut self.rng);
    }

    pub fn set_random_padding(&mut self, random_padding: bool) {
        self.grid.set_random_padding(random_padding, &mut self.rng);
    }

    /// Pin the grid to `width × height` and re-place the words
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidDimensions` for a zero dimension or one
    /// above [`MAX_GRID_SIDE`], or
    /// `PuzzleError::PlacementFailed` if the words do not fit.
    pub fn set_forced_size(&mut self, width: usize, height: usize) -> Result<(), PuzzleError> {
        Grid::check_dimensions(width, height)?;
        self.forced = true;
        self.forced_width = width;
        self.forced_height = height;
        self.resize_grid()
    }

    /// Toggle forced sizing, keeping the stored forced dimensions
    ///
    /// # Errors
    /// Returns `PuzzleError::PlacementFailed` if the words do not fit the
    /// resulting grid.
    pub fn set_is_forced_size(&mut self, forced: bool) -> Result<(), PuzzleError> {
        self.forced = forced;
        self.resize_grid()
    }

    /// Bring the grid to its target size, re-placing words if it changed
    ///
    /// The target is the optimum square when unforced, the forced dimensions
    /// otherwise. Does nothing when the size is already right.
    ///
    /// # Errors
    /// Returns `PuzzleError::PlacementFailed` if the words do not fit.
    pub fn resize_grid(&mut self) -> Result<(), PuzzleError> {
        if self.fit_grid_size() {
            self.populate_grid()
        } else {
            Ok(())
        }
    }

    /// Re-place every word from an empty grid
    ///
    /// # Errors
    /// Returns `PuzzleError::PlacementFailed` if some words could not be
    /// placed within the forced size or the growth ceiling.
    pub fn populate_grid(&mut self) -> Result<(), PuzzleError> {
        let report = self.search();
        if report.succeeded() {
            Ok(())
        } else {
            Err(PuzzleError::PlacementFailed {
                unplaced: report.unplaced,
                width: report.width,
                height: report.height,
            })
        }
    }

    /// Append a word and place it
    ///
    /// The grid is resized first if the new word changes the optimum. The word
    /// is then placed around the existing ones; if that fails every word is
    /// re-placed. The word stays in the list even when placement fails.
    ///
    /// # Errors
    /// Returns `PuzzleError::PlacementFailed` if not every word fits.
    pub fn add_word(&mut self, text: &str, clue: Option<&str>) -> Result<(), PuzzleError> {
        let word = Word::new(text, clue);
        self.longest_word = self.longest_word.max(word.len());
        self.total_letters += word.len();
        if let Err(e) = self.resize_grid() {
            debug!("Resize before adding '{text}' left words unplaced: {e}");
        }

        self.words.push(word);
        let index = self.words.len() - 1;
        let placed = self.words[index].place(&mut self.grid, &mut self.rng);
        debug!("Added word '{text}' (placed directly: {placed})");
        if placed && self.is_complete() {
            Ok(())
        } else {
            self.populate_grid()
        }
    }

    /// Remove the word at `index` and re-place the rest
    ///
    /// # Errors
    /// Returns `PuzzleError::NoSuchWord` for a bad index, or
    /// `PuzzleError::PlacementFailed` if the remaining words do not fit.
    pub fn delete_word(&mut self, index: usize) -> Result<(), PuzzleError> {
        self.check_index(index)?;
        let removed = self.words.remove(index);
        debug!("Deleted word '{}'", removed.text());
        self.rebuild()
    }

    /// Change the text and/or clue of the word at `index`
    ///
    /// A clue-only change keeps the current layout. A text change re-places
    /// every word; without a new clue the clue follows the new text.
    ///
    /// # Errors
    /// Returns `PuzzleError::NoSuchWord` for a bad index, or
    /// `PuzzleError::PlacementFailed` if the words no longer fit.
    pub fn update_word(
        &mut self,
        index: usize,
        text: &str,
        clue: Option<&str>,
    ) -> Result<(), PuzzleError> {
        self.check_index(index)?;
        if self.words[index].update(text, clue) {
            debug!("Updated word {index} to '{text}'");
            self.rebuild()
        } else {
            Ok(())
        }
    }

    /// Swap the word at `index` with its neighbour
    ///
    /// Only the list order changes; the grid is untouched. Moving past either
    /// end leaves the list as it is. Returns the word's new index.
    ///
    /// # Errors
    /// Returns `PuzzleError::NoSuchWord` for a bad index.
    pub fn move_word(&mut self, index: usize, direction: MoveDirection) -> Result<usize, PuzzleError> {
        self.check_index(index)?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&i| i < self.words.len()),
        };
        Ok(target.map_or(index, |target| {
            self.words.swap(index, target);
            target
        }))
    }

    /// Order the word list alphabetically by normalized text
    ///
    /// The sort is stable and does not touch the grid.
    pub fn sort_words(&mut self) {
        self.words.sort_by(|a, b| a.letters().cmp(b.letters()));
    }

    /// Snapshot for a renderer, highlighting the word at `selected`
    #[must_use]
    pub fn render_view(&self, selected: Option<usize>) -> RenderView {
        RenderView::from_puzzle(self, selected)
    }

    /// Set the sizing mode and forced dimensions without touching the grid
    pub(crate) const fn set_forced_dimensions(&mut self, width: usize, height: usize, forced: bool) {
        self.forced = forced;
        self.forced_width = width;
        self.forced_height = height;
    }

    /// Rebuild a puzzle from stored words and placements
    ///
    /// Placements are replayed onto a cleared grid of the stored size. If any
    /// stored placement no longer fits, every word is placed afresh.
    pub(crate) fn restore_layout(
        &mut self,
        width: usize,
        height: usize,
        entries: Vec<(Word, Option<Placement>)>,
    ) -> Result<(), PuzzleError> {
        Grid::check_dimensions(width, height)?;
        self.grid.resize(width, height);
        self.grid.clear(&mut self.rng);
        self.words.clear();

        let mut replayed = true;
        for (mut word, placement) in entries {
            match placement {
                Some(p) if word.fits(&self.grid, p) => word.draw(&mut self.grid, p),
                Some(p) => {
                    warn!("Stored placement {p:?} of '{}' does not fit", word.text());
                    replayed = false;
                }
                None => {}
            }
            self.words.push(word);
        }
        self.recompute_counts();
        self.grid.recompute_padding(&mut self.rng);

        if replayed {
            Ok(())
        } else {
            self.populate_grid()
        }
    }

    fn check_index(&self, index: usize) -> Result<(), PuzzleError> {
        if index < self.words.len() {
            Ok(())
        } else {
            Err(PuzzleError::NoSuchWord {
                index,
                len: self.words.len(),
            })
        }
    }

    fn recompute_counts(&mut self) {
        self.longest_word = self.words.iter().map(Word::len).max().unwrap_or(0);
        self.total_letters = self.words.iter().map(Word::len).sum();
    }

    /// Recount, resize and re-place after a structural change
    fn rebuild(&mut self) -> Result<(), PuzzleError> {
        self.recompute_counts();
        self.fit_grid_size();
        self.populate_grid()
    }

    /// Resize the grid to its target size; returns `true` if it changed
    fn fit_grid_size(&mut self) -> bool {
        let target = if self.forced {
            (self.forced_width, self.forced_height)
        } else {
            let size = self.optimum_size().min(MAX_GRID_SIDE);
            (size, size)
        };
        if self.grid.size() == target {
            return false;
        }
        debug!(
            "Resizing grid from {:?} to {target:?} (forced: {})",
            self.grid.size(),
            self.forced
        );
        self.grid.resize(target.0, target.1);
        if !self.forced {
            (self.forced_width, self.forced_height) = target;
        }
        true
    }

    fn search(&mut self) -> SearchReport {
        let sizing = if self.forced {
            Sizing::Forced
        } else {
            Sizing::Auto {
                ceiling: self.config.growth_ceiling(self.optimum_size()),
            }
        };
        let report = populate(
            &mut self.grid,
            &mut self.words,
            sizing,
            &self.config,
            &mut self.rng,
        );
        if !report.succeeded() {
            warn!(
                "{} of {} words could not be placed in a {}x{} grid",
                report.unplaced,
                self.words.len(),
                report.width,
                report.height
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Layer;

    fn puzzle_with(words: &[&str]) -> Puzzle {
        let mut puzzle = Puzzle::with_seed(11);
        for word in words {
            puzzle.add_word(word, None).unwrap();
        }
        puzzle
    }

    fn assert_words_read_back(puzzle: &Puzzle) {
        let grid = puzzle.grid();
        for word in puzzle.words() {
            for (p, letter) in word.cells() {
                assert!(grid.contains(p), "'{word}' leaves the grid at {p:?}");
                assert_eq!(grid.get_cell(p.x, p.y, Layer::Words), Some(letter));
            }
        }
    }

    fn placements(puzzle: &Puzzle) -> Vec<Option<Placement>> {
        puzzle.words().iter().map(Word::placement).collect()
    }

    #[test]
    fn new_puzzle_is_empty_and_small() {
        let puzzle = Puzzle::with_seed(1);
        assert_eq!(puzzle.word_count(), 0);
        assert_eq!(puzzle.grid().size(), (2, 2));
        assert_eq!(puzzle.longest_word_length(), 0);
        assert_eq!(puzzle.total_letters(), 0);
        assert!(!puzzle.is_forced_size());
    }

    #[test]
    fn cat_and_dog_fit_auto_sized_grid() {
        let mut puzzle = puzzle_with(&["cat", "dog"]);
        assert!(puzzle.populate_grid().is_ok());
        assert!(puzzle.is_complete());
        assert_words_read_back(&puzzle);
        assert_eq!(puzzle.longest_word_length(), 3);
        assert_eq!(puzzle.total_letters(), 6);
    }

    #[test]
    fn forced_two_by_two_rejects_elephant() {
        let mut puzzle = Puzzle::with_seed(2);
        puzzle.set_forced_size(2, 2).unwrap();

        let result = puzzle.add_word("elephant", None);
        assert!(matches!(
            result,
            Err(PuzzleError::PlacementFailed {
                unplaced: 1,
                width: 2,
                height: 2
            })
        ));
        assert_eq!(puzzle.word_count(), 1);
        assert!(puzzle.populate_grid().is_err());
        assert!(puzzle.resize_grid().is_ok(), "size already correct, no-op");
    }

    #[test]
    fn zero_forced_size_is_rejected() {
        let mut puzzle = Puzzle::with_seed(3);
        assert_eq!(
            puzzle.set_forced_size(0, 5),
            Err(PuzzleError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(!puzzle.is_forced_size());
    }

    #[test]
    fn oversized_forced_size_is_rejected() {
        let mut puzzle = Puzzle::with_seed(3);
        puzzle.add_word("cat", None).unwrap();
        let before = puzzle.grid().size();

        assert_eq!(
            puzzle.set_forced_size(usize::MAX / 2, 4),
            Err(PuzzleError::InvalidDimensions {
                width: usize::MAX / 2,
                height: 4
            })
        );
        assert!(puzzle.set_forced_size(4, MAX_GRID_SIDE + 1).is_err());
        assert!(!puzzle.is_forced_size());
        assert_eq!(puzzle.grid().size(), before);
    }

    #[test]
    fn hidden_message_on_empty_forced_grid() {
        let mut puzzle = Puzzle::with_seed(4);
        puzzle.set_forced_size(4, 4).unwrap();
        puzzle.set_random_padding(false);
        puzzle.set_hidden_message("hi there");

        let grid = puzzle.grid();
        let padding: String = grid
            .positions()
            .map(|p| grid.get_cell(p.x, p.y, Layer::Padding).map_or(' ', char::from))
            .collect();
        assert_eq!(padding, format!("hithere{}", " ".repeat(9)));
    }

    #[test]
    fn deleting_only_word_empties_grid() {
        let mut puzzle = puzzle_with(&["giraffe"]);
        puzzle.delete_word(0).unwrap();

        assert_eq!(puzzle.word_count(), 0);
        assert_eq!(puzzle.total_letters(), 0);
        assert_eq!(puzzle.longest_word_length(), 0);
        assert_eq!(puzzle.grid().letter_count(), 0);
    }

    #[test]
    fn delete_recomputes_counts() {
        let mut puzzle = puzzle_with(&["hippopotamus", "cat", "dog"]);
        puzzle.delete_word(0).unwrap();
        assert_eq!(puzzle.longest_word_length(), 3);
        assert_eq!(puzzle.total_letters(), 6);
        assert_eq!(puzzle.grid().size(), (5, 5));
        assert!(puzzle.is_complete());
        assert_words_read_back(&puzzle);
    }

    #[test]
    fn delete_bad_index() {
        let mut puzzle = puzzle_with(&["cat"]);
        assert_eq!(
            puzzle.delete_word(3),
            Err(PuzzleError::NoSuchWord { index: 3, len: 1 })
        );
    }

    #[test]
    fn move_up_swaps_without_replacing() {
        let mut puzzle = puzzle_with(&["ant", "bee", "cow"]);
        let before = placements(&puzzle);
        let grid_before = puzzle.grid().clone();

        assert_eq!(puzzle.move_word(1, MoveDirection::Up), Ok(0));

        let texts: Vec<&str> = puzzle.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["bee", "ant", "cow"]);
        let after = placements(&puzzle);
        assert_eq!(after, [before[1], before[0], before[2]]);
        assert_eq!(puzzle.grid(), &grid_before);
    }

    #[test]
    fn move_past_ends_is_noop() {
        let mut puzzle = puzzle_with(&["ant", "bee"]);
        assert_eq!(puzzle.move_word(0, MoveDirection::Up), Ok(0));
        assert_eq!(puzzle.move_word(1, MoveDirection::Down), Ok(1));
        assert_eq!(puzzle.move_word(0, MoveDirection::Down), Ok(1));
        assert_eq!(puzzle.words()[1].text(), "ant");
        assert!(puzzle.move_word(2, MoveDirection::Up).is_err());
    }

    #[test]
    fn sort_is_alphabetic_by_letters() {
        let mut puzzle = puzzle_with(&["Zebra", "apple", "Mango", "ap-ple"]);
        let grid_before = puzzle.grid().clone();
        puzzle.sort_words();

        let texts: Vec<&str> = puzzle.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "ap-ple", "Mango", "Zebra"]);
        assert_eq!(puzzle.grid(), &grid_before);
    }

    #[test]
    fn update_clue_only_keeps_layout() {
        let mut puzzle = puzzle_with(&["cat", "dog"]);
        let before = placements(&puzzle);
        puzzle.update_word(0, "cat", Some("Feline")).unwrap();
        assert_eq!(puzzle.words()[0].clue(), "Feline");
        assert_eq!(placements(&puzzle), before);
    }

    #[test]
    fn update_text_replaces_everything() {
        let mut puzzle = puzzle_with(&["cat", "dog"]);
        puzzle.update_word(1, "crocodile", None).unwrap();

        assert_eq!(puzzle.words()[1].letters(), "crocodile");
        assert_eq!(puzzle.words()[1].clue(), "crocodile");
        assert_eq!(puzzle.longest_word_length(), 9);
        assert_eq!(puzzle.total_letters(), 12);
        assert!(puzzle.is_complete());
        assert_words_read_back(&puzzle);
    }

    #[test]
    fn auto_size_tracks_optimum() {
        let puzzle = puzzle_with(&["alligator"]);
        assert_eq!(puzzle.optimum_size(), 11);
        assert_eq!(puzzle.grid().size(), (11, 11));
        assert_eq!(puzzle.forced_size(), (11, 11));
    }

    #[test]
    fn unforcing_returns_to_optimum() {
        let mut puzzle = puzzle_with(&["cat"]);
        puzzle.set_forced_size(12, 9).unwrap();
        assert_eq!(puzzle.grid().size(), (12, 9));

        puzzle.set_is_forced_size(false).unwrap();
        assert_eq!(puzzle.grid().size(), (5, 5));
        assert!(puzzle.is_complete());
    }

    #[test]
    fn many_words_all_placed() {
        let words = [
            "january", "february", "march", "april", "may", "june", "july", "august",
            "september", "october", "november", "december",
        ];
        let puzzle = puzzle_with(&words);
        assert!(puzzle.is_complete());
        assert_words_read_back(&puzzle);
        assert!(puzzle.grid().width() >= puzzle.optimum_size());
    }
}
