//! Puzzle word representation
//!
//! A Word keeps the text the user typed, its normalized letters, a clue, and
//! its placement on the grid once it has been placed.

use super::grid::{Grid, Layer, Position};
use super::text::normalize;
use super::Direction;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Where a word sits on the grid: its first letter and the direction it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub origin: Position,
    pub direction: Direction,
}

impl Placement {
    #[inline]
    #[must_use]
    pub const fn new(origin: Position, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Position of the `index`th letter, `None` if it falls off the top/left edge
    #[inline]
    #[must_use]
    pub fn cell(self, index: usize) -> Option<Position> {
        self.origin.step(self.direction, index)
    }
}

/// A single puzzle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: String,
    clue: String,
    placement: Option<Placement>,
}

impl Word {
    /// Create an unplaced word
    ///
    /// The clue falls back to `text` when it is `None` or empty.
    ///
    /// # Examples
    /// ```
    /// use findthatword::core::Word;
    ///
    /// let word = Word::new("Ice Cream", None);
    /// assert_eq!(word.letters(), "icecream");
    /// assert_eq!(word.clue(), "Ice Cream");
    /// assert_eq!(word.len(), 8);
    /// assert!(!word.is_placed());
    /// ```
    #[must_use]
    pub fn new(text: &str, clue: Option<&str>) -> Self {
        let clue = clue.filter(|c| !c.is_empty()).unwrap_or(text);
        Self {
            text: text.to_string(),
            letters: normalize(text),
            clue: clue.to_string(),
            placement: None,
        }
    }

    /// The text as typed
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The normalized letters written into the grid
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Number of grid cells the word covers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        self.placement
    }

    #[inline]
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Change the text and/or clue
    ///
    /// A supplied clue always replaces the current one. When the text changes
    /// the word becomes unplaced, and without a supplied clue the clue follows
    /// the new text. Returns `true` if the text changed.
    pub fn update(&mut self, text: &str, clue: Option<&str>) -> bool {
        let clue = clue.filter(|c| !c.is_empty());
        if let Some(clue) = clue {
            self.clue = clue.to_string();
        }
        if text == self.text {
            return false;
        }
        self.text = text.to_string();
        self.letters = normalize(text);
        if clue.is_none() {
            self.clue = text.to_string();
        }
        self.unplace();
        true
    }

    /// Forget the placement
    ///
    /// Letters already written to the grid stay there; the owning puzzle
    /// clears the grid and replays every word instead.
    pub const fn unplace(&mut self) {
        self.placement = None;
    }

    /// Every placement that keeps the word inside a `width × height` grid,
    /// in random order
    pub fn candidate_locations<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Vec<Placement> {
        let span = self.len().saturating_sub(1);
        let mut candidates = Vec::new();
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            for y in start_range(dy, span, height) {
                for x in start_range(dx, span, width) {
                    candidates.push(Placement::new(Position::new(x, y), direction));
                }
            }
        }
        candidates.shuffle(rng);
        candidates
    }

    /// Check whether the word could be written at `placement`
    ///
    /// Every covered cell must be inside the grid and either empty or already
    /// holding the matching letter.
    #[must_use]
    pub fn fits(&self, grid: &Grid, placement: Placement) -> bool {
        self.letters.bytes().enumerate().all(|(i, letter)| {
            placement
                .cell(i)
                .filter(|&p| grid.contains(p))
                .is_some_and(|p| {
                    grid.get_cell(p.x, p.y, Layer::Words)
                        .is_none_or(|existing| existing == letter)
                })
        })
    }

    /// Find a free location and write the word into the grid
    ///
    /// Candidates are tried until one fits. A hidden message is refilled after
    /// writing because the word may cover cells the message used. Returns
    /// `false` and leaves the word unplaced if nothing fits.
    pub fn place<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        let mut untried = self.candidate_locations(grid.width(), grid.height(), rng);
        while let Some(candidate) = untried.pop() {
            if self.fits(grid, candidate) {
                self.draw(grid, candidate);
                if !grid.random_padding() {
                    grid.recompute_padding(rng);
                }
                return true;
            }
        }
        self.unplace();
        false
    }

    /// Write the letters at a placement already checked with [`Word::fits`]
    pub(crate) fn draw(&mut self, grid: &mut Grid, placement: Placement) {
        self.placement = Some(placement);
        for (position, letter) in self.cells() {
            grid.set_cell(position.x, position.y, letter);
        }
    }

    /// Cells covered by the placed word with their letters
    ///
    /// Empty when the word is unplaced.
    pub fn cells(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        let placement = self.placement;
        self.letters
            .bytes()
            .enumerate()
            .filter_map(move |(i, letter)| Some((placement?.cell(i)?, letter)))
    }

    /// Cell of the last letter of a placed word
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.placement?.cell(self.len().saturating_sub(1))
    }
}

/// Origins along one axis from which `span` further steps of `delta` stay in `0..extent`
fn start_range(delta: isize, span: usize, extent: usize) -> Range<usize> {
    match delta {
        1 => 0..extent.saturating_sub(span),
        -1 => span.min(extent)..extent,
        _ => 0..extent,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn reads_back(word: &Word, grid: &Grid) -> bool {
        word.cells()
            .all(|(p, letter)| grid.get_cell(p.x, p.y, Layer::Words) == Some(letter))
    }

    #[test]
    fn word_creation_normalizes() {
        let word = Word::new("New York!", None);
        assert_eq!(word.text(), "New York!");
        assert_eq!(word.letters(), "newyork");
        assert_eq!(word.clue(), "New York!");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn empty_clue_falls_back_to_text() {
        let word = Word::new("cat", Some(""));
        assert_eq!(word.clue(), "cat");

        let word = Word::new("cat", Some("Feline"));
        assert_eq!(word.clue(), "Feline");
    }

    #[test]
    fn candidate_count_on_square_grid() {
        // Length 3 on 3x3: 3 per orthogonal direction, 1 per diagonal
        let word = Word::new("cat", None);
        let candidates = word.candidate_locations(3, 3, &mut rng());
        assert_eq!(candidates.len(), 4 * 3 + 4);
    }

    #[test]
    fn candidates_stay_in_bounds() {
        let word = Word::new("four", None);
        let (width, height) = (6, 5);
        for candidate in word.candidate_locations(width, height, &mut rng()) {
            for i in 0..word.len() {
                let p = candidate.cell(i).unwrap();
                assert!(p.x < width && p.y < height, "{candidate:?} leaves grid");
            }
        }
    }

    #[test]
    fn no_candidates_when_word_too_long() {
        let word = Word::new("elephant", None);
        assert!(word.candidate_locations(2, 2, &mut rng()).is_empty());
    }

    #[test]
    fn only_vertical_candidates_in_a_column() {
        let word = Word::new("abc", None);
        let candidates = word.candidate_locations(1, 3, &mut rng());
        assert_eq!(candidates.len(), 2);
        assert!(
            candidates
                .iter()
                .all(|c| matches!(c.direction, Direction::North | Direction::South))
        );
    }

    #[test]
    fn fits_on_empty_and_matching_cells() {
        let mut grid = Grid::new(4, 4);
        let word = Word::new("cat", None);
        let across = Placement::new(Position::new(0, 0), Direction::East);
        assert!(word.fits(&grid, across));

        grid.set_cell(1, 0, b'a');
        assert!(word.fits(&grid, across));

        grid.set_cell(2, 0, b'x');
        assert!(!word.fits(&grid, across));
    }

    #[test]
    fn fits_rejects_out_of_bounds() {
        let grid = Grid::new(4, 4);
        let word = Word::new("cat", None);
        assert!(!word.fits(&grid, Placement::new(Position::new(2, 0), Direction::East)));
        assert!(!word.fits(&grid, Placement::new(Position::new(1, 1), Direction::NorthWest)));
        assert!(word.fits(&grid, Placement::new(Position::new(2, 2), Direction::NorthWest)));
    }

    #[test]
    fn place_writes_letters_along_placement() {
        let mut grid = Grid::new(5, 5);
        let mut word = Word::new("horse", None);
        assert!(word.place(&mut grid, &mut rng()));
        assert!(word.is_placed());
        assert!(reads_back(&word, &grid));
        assert_eq!(grid.letter_count(), 5);
        assert_eq!(word.cells().count(), 5);
    }

    #[test]
    fn place_shares_matching_letters() {
        // A 3x1 grid leaves only the same row for both words
        let mut grid = Grid::new(3, 1);
        let mut first = Word::new("abc", None);
        let mut second = Word::new("cba", None);
        assert!(first.place(&mut grid, &mut rng()));
        assert!(second.place(&mut grid, &mut rng()));
        assert!(reads_back(&first, &grid));
        assert!(reads_back(&second, &grid));
        assert_eq!(grid.letter_count(), 3);
    }

    #[test]
    fn place_fails_when_full() {
        let mut grid = Grid::new(3, 1);
        let mut first = Word::new("abc", None);
        let mut second = Word::new("xyz", None);
        assert!(first.place(&mut grid, &mut rng()));
        assert!(!second.place(&mut grid, &mut rng()));
        assert!(!second.is_placed());
        assert_eq!(second.cells().count(), 0);
    }

    #[test]
    fn place_refreshes_hidden_message() {
        let mut grid = Grid::new(3, 1);
        grid.set_random_padding(false, &mut rng());
        grid.set_hidden_message("xy", &mut rng());
        let mut word = Word::new("a", None);
        assert!(word.place(&mut grid, &mut rng()));

        let pad: Vec<Option<u8>> = (0..3).map(|x| grid.get_cell(x, 0, Layer::Padding)).collect();
        assert_eq!(pad.iter().flatten().count(), 2);
        let origin = word.placement().unwrap().origin;
        assert_eq!(grid.get_cell(origin.x, 0, Layer::Padding), None);
    }

    #[test]
    fn unplace_keeps_grid_letters() {
        let mut grid = Grid::new(4, 4);
        let mut word = Word::new("dog", None);
        assert!(word.place(&mut grid, &mut rng()));
        word.unplace();
        assert!(!word.is_placed());
        assert_eq!(grid.letter_count(), 3);
    }

    #[test]
    fn end_follows_direction() {
        let mut grid = Grid::new(5, 5);
        let mut word = Word::new("abc", None);
        word.draw(&mut grid, Placement::new(Position::new(4, 4), Direction::NorthWest));
        assert_eq!(word.end(), Some(Position::new(2, 2)));
        assert_eq!(grid.get_cell(3, 3, Layer::Words), Some(b'b'));
    }

    #[test]
    fn update_changes_text_and_clue() {
        let mut grid = Grid::new(5, 5);
        let mut word = Word::new("cat", Some("Feline"));
        assert!(word.place(&mut grid, &mut rng()));

        assert!(!word.update("cat", Some("Pet")));
        assert_eq!(word.clue(), "Pet");
        assert!(word.is_placed());

        assert!(word.update("Tiger", None));
        assert_eq!(word.letters(), "tiger");
        assert_eq!(word.clue(), "Tiger");
        assert!(!word.is_placed());
    }
}
