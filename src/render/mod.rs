//! Render data
//!
//! Everything a renderer needs to draw a puzzle, collected from the core in
//! one pass. Colours and display switches travel in an explicit
//! [`RenderConfig`] rather than process-wide constants.

use crate::core::{Direction, Placement, Position};
use crate::puzzle::Puzzle;

/// An RGBA colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// 8-bit RGB components blended over a white background
    #[must_use]
    pub fn to_rgb8_over_white(self) -> (u8, u8, u8) {
        let blend = |c: f32| (255.0 * (c * self.a + (1.0 - self.a))).round().clamp(0.0, 255.0) as u8;
        (blend(self.r), blend(self.g), blend(self.b))
    }
}

/// Renderer settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub background: Rgba,
    pub grid_lines: Rgba,
    pub word: Rgba,
    pub selected_word: Rgba,
    pub padding: Rgba,
    pub show_title: bool,
    pub show_grid: bool,
    pub show_words: bool,
    pub show_solution: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Rgba::opaque(1.0, 1.0, 1.0),
            grid_lines: Rgba::opaque(0.5, 0.5, 0.5),
            word: Rgba::new(0.75, 0.0, 0.0, 0.3),
            selected_word: Rgba::new(0.5, 0.0, 0.75, 0.6),
            padding: Rgba::opaque(0.0, 0.0, 0.0),
            show_title: true,
            show_grid: true,
            show_words: true,
            show_solution: false,
        }
    }
}

/// One grid cell as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Combined-layer letter, `' '` when blank
    pub letter: char,
    /// True when a placed word covers the cell
    pub in_word: bool,
    /// True when the selected word covers the cell
    pub selected: bool,
}

/// One word-list entry as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub clue: String,
    pub text: String,
    pub placement: Option<Placement>,
    pub selected: bool,
}

/// A solution line from the first to the last letter of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionLine {
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
    pub selected: bool,
}

/// Snapshot of a puzzle for drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    pub title: String,
    pub narrative: String,
    pub width: usize,
    pub height: usize,
    /// Row-major cells
    pub cells: Vec<CellView>,
    pub entries: Vec<EntryView>,
    pub lines: Vec<SolutionLine>,
}

impl RenderView {
    /// Collect render data, highlighting the word at `selected` if any
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle, selected: Option<usize>) -> Self {
        let grid = puzzle.grid();
        let (width, height) = grid.size();
        let mut cells: Vec<CellView> = grid
            .positions()
            .map(|p| CellView {
                letter: grid.display_char(p.x, p.y),
                in_word: false,
                selected: false,
            })
            .collect();

        let mut entries = Vec::with_capacity(puzzle.word_count());
        let mut lines = Vec::new();
        for (i, word) in puzzle.words().iter().enumerate() {
            let is_selected = selected == Some(i);
            for (p, _) in word.cells() {
                let cell = &mut cells[p.y * width + p.x];
                cell.in_word = true;
                cell.selected |= is_selected;
            }
            if let (Some(placement), Some(end)) = (word.placement(), word.end()) {
                lines.push(SolutionLine {
                    start: placement.origin,
                    end,
                    direction: placement.direction,
                    selected: is_selected,
                });
            }
            entries.push(EntryView {
                clue: word.clue().to_string(),
                text: word.text().to_string(),
                placement: word.placement(),
                selected: is_selected,
            });
        }

        Self {
            title: puzzle.title().to_string(),
            narrative: puzzle.narrative().to_string(),
            width,
            height,
            cells,
            entries,
            lines,
        }
    }

    /// Cell at `(x, y)`
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> CellView {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) is outside the view");
        self.cells[y * self.width + x]
    }

    /// Row `y` of cells
    ///
    /// # Panics
    /// Panics if `y` lies outside the grid.
    #[must_use]
    pub fn row(&self, y: usize) -> &[CellView] {
        assert!(y < self.height, "row {y} is outside the view");
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let config = RenderConfig::default();
        assert_eq!(config.word, Rgba::new(0.75, 0.0, 0.0, 0.3));
        assert_eq!(config.selected_word, Rgba::new(0.5, 0.0, 0.75, 0.6));
        assert!(!config.show_solution);
    }

    #[test]
    fn blending_over_white() {
        assert_eq!(Rgba::opaque(0.0, 0.0, 0.0).to_rgb8_over_white(), (0, 0, 0));
        assert_eq!(Rgba::new(0.0, 0.0, 0.0, 0.0).to_rgb8_over_white(), (255, 255, 255));
        assert_eq!(Rgba::new(1.0, 0.0, 0.0, 0.5).to_rgb8_over_white(), (255, 128, 128));
    }

    #[test]
    fn view_marks_word_cells_and_selection() {
        let mut puzzle = Puzzle::with_seed(8);
        puzzle.add_word("owl", None).unwrap();
        puzzle.add_word("bat", None).unwrap();

        let view = RenderView::from_puzzle(&puzzle, Some(1));
        assert_eq!(view.cells.len(), view.width * view.height);
        assert_eq!(view.lines.len(), 2);
        assert!(view.entries[1].selected);
        assert!(!view.entries[0].selected);

        let bat = puzzle.word(1).unwrap();
        for (p, letter) in bat.cells() {
            let cell = view.cell(p.x, p.y);
            assert!(cell.in_word && cell.selected);
            assert_eq!(cell.letter, char::from(letter));
        }
        let selected_cells = view.cells.iter().filter(|c| c.selected).count();
        assert_eq!(selected_cells, 3);
    }

    #[test]
    fn unplaced_words_have_no_line() {
        let mut puzzle = Puzzle::with_seed(8);
        puzzle.set_forced_size(2, 2).unwrap();
        let _ = puzzle.add_word("elephant", None);

        let view = RenderView::from_puzzle(&puzzle, None);
        assert!(view.lines.is_empty());
        assert_eq!(view.entries[0].placement, None);
        assert_eq!(view.row(1).len(), 2);
    }

    #[test]
    #[should_panic(expected = "row 2 is outside the view")]
    fn row_past_the_bottom_panics() {
        let mut puzzle = Puzzle::with_seed(8);
        puzzle.set_forced_size(3, 2).unwrap();
        let view = RenderView::from_puzzle(&puzzle, None);
        let _ = view.row(2);
    }
}
