//! Plain-text export
//!
//! Dumps the title, narrative, grid and word list in a layout suitable for
//! a text file or a terminal without colour.

use crate::puzzle::Puzzle;
use std::fmt::Write;

/// Which sections to include in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Independent section switches
pub struct ExportOptions {
    /// Title and narrative
    pub show_title: bool,
    pub show_grid: bool,
    pub show_words: bool,
    /// Append each word's location to the word list
    pub show_solution: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            show_title: true,
            show_grid: true,
            show_words: true,
            show_solution: false,
        }
    }
}

/// Render the puzzle as plain text
///
/// Layout:
/// - the title underlined with `=`, then a blank line
/// - the narrative, then a blank line
/// - one line per grid row, letters separated by spaces, then a blank line
/// - one line per word: the clue, followed by `(x,y)` or `(unplaced)` when
///   the solution is shown; the word itself is added as `(word,x,y)` when it
///   differs from the clue. Coordinates are 1-based.
///
/// # Examples
/// ```
/// use findthatword::export::{ExportOptions, to_text};
/// use findthatword::puzzle::Puzzle;
///
/// let mut puzzle = Puzzle::with_seed(1);
/// puzzle.set_title("Zoo");
/// let options = ExportOptions { show_grid: false, ..ExportOptions::default() };
/// assert_eq!(to_text(&puzzle, &options), "Zoo\n===\n\n");
/// ```
#[must_use]
pub fn to_text(puzzle: &Puzzle, options: &ExportOptions) -> String {
    let mut out = String::new();

    if options.show_title && !puzzle.title().is_empty() {
        let title = puzzle.title();
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
        out.push('\n');
    }

    if options.show_title && !puzzle.narrative().is_empty() {
        let _ = writeln!(out, "{}", puzzle.narrative());
        out.push('\n');
    }

    if options.show_grid {
        let grid = puzzle.grid();
        for y in 0..grid.height() {
            let row: Vec<String> = (0..grid.width())
                .map(|x| grid.display_char(x, y).to_string())
                .collect();
            let _ = writeln!(out, "{}", row.join(" ").trim_end());
        }
        out.push('\n');
    }

    if options.show_words {
        for word in puzzle.words() {
            out.push_str(word.clue());
            if options.show_solution {
                out.push('(');
                if word.clue() != word.text() {
                    let _ = write!(out, "{},", word.text());
                }
                match word.placement() {
                    Some(p) => {
                        let _ = write!(out, "{},{}", p.origin.x + 1, p.origin.y + 1);
                    }
                    None => out.push_str("unplaced"),
                }
                out.push(')');
            }
            out.push('\n');
        }
    }

    out
}
