//! Puzzle generation command
//!
//! Builds a puzzle from a word list and the layout options given on the
//! command line.

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;
use crate::wordlists::WordEntry;
use log::debug;

/// Configuration for generating a puzzle
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub entries: Vec<WordEntry>,
    pub title: Option<String>,
    pub narrative: Option<String>,
    /// Fill spare cells with this message instead of random letters
    pub hidden_message: Option<String>,
    /// Pin the grid to `(width, height)`
    pub size: Option<(usize, usize)>,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }
}

/// Result of generating a puzzle
pub struct GenerateResult {
    pub puzzle: Puzzle,
    /// Set when some words could not be placed
    pub placement_error: Option<PuzzleError>,
}

/// Build a puzzle from `config`
///
/// Words that cannot be placed stay in the word list and are reported through
/// `placement_error`.
///
/// # Errors
///
/// Returns an error if the forced size has a zero dimension.
pub fn generate_puzzle(config: GenerateConfig) -> Result<GenerateResult, PuzzleError> {
    let mut puzzle = config.seed.map_or_else(Puzzle::new, Puzzle::with_seed);

    if let Some(title) = config.title {
        puzzle.set_title(title);
    }
    if let Some(narrative) = config.narrative {
        puzzle.set_narrative(narrative);
    }
    if let Some((width, height)) = config.size {
        match puzzle.set_forced_size(width, height) {
            Err(e) if !e.is_placement_failure() => return Err(e),
            _ => {}
        }
    }

    let mut placement_error = None;
    for entry in &config.entries {
        match puzzle.add_word(&entry.text, entry.clue.as_deref()) {
            Ok(()) => placement_error = None,
            Err(e) if e.is_placement_failure() => placement_error = Some(e),
            Err(e) => return Err(e),
        }
    }

    if let Some(message) = config.hidden_message {
        puzzle.set_random_padding(false);
        puzzle.set_hidden_message(&message);
    }

    debug!(
        "Generated {}x{} puzzle with {} words",
        puzzle.grid().width(),
        puzzle.grid().height(),
        puzzle.word_count()
    );

    Ok(GenerateResult {
        puzzle,
        placement_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Layer;
    use crate::wordlists::loader::entries_from_slice;

    #[test]
    fn generates_complete_puzzle() {
        let mut config = GenerateConfig::new(entries_from_slice(&["lion", "tiger", "bear"]));
        config.title = Some("Big Cats".to_string());
        config.seed = Some(3);

        let result = generate_puzzle(config).unwrap();

        assert!(result.placement_error.is_none());
        assert_eq!(result.puzzle.word_count(), 3);
        assert!(result.puzzle.is_complete());
        assert_eq!(result.puzzle.title(), "Big Cats");
    }

    #[test]
    fn forced_size_failure_is_reported() {
        let mut config = GenerateConfig::new(entries_from_slice(&["elephant"]));
        config.size = Some((2, 2));
        config.seed = Some(4);

        let result = generate_puzzle(config).unwrap();

        assert!(
            result
                .placement_error
                .as_ref()
                .is_some_and(PuzzleError::is_placement_failure)
        );
        assert_eq!(result.puzzle.grid().size(), (2, 2));
    }

    #[test]
    fn zero_size_is_an_error() {
        let mut config = GenerateConfig::new(Vec::new());
        config.size = Some((0, 3));
        assert!(generate_puzzle(config).is_err());
    }

    #[test]
    fn hidden_message_replaces_random_padding() {
        let mut config = GenerateConfig::new(Vec::new());
        config.size = Some((3, 1));
        config.hidden_message = Some("Hey!".to_string());
        config.seed = Some(5);

        let result = generate_puzzle(config).unwrap();
        let grid = result.puzzle.grid();
        let padding: String = (0..3)
            .filter_map(|x| grid.get_cell(x, 0, Layer::Padding))
            .map(char::from)
            .collect();
        assert_eq!(padding, "hey");
        assert!(!result.puzzle.random_padding());
    }
}
