//! Puzzle persistence
//!
//! Puzzles are stored as pretty-printed JSON documents. A document records
//! everything needed to rebuild the puzzle exactly: words with their clues
//! and placements, grid size, sizing mode, padding settings, title and
//! narrative. Random padding letters are regenerated on load.

use crate::core::{Grid, Placement, Word};
use crate::error::StorageError;
use crate::puzzle::Puzzle;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current document format version
pub const FORMAT_VERSION: u32 = 1;

/// A stored word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub text: String,
    pub clue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Serializable form of a [`Puzzle`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub version: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub narrative: String,
    pub grid: Dimensions,
    pub forced_size: bool,
    pub forced: Dimensions,
    #[serde(default)]
    pub hidden_message: String,
    pub random_padding: bool,
    pub words: Vec<WordRecord>,
}

impl PuzzleDocument {
    /// Capture the state of `puzzle`
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let (width, height) = puzzle.grid().size();
        let (forced_width, forced_height) = puzzle.forced_size();
        Self {
            version: FORMAT_VERSION,
            title: puzzle.title().to_string(),
            narrative: puzzle.narrative().to_string(),
            grid: Dimensions { width, height },
            forced_size: puzzle.is_forced_size(),
            forced: Dimensions {
                width: forced_width,
                height: forced_height,
            },
            hidden_message: puzzle.hidden_message().to_string(),
            random_padding: puzzle.random_padding(),
            words: puzzle
                .words()
                .iter()
                .map(|w| WordRecord {
                    text: w.text().to_string(),
                    clue: w.clue().to_string(),
                    placement: w.placement(),
                })
                .collect(),
        }
    }

    /// Rebuild a puzzle, replaying stored placements into `puzzle`
    ///
    /// `puzzle` should be freshly created; its random source is kept.
    ///
    /// # Errors
    /// Returns `StorageError::UnsupportedVersion` for an unknown format
    /// version and `StorageError::Invalid` for out-of-range grid dimensions.
    /// Stored placements that no longer fit cause a fresh placement search;
    /// if that search fails the puzzle is still returned.
    pub fn restore_into(self, mut puzzle: Puzzle) -> Result<Puzzle, StorageError> {
        if self.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(self.version));
        }
        puzzle.set_title(self.title);
        puzzle.set_narrative(self.narrative);

        let Dimensions { width, height } = self.forced;
        Grid::check_dimensions(width, height)?;
        puzzle.set_forced_dimensions(width, height, self.forced_size);

        let entries = self
            .words
            .into_iter()
            .map(|r| (Word::new(&r.text, Some(&r.clue)), r.placement))
            .collect();
        if let Err(e) = puzzle.restore_layout(self.grid.width, self.grid.height, entries) {
            if !e.is_placement_failure() {
                return Err(e.into());
            }
        }

        // Padding settings last so the hidden message sees the final layout
        puzzle.set_hidden_message(&self.hidden_message);
        puzzle.set_random_padding(self.random_padding);
        Ok(puzzle)
    }

    /// Rebuild a puzzle with a fresh random source
    ///
    /// # Errors
    /// See [`PuzzleDocument::restore_into`].
    pub fn into_puzzle(self) -> Result<Puzzle, StorageError> {
        self.restore_into(Puzzle::new())
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    /// Returns `StorageError::Format` for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns `StorageError::Format` if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Save `puzzle` to `path`
///
/// # Errors
/// Returns `StorageError::Io` if the file cannot be written.
pub fn save<P: AsRef<Path>>(puzzle: &Puzzle, path: P) -> Result<(), StorageError> {
    let path = path.as_ref();
    let json = PuzzleDocument::from_puzzle(puzzle).to_json()?;
    fs::write(path, json)?;
    info!("Saved puzzle with {} words to {}", puzzle.word_count(), path.display());
    Ok(())
}

/// Load a puzzle from `path`
///
/// # Errors
/// Returns `StorageError::Io` if the file cannot be read, `StorageError::Format`
/// for malformed content, or `StorageError::UnsupportedVersion`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Puzzle, StorageError> {
    load_into(path, Puzzle::new())
}

/// Load a puzzle from `path` into a freshly created `puzzle`
///
/// Useful with [`Puzzle::with_seed`] for reproducible runs.
///
/// # Errors
/// See [`load`].
pub fn load_into<P: AsRef<Path>>(path: P, puzzle: Puzzle) -> Result<Puzzle, StorageError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let puzzle = PuzzleDocument::from_json(&json)?.restore_into(puzzle)?;
    info!("Loaded puzzle with {} words from {}", puzzle.word_count(), path.display());
    Ok(puzzle)
}
