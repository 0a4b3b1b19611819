//! Puzzle editing command
//!
//! Applies a single change to a saved puzzle.

use crate::error::PuzzleError;
use crate::puzzle::{MoveDirection, Puzzle};

/// A single edit to a puzzle
///
/// Word indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Add { text: String, clue: Option<String> },
    Delete { index: usize },
    Update { index: usize, text: String, clue: Option<String> },
    Move { index: usize, direction: MoveDirection },
    Sort,
    /// Force the grid to a size, or return to automatic sizing with `None`
    Resize { size: Option<(usize, usize)> },
    /// Use a hidden message, or random padding with `None`
    HiddenMessage { message: Option<String> },
    Title { title: String },
    Narrative { narrative: String },
    /// Re-run the placement search for a fresh layout
    Shuffle,
}

/// Result of applying an edit
#[derive(Debug)]
pub struct EditOutcome {
    /// Human-readable summary of what changed
    pub summary: String,
    /// Set when the edit left some words unplaced
    pub placement_error: Option<PuzzleError>,
}

/// Apply `action` to `puzzle`
///
/// Placement failures do not abort the edit; they are returned in the
/// outcome so the caller can still save the changed puzzle.
///
/// # Errors
///
/// Returns an error for a bad word index or a zero grid dimension.
pub fn apply_edit(puzzle: &mut Puzzle, action: EditAction) -> Result<EditOutcome, PuzzleError> {
    let (summary, result) = match action {
        EditAction::Add { text, clue } => {
            let result = puzzle.add_word(&text, clue.as_deref());
            (format!("Added '{text}'"), result)
        }
        EditAction::Delete { index } => {
            let text = word_text(puzzle, index)?;
            (format!("Deleted '{text}'"), puzzle.delete_word(index))
        }
        EditAction::Update { index, text, clue } => {
            let old = word_text(puzzle, index)?;
            let result = puzzle.update_word(index, &text, clue.as_deref());
            (format!("Updated '{old}' to '{text}'"), result)
        }
        EditAction::Move { index, direction } => {
            let text = word_text(puzzle, index)?;
            let new_index = puzzle.move_word(index, direction)?;
            (format!("Moved '{text}' to position {}", new_index + 1), Ok(()))
        }
        EditAction::Sort => {
            puzzle.sort_words();
            ("Sorted word list".to_string(), Ok(()))
        }
        EditAction::Resize { size: Some((width, height)) } => {
            let result = puzzle.set_forced_size(width, height);
            (format!("Forced grid size to {width}x{height}"), result)
        }
        EditAction::Resize { size: None } => {
            let result = puzzle.set_is_forced_size(false);
            ("Switched to automatic grid size".to_string(), result)
        }
        EditAction::HiddenMessage { message: Some(message) } => {
            puzzle.set_hidden_message(&message);
            puzzle.set_random_padding(false);
            (format!("Hidden message set to '{message}'"), Ok(()))
        }
        EditAction::HiddenMessage { message: None } => {
            puzzle.set_random_padding(true);
            ("Switched to random padding".to_string(), Ok(()))
        }
        EditAction::Title { title } => {
            let summary = format!("Title set to '{title}'");
            puzzle.set_title(title);
            (summary, Ok(()))
        }
        EditAction::Narrative { narrative } => {
            puzzle.set_narrative(narrative);
            ("Narrative updated".to_string(), Ok(()))
        }
        EditAction::Shuffle => ("Re-placed all words".to_string(), puzzle.populate_grid()),
    };

    match result {
        Ok(()) => Ok(EditOutcome {
            summary,
            placement_error: None,
        }),
        Err(e) if e.is_placement_failure() => Ok(EditOutcome {
            summary,
            placement_error: Some(e),
        }),
        Err(e) => Err(e),
    }
}

fn word_text(puzzle: &Puzzle, index: usize) -> Result<String, PuzzleError> {
    puzzle
        .word(index)
        .map(|w| w.text().to_string())
        .ok_or(PuzzleError::NoSuchWord {
            index,
            len: puzzle.word_count(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        let mut puzzle = Puzzle::with_seed(12);
        for word in ["hen", "cow", "pig"] {
            puzzle.add_word(word, None).unwrap();
        }
        puzzle
    }

    #[test]
    fn add_and_delete() {
        let mut puzzle = puzzle();
        let outcome = apply_edit(
            &mut puzzle,
            EditAction::Add {
                text: "goat".to_string(),
                clue: Some("Kid's parent".to_string()),
            },
        )
        .unwrap();
        assert_eq!(outcome.summary, "Added 'goat'");
        assert_eq!(puzzle.word_count(), 4);
        assert_eq!(puzzle.word(3).unwrap().clue(), "Kid's parent");

        apply_edit(&mut puzzle, EditAction::Delete { index: 0 }).unwrap();
        assert_eq!(puzzle.word(0).unwrap().text(), "cow");
        assert!(puzzle.is_complete());
    }

    #[test]
    fn bad_index_is_an_error() {
        let mut puzzle = puzzle();
        let err = apply_edit(&mut puzzle, EditAction::Delete { index: 9 }).unwrap_err();
        assert_eq!(err, PuzzleError::NoSuchWord { index: 9, len: 3 });
    }

    #[test]
    fn move_reports_new_position() {
        let mut puzzle = puzzle();
        let outcome = apply_edit(
            &mut puzzle,
            EditAction::Move {
                index: 2,
                direction: MoveDirection::Up,
            },
        )
        .unwrap();
        assert_eq!(outcome.summary, "Moved 'pig' to position 2");
    }

    #[test]
    fn forcing_too_small_keeps_edit() {
        let mut puzzle = puzzle();
        let outcome = apply_edit(
            &mut puzzle,
            EditAction::Resize {
                size: Some((2, 2)),
            },
        )
        .unwrap();
        assert!(outcome.placement_error.is_some());
        assert!(puzzle.is_forced_size());

        let outcome = apply_edit(&mut puzzle, EditAction::Resize { size: None }).unwrap();
        assert!(outcome.placement_error.is_none());
        assert!(puzzle.is_complete());
    }

    #[test]
    fn hidden_message_toggle() {
        let mut puzzle = puzzle();
        apply_edit(
            &mut puzzle,
            EditAction::HiddenMessage {
                message: Some("moo".to_string()),
            },
        )
        .unwrap();
        assert!(!puzzle.random_padding());
        assert_eq!(puzzle.hidden_message(), "moo");

        apply_edit(&mut puzzle, EditAction::HiddenMessage { message: None }).unwrap();
        assert!(puzzle.random_padding());
    }
}
