//! Word list loading utilities
//!
//! A word list file holds one entry per line, either `word` or
//! `word|clue`. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// A word and its optional clue, as read from a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub clue: Option<String>,
}

impl WordEntry {
    #[must_use]
    pub fn new(text: impl Into<String>, clue: Option<String>) -> Self {
        Self {
            text: text.into(),
            clue,
        }
    }

    /// Parse one list line, `None` for blanks and comments
    ///
    /// # Examples
    /// ```
    /// use findthatword::wordlists::WordEntry;
    ///
    /// let entry = WordEntry::parse("owl | Night hunter").unwrap();
    /// assert_eq!(entry.text, "owl");
    /// assert_eq!(entry.clue.as_deref(), Some("Night hunter"));
    /// assert!(WordEntry::parse("# comment").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let (text, clue) = match trimmed.split_once('|') {
            Some((text, clue)) => (text.trim(), Some(clue.trim())),
            None => (trimmed, None),
        };
        if text.is_empty() {
            return None;
        }
        Some(Self::new(
            text,
            clue.filter(|c| !c.is_empty()).map(str::to_string),
        ))
    }
}

/// Parse every entry of a word list
#[must_use]
pub fn parse_entries(content: &str) -> Vec<WordEntry> {
    content.lines().filter_map(WordEntry::parse).collect()
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use findthatword::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("animals.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Convert embedded string slice to entries without clues
#[must_use]
pub fn entries_from_slice(slice: &[&str]) -> Vec<WordEntry> {
    slice.iter().map(|&s| WordEntry::new(s, None)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_words_and_clues() {
        let entries = parse_entries("cat\ndog | Barks\n\n# skip me\n  emu  \n");
        assert_eq!(
            entries,
            vec![
                WordEntry::new("cat", None),
                WordEntry::new("dog", Some("Barks".to_string())),
                WordEntry::new("emu", None),
            ]
        );
    }

    #[test]
    fn empty_clue_is_none() {
        assert_eq!(WordEntry::parse("yak|"), Some(WordEntry::new("yak", None)));
        assert_eq!(WordEntry::parse("|lonely clue"), None);
    }

    #[test]
    fn entries_from_slice_keeps_order() {
        let entries = entries_from_slice(&["crane", "slate"]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "slate");
        assert!(entries.iter().all(|e| e.clue.is_none()));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heron|Wading bird").unwrap();
        writeln!(file, "stork").unwrap();

        let entries = load_from_file(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].clue.as_deref(), Some("Wading bird"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
