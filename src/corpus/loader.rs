//! Puzzle corpus loading utilities
//!
//! Provides functions to load puzzles from files or use the embedded constants.

use crate::core::{Category, Phrase};
use crate::game::{Corpus, CorpusError};
use std::fs;
use std::path::Path;

/// Parse one `Category|PHRASE` line
///
/// Returns `None` for blank lines, `#` comments and malformed entries.
#[must_use]
pub fn parse_line(line: &str) -> Option<(Category, Phrase)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let Some((category, phrase)) = trimmed.split_once('|') else {
        log::warn!("Skipping corpus line without a category: {trimmed}");
        return None;
    };

    match (category.parse::<Category>(), Phrase::new(phrase)) {
        (Ok(category), Ok(phrase)) => Some((category, phrase)),
        (Err(e), _) => {
            log::warn!("Skipping corpus line {trimmed:?}: {e}");
            None
        }
        (_, Err(e)) => {
            log::warn!("Skipping corpus line {trimmed:?}: {e}");
            None
        }
    }
}

/// Load a corpus from a file
///
/// Invalid lines are skipped.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or
/// `CorpusError::Empty` if it holds no valid puzzles.
///
/// # Examples
/// ```no_run
/// use wheel_of_fortune::corpus::loader::load_from_file;
///
/// let corpus = load_from_file("data/puzzles.txt").unwrap();
/// println!("Loaded {} puzzles", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let content = fs::read_to_string(path.as_ref())?;
    let corpus = Corpus::new(content.lines().filter_map(parse_line))?;

    log::info!(
        "Loaded {} puzzles from {}",
        corpus.len(),
        path.as_ref().display()
    );
    Ok(corpus)
}

/// Convert embedded (category, phrase) pairs to corpus entries
///
/// # Examples
/// ```
/// use wheel_of_fortune::corpus::loader::entries_from_slice;
/// use wheel_of_fortune::corpus::PUZZLES;
///
/// let entries = entries_from_slice(PUZZLES);
/// assert_eq!(entries.len(), PUZZLES.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<(Category, Phrase)> {
    slice
        .iter()
        .filter_map(|&(category, phrase)| {
            Some((category.parse().ok()?, Phrase::new(phrase).ok()?))
        })
        .collect()
}
