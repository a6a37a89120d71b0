//! Puzzle phrase representation
//!
//! A Phrase stores the uppercase answer text along with letter position indices for reveals.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Error type for invalid phrases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    #[error("Phrase must not be empty")]
    Empty,
    #[error("Phrase must contain at least one letter")]
    NoLetters,
    #[error("Phrase contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// An uppercase puzzle answer made of ASCII letters, spaces and apostrophes
///
/// Keeps a map of letter positions so reveals and occurrence counts don't rescan the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

impl Phrase {
    /// Create a new Phrase from a string
    ///
    /// The text is trimmed and uppercased before validation.
    ///
    /// # Errors
    /// Returns `PhraseError` if:
    /// - The trimmed text is empty
    /// - It contains no letters
    /// - It contains anything other than ASCII letters, spaces and apostrophes
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Phrase;
    ///
    /// let phrase = Phrase::new("hard day's work").unwrap();
    /// assert_eq!(phrase.text(), "HARD DAY'S WORK");
    ///
    /// assert!(Phrase::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, PhraseError> {
        let text = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(PhraseError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !is_phrase_char(c)) {
            return Err(PhraseError::InvalidCharacter(bad));
        }

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            if ch.is_ascii_uppercase() {
                letter_positions.entry(ch).or_default().push(i);
            }
        }

        if letter_positions.is_empty() {
            return Err(PhraseError::NoLetters);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the phrase as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, including spaces and apostrophes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a phrase holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get all positions where a letter appears (case-insensitive)
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        if !letter.is_ascii_alphabetic() {
            return &[];
        }
        self.letter_positions
            .get(&(letter.to_ascii_uppercase() as u8))
            .map_or(&[], Vec::as_slice)
    }

    /// Count how many times a letter appears (case-insensitive)
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.positions_of(letter).len()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Characters a phrase may contain once uppercased
#[inline]
#[must_use]
pub const fn is_phrase_char(c: char) -> bool {
    c.is_ascii_uppercase() || c == ' ' || c == '\''
}
