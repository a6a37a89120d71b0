//! Player input validation
//!
//! Turns raw text into round choices and guesses before anything reaches the
//! game engine. Drivers show the error and prompt again.

use crate::game::AvailableLetters;
use thiserror::Error;

/// Why a line of input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter something")]
    Empty,
    #[error("You did not enter a number: {0:?}")]
    NotANumber(String),
    #[error("{0} is not a valid choice. Valid choices are Spin (1) or Guess (2)")]
    InvalidChoice(i64),
    #[error("Your guess must contain only letters, spaces and apostrophes")]
    DisallowedCharacters,
    #[error("{0} is not an available letter")]
    LetterUnavailable(char),
}

/// What the current player wants to do this round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Spin,
    Solve,
}

/// A validated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A single available letter, uppercased
    Letter(char),
    /// A whole-phrase attempt, uppercased and trimmed
    Phrase(String),
}

/// Parse the spin-or-solve prompt
///
/// Accepts `1`/`spin` and `2`/`guess`/`solve`, ignoring case.
///
/// # Errors
/// `InputError::Empty`, `InputError::NotANumber` or `InputError::InvalidChoice`.
///
/// # Examples
/// ```
/// use wheel_of_fortune::input::{Choice, parse_choice};
///
/// assert_eq!(parse_choice("1"), Ok(Choice::Spin));
/// assert_eq!(parse_choice("Solve"), Ok(Choice::Solve));
/// assert!(parse_choice("3").is_err());
/// ```
pub fn parse_choice(text: &str) -> Result<Choice, InputError> {
    let trimmed = text.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "spin" | "s" => Ok(Choice::Spin),
        "guess" | "solve" | "g" => Ok(Choice::Solve),
        other => match other.parse::<i64>() {
            Ok(1) => Ok(Choice::Spin),
            Ok(2) => Ok(Choice::Solve),
            Ok(n) => Err(InputError::InvalidChoice(n)),
            Err(_) => Err(InputError::NotANumber(trimmed.to_string())),
        },
    }
}

/// Characters accepted in a guess before normalization
#[must_use]
pub fn is_guess_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-')
}

/// Parse a letter or whole-phrase guess
///
/// A single character is a letter guess and must still be available.
/// Anything longer is a phrase guess.
///
/// # Errors
/// `InputError::Empty`, `InputError::DisallowedCharacters` or
/// `InputError::LetterUnavailable`.
pub fn parse_guess(text: &str, available: &AvailableLetters) -> Result<Guess, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if !trimmed.chars().all(is_guess_char) {
        return Err(InputError::DisallowedCharacters);
    }

    let upper = trimmed.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => {
            if available.contains(letter) {
                Ok(Guess::Letter(letter))
            } else {
                Err(InputError::LetterUnavailable(letter))
            }
        }
        _ => Ok(Guess::Phrase(upper)),
    }
}

/// Parse a whole-phrase attempt
///
/// Any length is accepted, including a single letter, since the letter pool
/// doesn't apply to solving.
///
/// # Errors
/// `InputError::Empty` or `InputError::DisallowedCharacters`.
pub fn parse_solve(text: &str) -> Result<String, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if !trimmed.chars().all(is_guess_char) {
        return Err(InputError::DisallowedCharacters);
    }
    Ok(trimmed.to_uppercase())
}

/// Parse a guess that must be a single available letter
///
/// # Errors
/// Same as `parse_guess`; a multi-character guess is `DisallowedCharacters`.
pub fn parse_letter(text: &str, available: &AvailableLetters) -> Result<char, InputError> {
    match parse_guess(text, available)? {
        Guess::Letter(letter) => Ok(letter),
        Guess::Phrase(_) => Err(InputError::DisallowedCharacters),
    }
}
