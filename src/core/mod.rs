//! Core domain types for Wheel of Fortune
//!
//! Plain value types shared by the game engine, the drivers and the bots.

mod category;
mod phrase;
mod player;

pub use category::{Category, CategoryError};
pub use phrase::{Phrase, PhraseError, is_phrase_char};
pub use player::{Player, rotate};

/// Alphabet in board order
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
