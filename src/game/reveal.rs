//! Puzzle board: masked phrase, reveal merging and letter availability
//!
//! The board is laid out the way it is printed: every phrase character is
//! followed by a blank separator cell, so `PIECE` renders as `_ _ _ _ _ `.
//! Spaces and apostrophes are visible from the start.

use crate::core::{ALPHABET, Phrase};
use std::fmt;

/// Glyph shown for a letter that hasn't been revealed
pub const PLACEHOLDER: char = '_';

/// One board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Letter not yet revealed
    Hidden,
    /// Revealed letter, or punctuation and spacing that is always shown
    Visible(char),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Character drawn on the board
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hidden => PLACEHOLDER,
            Self::Visible(c) => c,
        }
    }
}

/// Build the board mask for `phrase` with exactly the letters in `revealed` shown
///
/// Passing an empty slice produces the starting board.
#[must_use]
pub fn mask(phrase: &Phrase, revealed: &[char]) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(phrase.len() * 2);
    for c in phrase.text().chars() {
        let cell = if !c.is_ascii_alphabetic() || revealed.contains(&c) {
            Cell::Visible(c)
        } else {
            Cell::Hidden
        };
        cells.push(cell);
        cells.push(Cell::Visible(' '));
    }
    cells
}

/// Merge a freshly computed mask into the prior board state
///
/// A hidden cell in `prior` is promoted when the same cell is visible in
/// `fresh`. Visible cells in `prior` are never touched, so the merge is
/// monotonic and idempotent: `merge(merge(a, f), f) == merge(a, f)`.
///
/// Returns the number of cells that were promoted.
///
/// # Panics
/// Panics in debug mode if the masks have different lengths.
pub fn merge(prior: &mut [Cell], fresh: &[Cell]) -> usize {
    debug_assert_eq!(prior.len(), fresh.len(), "masks must have equal length");

    let mut promoted = 0;
    for (old, new) in prior.iter_mut().zip(fresh) {
        if old.is_hidden() && !new.is_hidden() {
            *old = *new;
            promoted += 1;
        }
    }
    promoted
}

/// Letters nobody has called yet this puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableLetters {
    remaining: [bool; 26],
}

impl AvailableLetters {
    /// All 26 letters available
    #[must_use]
    pub const fn full() -> Self {
        Self {
            remaining: [true; 26],
        }
    }

    fn slot(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| (letter.to_ascii_uppercase() as u8 - b'A') as usize)
    }

    /// Whether `letter` can still be called (case-insensitive)
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        Self::slot(letter).is_some_and(|i| self.remaining[i])
    }

    /// Remove `letter`; returns false if it was already gone or isn't a letter
    pub fn remove(&mut self, letter: char) -> bool {
        match Self::slot(letter) {
            Some(i) if self.remaining[i] => {
                self.remaining[i] = false;
                true
            }
            _ => false,
        }
    }

    /// Number of letters still available
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.iter().filter(|&&r| r).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Available letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ALPHABET
            .into_iter()
            .zip(self.remaining)
            .filter_map(|(c, available)| available.then_some(c))
    }
}

impl Default for AvailableLetters {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for AvailableLetters {
    /// Space-separated alphabet with used letters blanked so columns stay fixed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (c, available)) in ALPHABET.into_iter().zip(self.remaining).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", if available { c } else { ' ' })?;
        }
        Ok(())
    }
}

/// Reveal engine for one puzzle
#[derive(Debug, Clone)]
pub struct Board {
    phrase: Phrase,
    cells: Vec<Cell>,
    available: AvailableLetters,
}

impl Board {
    /// Start a board with every letter hidden and every letter available
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Phrase;
    /// use wheel_of_fortune::game::Board;
    ///
    /// let board = Board::new(Phrase::new("HARD DAY'S WORK").unwrap());
    /// assert_eq!(board.render(), "_ _ _ _   _ _ _ ' _   _ _ _ _ ");
    /// ```
    #[must_use]
    pub fn new(phrase: Phrase) -> Self {
        let cells = mask(&phrase, &[]);
        Self {
            phrase,
            cells,
            available: AvailableLetters::full(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub const fn available(&self) -> &AvailableLetters {
        &self.available
    }

    /// Reveal every position holding `letter`
    ///
    /// Already revealed positions are left alone. Returns how many cells were newly shown.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        if !letter.is_ascii_alphabetic() {
            return 0;
        }
        let fresh = mask(&self.phrase, &[letter.to_ascii_uppercase()]);
        merge(&mut self.cells, &fresh)
    }

    /// Number of times `letter` appears in the answer
    #[inline]
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.phrase.count_of(letter)
    }

    #[inline]
    #[must_use]
    pub fn letter_exists(&self, letter: char) -> bool {
        self.occurrences(letter) > 0
    }

    /// Mark `letter` as called, whether or not it is in the answer
    ///
    /// Calling an already used letter is a no-op and returns false.
    pub fn remove_letter_from_available(&mut self, letter: char) -> bool {
        self.available.remove(letter)
    }

    /// True when `candidate` matches the answer or every letter is on the board
    ///
    /// The candidate comparison trims and ignores case. The board comparison
    /// strips all whitespace from both sides.
    #[must_use]
    pub fn is_solved(&self, candidate: &str) -> bool {
        candidate.trim().eq_ignore_ascii_case(self.phrase.text()) || self.is_fully_revealed()
    }

    /// True once the rendered board equals the answer, ignoring whitespace
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        strip_whitespace(&self.render()) == strip_whitespace(self.phrase.text())
    }

    /// Number of letter cells still hidden
    #[must_use]
    pub fn hidden_letters(&self) -> usize {
        self.cells.iter().filter(|c| c.is_hidden()).count()
    }

    /// Board as printed, with `_` for hidden letters
    #[must_use]
    pub fn render(&self) -> String {
        self.cells.iter().map(|c| c.glyph()).collect()
    }

    /// Board with separators dropped: one char per phrase position
    ///
    /// Hidden letters are `None`. Used for matching the board against candidate phrases.
    #[must_use]
    pub fn pattern(&self) -> Vec<Option<char>> {
        self.cells
            .iter()
            .step_by(2)
            .map(|c| match c {
                Cell::Hidden => None,
                Cell::Visible(ch) => Some(*ch),
            })
            .collect()
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::new(Phrase::new(text).unwrap())
    }

    #[test]
    fn new_board_hides_letters_only() {
        let b = board("PLEASE DON'T STOP");
        assert_eq!(b.render(), "_ _ _ _ _ _   _ _ _ ' _   _ _ _ _ ");
        assert_eq!(b.cells().len(), "PLEASE DON'T STOP".len() * 2);
        assert_eq!(b.hidden_letters(), 14);
    }

    #[test]
    fn reveal_letter_shows_all_occurrences() {
        let mut b = board("PIECE OF CAKE");
        assert_eq!(b.reveal_letter('E'), 3);
        assert_eq!(b.render(), "_ _ E _ E   _ _   _ _ _ E ");
    }

    #[test]
    fn reveal_letter_is_case_insensitive() {
        let mut b = board("PIECE OF CAKE");
        assert_eq!(b.reveal_letter('c'), 2);
        assert_eq!(b.render(), "_ _ _ C _   _ _   C _ _ _ ");
    }

    #[test]
    fn reveal_keeps_earlier_letters() {
        let mut b = board("PIECE OF CAKE");
        b.reveal_letter('E');
        b.reveal_letter('C');
        b.reveal_letter('Z');
        assert_eq!(b.render(), "_ _ E C E   _ _   C _ _ E ");
    }

    #[test]
    fn reveal_is_monotonic_over_any_sequence() {
        let mut b = board("GRAND CANYON NATIONAL PARK");
        let mut previous = b.cells().to_vec();
        for letter in ['N', 'A', 'Q', 'N', 'R', 'O', 'A', 'K'] {
            b.reveal_letter(letter);
            for (old, new) in previous.iter().zip(b.cells()) {
                if !old.is_hidden() {
                    assert_eq!(old, new, "visible cell changed after revealing {letter}");
                }
            }
            previous = b.cells().to_vec();
        }
    }

    #[test]
    fn reveal_same_letter_twice_is_idempotent() {
        let mut b = board("PIECE OF CAKE");
        assert_eq!(b.reveal_letter('E'), 3);
        let once = b.render();
        assert_eq!(b.reveal_letter('E'), 0);
        assert_eq!(b.render(), once);
    }

    #[test]
    fn reveal_ignores_non_letters() {
        let mut b = board("HARD DAY'S WORK");
        assert_eq!(b.reveal_letter('\''), 0);
        assert_eq!(b.reveal_letter(' '), 0);
    }

    #[test]
    fn merge_promotes_only_hidden_cells() {
        let mut prior = vec![Cell::Visible('A'), Cell::Hidden, Cell::Hidden];
        let fresh = vec![Cell::Hidden, Cell::Visible('B'), Cell::Hidden];
        assert_eq!(merge(&mut prior, &fresh), 1);
        assert_eq!(
            prior,
            vec![Cell::Visible('A'), Cell::Visible('B'), Cell::Hidden]
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let phrase = Phrase::new("BOWL OF RAMEN NOODLES").unwrap();
        let fresh = mask(&phrase, &['O']);

        let mut once = mask(&phrase, &['L']);
        merge(&mut once, &fresh);
        let mut twice = once.clone();
        assert_eq!(merge(&mut twice, &fresh), 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn occurrences_counts_literal_letters() {
        let b = board("PIECE OF CAKE");
        assert_eq!(b.occurrences('E'), 3);
        assert_eq!(b.occurrences('K'), 1);
        assert_eq!(b.occurrences('Z'), 0);
        assert!(b.letter_exists('P'));
        assert!(!b.letter_exists('Z'));
    }

    #[test]
    fn is_solved_by_exact_guess() {
        let b = board("PIECE OF CAKE");
        assert!(b.is_solved("PIECE OF CAKE"));
        assert!(b.is_solved("  piece of cake "));
        assert!(!b.is_solved("PIECE OF PIE"));
        assert!(!b.is_solved("PIECEOFCAKE"));
    }

    #[test]
    fn is_solved_when_every_letter_revealed() {
        let mut b = board("AIR FORCE BASE");
        for letter in ['A', 'I', 'R', 'F', 'O', 'C', 'E', 'B'] {
            b.reveal_letter(letter);
            assert!(!b.is_solved(""));
        }
        b.reveal_letter('S');
        assert!(b.is_fully_revealed());
        assert!(b.is_solved(""));
        assert!(b.is_solved("WRONG ANSWER"));
        assert_eq!(b.hidden_letters(), 0);
    }

    #[test]
    fn is_solved_with_apostrophes_revealed_up_front() {
        let mut b = board("HARD DAY'S WORK");
        for letter in ['H', 'A', 'R', 'D', 'Y', 'S', 'W', 'O'] {
            b.reveal_letter(letter);
        }
        assert!(!b.is_fully_revealed());
        b.reveal_letter('K');
        assert!(b.is_fully_revealed());
    }

    #[test]
    fn available_letters_shrink_once_per_letter() {
        let mut b = board("PIECE OF CAKE");
        assert_eq!(b.available().len(), 26);
        assert!(b.remove_letter_from_available('z'));
        assert!(!b.remove_letter_from_available('Z'));
        assert!(b.remove_letter_from_available('E'));
        assert_eq!(b.available().len(), 24);
        assert!(!b.available().contains('Z'));
        assert!(b.available().contains('a'));
    }

    #[test]
    fn available_letters_ignore_non_letters() {
        let mut letters = AvailableLetters::full();
        assert!(!letters.remove('\''));
        assert!(!letters.contains('1'));
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn available_letters_display_blanks_used() {
        let mut letters = AvailableLetters::full();
        assert_eq!(
            letters.to_string(),
            "A B C D E F G H I J K L M N O P Q R S T U V W X Y Z"
        );
        letters.remove('B');
        letters.remove('Z');
        assert_eq!(
            letters.to_string(),
            "A   C D E F G H I J K L M N O P Q R S T U V W X Y  "
        );
        assert_eq!(letters.iter().count(), 24);
        assert_eq!(letters.iter().next(), Some('A'));
    }

    #[test]
    fn pattern_drops_separators() {
        let mut b = board("AIR BASE");
        b.reveal_letter('A');
        assert_eq!(
            b.pattern(),
            vec![
                Some('A'),
                None,
                None,
                Some(' '),
                None,
                Some('A'),
                None,
                None
            ]
        );
    }
}
