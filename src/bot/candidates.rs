//! Candidate filtering against the board
//!
//! A corpus phrase is still a candidate when it agrees with every revealed
//! cell and every hidden cell could still hold an uncalled letter.

use crate::core::Phrase;
use crate::game::{Board, Corpus, Session};
use rustc_hash::FxHashMap;

/// Check whether `phrase` is consistent with the current board
#[must_use]
pub fn matches_board(phrase: &Phrase, board: &Board) -> bool {
    let pattern = board.pattern();
    if phrase.len() != pattern.len() {
        return false;
    }

    phrase
        .text()
        .chars()
        .zip(pattern)
        .all(|(actual, shown)| match shown {
            Some(c) => c == actual,
            // Hidden cells hold letters nobody has called yet
            None => board.available().contains(actual),
        })
}

/// Corpus phrases in the session's category that fit the board
#[must_use]
pub fn candidates<'a>(session: &Session, corpus: &'a Corpus) -> Vec<&'a Phrase> {
    corpus
        .phrases(session.puzzle().category)
        .iter()
        .filter(|phrase| matches_board(phrase, session.board()))
        .collect()
}

/// For each uncalled letter, how many candidates contain it in a hidden cell
#[must_use]
pub fn letter_tally(candidates: &[&Phrase], board: &Board) -> FxHashMap<char, usize> {
    let pattern = board.pattern();
    let mut tally: FxHashMap<char, usize> = FxHashMap::default();
    for phrase in candidates {
        let mut seen = [false; 26];
        for (c, shown) in phrase.text().chars().zip(&pattern) {
            if shown.is_none() && c.is_ascii_uppercase() {
                let slot = (c as u8 - b'A') as usize;
                if !seen[slot] {
                    seen[slot] = true;
                    *tally.entry(c).or_insert(0) += 1;
                }
            }
        }
    }
    tally
}
