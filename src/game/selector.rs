//! Puzzle selection
//!
//! A corpus maps each category to its candidate phrases. Selection picks a
//! category uniformly, then a phrase uniformly within it.

use crate::core::{Category, Phrase};
use rand::Rng;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors building a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Puzzle corpus is empty")]
    Empty,
    #[error("Failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
}

/// The category and answer for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub category: Category,
    pub phrase: Phrase,
}

impl Puzzle {
    #[must_use]
    pub const fn new(category: Category, phrase: Phrase) -> Self {
        Self { category, phrase }
    }
}

/// Read-only category to phrase-list lookup
///
/// Never empty: construction fails without at least one phrase.
#[derive(Debug, Clone)]
pub struct Corpus {
    puzzles: BTreeMap<Category, Vec<Phrase>>,
}

impl Corpus {
    /// Build a corpus from (category, phrase) entries
    ///
    /// Duplicate phrases within a category are kept once.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if `entries` yields nothing.
    pub fn new(entries: impl IntoIterator<Item = (Category, Phrase)>) -> Result<Self, CorpusError> {
        let mut puzzles: BTreeMap<Category, Vec<Phrase>> = BTreeMap::new();
        for (category, phrase) in entries {
            let phrases = puzzles.entry(category).or_default();
            if !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }

        if puzzles.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { puzzles })
    }

    /// The built-in corpus compiled from `data/puzzles.txt`
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no embedded entry is valid.
    pub fn embedded() -> Result<Self, CorpusError> {
        Self::new(crate::corpus::loader::entries_from_slice(
            crate::corpus::PUZZLES,
        ))
    }

    /// Categories that have at least one phrase, in enum order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.puzzles.keys().copied()
    }

    /// Phrases for `category`, empty if it has none
    #[must_use]
    pub fn phrases(&self, category: Category) -> &[Phrase] {
        self.puzzles.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Total number of phrases
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.values().map(Vec::len).sum()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every (category, phrase) pair
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Phrase)> + '_ {
        self.puzzles
            .iter()
            .flat_map(|(&category, phrases)| phrases.iter().map(move |p| (category, p)))
    }

    /// Draw a random puzzle
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wheel_of_fortune::game::Corpus;
    ///
    /// let corpus = Corpus::embedded().unwrap();
    /// let puzzle = corpus.select_puzzle(&mut StdRng::seed_from_u64(1));
    /// assert!(corpus.phrases(puzzle.category).contains(&puzzle.phrase));
    /// ```
    pub fn select_puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let categories: Vec<(&Category, &Vec<Phrase>)> = self.puzzles.iter().collect();
        let index = rng.random_range(0..categories.len());
        let (&category, phrases) = categories[index];

        // Category lists are never empty
        let phrase = phrases[rng.random_range(0..phrases.len())].clone();

        log::debug!("Selected puzzle from {category}: {} letters", phrase.len());
        Puzzle::new(category, phrase)
    }
}
