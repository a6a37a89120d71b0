//! Automated player strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::{candidates, letter_tally};
use crate::game::{Corpus, Session};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// English letters from most to least common
pub const FREQUENCY_ORDER: [char; 26] = [
    'E', 'T', 'A', 'O', 'I', 'N', 'S', 'H', 'R', 'D', 'L', 'C', 'U', 'M', 'W', 'F', 'G', 'Y', 'P',
    'B', 'V', 'K', 'J', 'X', 'Q', 'Z',
];

/// What a bot does when it is asked to spin or solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Spin,
    Solve(String),
}

/// A policy for playing one seat
pub trait Strategy {
    /// Choose between spinning and solving
    fn decide(&self, session: &Session, corpus: &Corpus) -> Decision;

    /// Choose a letter after landing on cash
    ///
    /// Returns `None` only if no letters are left.
    fn pick_letter<R: Rng + ?Sized>(
        &self,
        session: &Session,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Narrows the corpus and solves once one phrase fits (default)
    Corpus(CorpusStrategy),
    /// Calls common English letters first, never solves
    Frequency(FrequencyStrategy),
    /// Calls random available letters, never solves
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn decide(&self, session: &Session, corpus: &Corpus) -> Decision {
        match self {
            Self::Corpus(s) => s.decide(session, corpus),
            Self::Frequency(s) => s.decide(session, corpus),
            Self::Random(s) => s.decide(session, corpus),
        }
    }

    fn pick_letter<R: Rng + ?Sized>(
        &self,
        session: &Session,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Option<char> {
        match self {
            Self::Corpus(s) => s.pick_letter(session, corpus, rng),
            Self::Frequency(s) => s.pick_letter(session, corpus, rng),
            Self::Random(s) => s.pick_letter(session, corpus, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "corpus", "frequency", "random".
    /// Defaults to corpus if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Corpus(CorpusStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Corpus(_) => "corpus",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Corpus(CorpusStrategy)
    }
}

fn most_frequent_available(session: &Session) -> Option<char> {
    FREQUENCY_ORDER
        .into_iter()
        .find(|&c| session.board().available().contains(c))
}

/// Corpus-aware strategy
///
/// Keeps the corpus phrases that still fit the board. Solves as soon as one
/// remains, otherwise calls the letter found in the most candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStrategy;

impl Strategy for CorpusStrategy {
    fn decide(&self, session: &Session, corpus: &Corpus) -> Decision {
        match candidates(session, corpus).as_slice() {
            [only] => Decision::Solve(only.text().to_string()),
            _ => Decision::Spin,
        }
    }

    fn pick_letter<R: Rng + ?Sized>(
        &self,
        session: &Session,
        corpus: &Corpus,
        _rng: &mut R,
    ) -> Option<char> {
        let remaining = candidates(session, corpus);
        let tally = letter_tally(&remaining, session.board());

        // Frequency order breaks ties and covers puzzles outside the corpus
        FREQUENCY_ORDER
            .into_iter()
            .filter(|&c| session.board().available().contains(c))
            .max_by_key(|c| (tally.get(c).copied().unwrap_or(0), std::cmp::Reverse(rank(*c))))
            .or_else(|| most_frequent_available(session))
    }
}

fn rank(letter: char) -> usize {
    FREQUENCY_ORDER
        .iter()
        .position(|&c| c == letter)
        .unwrap_or(FREQUENCY_ORDER.len())
}

/// Frequency strategy
///
/// Always spins and calls the most common English letter still available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn decide(&self, _session: &Session, _corpus: &Corpus) -> Decision {
        Decision::Spin
    }

    fn pick_letter<R: Rng + ?Sized>(
        &self,
        session: &Session,
        _corpus: &Corpus,
        _rng: &mut R,
    ) -> Option<char> {
        most_frequent_available(session)
    }
}

/// Random strategy
///
/// Always spins and calls a uniformly random available letter. Useful as a baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn decide(&self, _session: &Session, _corpus: &Corpus) -> Decision {
        Decision::Spin
    }

    fn pick_letter<R: Rng + ?Sized>(
        &self,
        session: &Session,
        _corpus: &Corpus,
        rng: &mut R,
    ) -> Option<char> {
        let letters: Vec<char> = session.board().available().iter().collect();
        letters.choose(rng).copied()
    }
}
