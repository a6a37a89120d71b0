//! Corpus inspection

use crate::core::Category;
use crate::game::Corpus;

/// Puzzle counts per category, in category order
#[must_use]
pub fn corpus_summary(corpus: &Corpus) -> Vec<(Category, usize)> {
    corpus
        .categories()
        .map(|category| (category, corpus.phrases(category).len()))
        .collect()
}
