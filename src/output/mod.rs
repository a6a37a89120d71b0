//! Terminal output formatting
//!
//! Display utilities for game narration and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_corpus, print_simulation_stats, write_board, write_round, write_winner,
};
