//! Command implementations

pub mod puzzles;
pub mod simple;
pub mod simulate;

pub use puzzles::corpus_summary;
pub use simple::{SimpleError, play_text_game, run_simple};
pub use simulate::{SimulateConfig, SimulationStats, run_simulation, simulate_game};
