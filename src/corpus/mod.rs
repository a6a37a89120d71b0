//! Puzzle corpus for Wheel of Fortune
//!
//! Provides the embedded corpus compiled into the binary and a loader for custom files.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT};
