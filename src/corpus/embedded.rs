//! Embedded puzzle corpus
//!
//! Puzzles compiled into the binary at build time.

// Include generated corpus from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
