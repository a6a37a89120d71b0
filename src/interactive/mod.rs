//! Interactive TUI interface
//!
//! Full-screen three-player game built on ratatui.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, run_tui};
