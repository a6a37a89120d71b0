//! Wheel of Fortune
//!
//! A three-player Wheel of Fortune game: puzzle selection, letter reveals,
//! a cash wheel and a per-player ledger, with text, TUI and simulation front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wheel_of_fortune::core::{Category, Phrase, Player};
//! use wheel_of_fortune::game::{Puzzle, Session, SpinResult, Wedge};
//!
//! let puzzle = Puzzle::new(Category::Food, Phrase::new("PIECE OF CAKE").unwrap());
//! let mut session = Session::new(puzzle);
//!
//! // Land on $300 and call E
//! assert_eq!(session.spin(Wedge::Cash(300)).unwrap(), SpinResult::AwaitingLetter(300));
//! let report = session.guess_letter('E').unwrap();
//! assert_eq!(report.next, Player::One);
//! assert_eq!(session.ledger().earnings(Player::One), 900);
//! println!("{}", session.board().render());
//! ```

// Core domain types
pub mod core;

// Game engine: ledger, reveal, selector, wheel and turn coordination
pub mod game;

// Puzzle corpus
pub mod corpus;

// Player input validation
pub mod input;

// Automated players
pub mod bot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
