//! Automated players
//!
//! Strategies that play a seat without human input, used by the simulator.

pub mod autoplay;
pub mod candidates;
pub mod strategy;

pub use autoplay::{GameRecord, play_game, play_round};
pub use strategy::{
    CorpusStrategy, Decision, FrequencyStrategy, RandomStrategy, Strategy, StrategyType,
};
