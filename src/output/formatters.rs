//! Formatting utilities for terminal output

use crate::core::Player;
use crate::game::{Ledger, RoundEvent, RoundReport, Wedge, Winner};

/// One-line narration of a resolved round
#[must_use]
pub fn describe_round(report: &RoundReport) -> String {
    let player = report.player;
    match &report.event {
        RoundEvent::LostTurn => format!("{player} landed on '{}'!", Wedge::LoseTurn),
        RoundEvent::Penalized(change) => format!(
            "{player} landed on '{}'! Balance ${} -> ${}",
            Wedge::LoseTurnAndPenalty,
            change.before,
            change.after
        ),
        RoundEvent::LetterFound {
            letter,
            occurrences,
            credited,
        } => format!("{letter} occurs {occurrences} time(s)! {player} earns ${credited}"),
        RoundEvent::LetterMissing { letter } => format!("{letter} is incorrect!"),
        RoundEvent::Solved { guess } => {
            format!("{guess} is correct! {player} solved the puzzle!")
        }
        RoundEvent::WrongSolve { guess } => format!("{guess} is incorrect!"),
    }
}

/// Winner announcement lines
#[must_use]
pub fn winner_banner(winner: Winner, phrase: &str) -> [String; 2] {
    [
        format!("********** Solved puzzle: {phrase} **********"),
        format!(
            "********** {}, YOU WON! Your total earnings are: ${} **********",
            winner.player, winner.earnings
        ),
    ]
}

/// Every player's balance on one line, current player marked
#[must_use]
pub fn standings_line(ledger: &Ledger, current: Player) -> String {
    ledger
        .standings()
        .into_iter()
        .map(|(player, balance)| {
            let marker = if player == current { "▶ " } else { "" };
            format!("{marker}{player}: ${balance}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
