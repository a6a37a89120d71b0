//! Display functions for games and command results

use super::formatters::{create_progress_bar, describe_round, standings_line, winner_banner};
use crate::commands::{SimulationStats, corpus_summary};
use crate::core::Player;
use crate::game::{Corpus, RoundEvent, RoundReport, Session, Winner};
use colored::Colorize;
use std::io::{self, Write};

/// Write the available letters, the category, the board and the standings
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let board = session.board();
    writeln!(out)?;
    writeln!(out, "Available letters: {}", board.available())?;
    writeln!(
        out,
        "{}",
        format!("Here is the puzzle ({}):", session.puzzle().category).bright_cyan()
    )?;
    writeln!(out, "{}", board.render().bright_white().bold())?;
    writeln!(
        out,
        "{}",
        standings_line(session.ledger(), session.current_player())
    )
}

/// Write the narration for one resolved round
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_round<W: Write>(out: &mut W, report: &RoundReport) -> io::Result<()> {
    let line = describe_round(report);
    let line = match report.event {
        RoundEvent::LetterFound { .. } | RoundEvent::Solved { .. } => line.green(),
        RoundEvent::LetterMissing { .. } | RoundEvent::WrongSolve { .. } => line.red(),
        RoundEvent::LostTurn | RoundEvent::Penalized(_) => line.yellow(),
    };
    writeln!(out, "{line}")?;
    if report.winner.is_none() && report.next != report.player {
        writeln!(out, "It is now {}'s turn.", report.next)?;
    }
    Ok(())
}

/// Write the winner banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_winner<W: Write>(out: &mut W, winner: Winner, phrase: &str) -> io::Result<()> {
    writeln!(out)?;
    for line in winner_banner(winner, phrase) {
        writeln!(out, "{}", line.bright_green().bold())?;
    }
    writeln!(out)
}

/// Print the aggregate results of a simulation
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", stats.strategy);
    println!("   Games played:     {}", stats.total_games);
    println!("   Games finished:   {}", stats.finished);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Fewest rounds:    {}",
        format!("{}", stats.min_rounds).green()
    );
    println!(
        "   Most rounds:      {}",
        format!("{}", stats.max_rounds).yellow()
    );
    println!(
        "   Avg winnings:     ${:.0}",
        stats.average_winning_earnings
    );
    println!("   Solved by guess:  {}", stats.solved_by_guess);
    println!("   Penalties:        {}", stats.penalties);
    println!("   Lost turns:       {}", stats.lost_turns);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if let Some((phrase, player, earnings)) = &stats.best_game {
        println!(
            "   Best win:         {player} with ${earnings} on {}",
            phrase.bright_white()
        );
    }

    println!("\n📈 {}", "Wins by seat:".bright_cyan().bold());
    for player in Player::ALL {
        let wins = stats.wins.get(&player).copied().unwrap_or(0);
        let pct = if stats.total_games == 0 {
            0.0
        } else {
            (wins as f64 / stats.total_games as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {player}: {} {wins:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print every puzzle in the corpus grouped by category
pub fn print_corpus(corpus: &Corpus) {
    println!(
        "\n{} ({} puzzles)",
        "PUZZLE CORPUS".bright_cyan().bold(),
        corpus.len()
    );
    for (category, count) in corpus_summary(corpus) {
        println!(
            "\n{} ({count})",
            category.name().bright_yellow().bold()
        );
        for phrase in corpus.phrases(category) {
            println!("  • {phrase}");
        }
    }
    println!();
}
