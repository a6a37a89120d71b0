//! Simple interactive CLI mode
//!
//! Text-based three-player game without the TUI. All three seats share one
//! keyboard and take turns at the same prompt.

use crate::game::{Corpus, GameError, Session, SpinResult, SpinSource, Wheel, Winner};
use crate::input::{Choice, InputError, parse_choice, parse_letter, parse_solve};
use crate::output::{write_board, write_round, write_winner};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a text game stopped before a winner was declared
#[derive(Debug, Error)]
pub enum SimpleError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Input closed before the puzzle was solved")]
    InputClosed,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// Offers a new puzzle after each win until the players decline.
///
/// # Errors
///
/// Returns an error on I/O failure or if stdin closes mid-game.
pub fn run_simple(corpus: &Corpus, seed: Option<u64>) -> Result<(), SimpleError> {
    let mut rng =
        seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let mut wheel = Wheel::standard(StdRng::seed_from_u64(rng.random()));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Wheel of Fortune - Text Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Three players share this prompt. On your turn either:")?;
    writeln!(out, "  1 / spin   spin the wheel, then call a letter")?;
    writeln!(out, "  2 / guess  solve the whole puzzle")?;

    loop {
        let mut session = Session::start(corpus, &mut rng);
        play_text_game(&mut session, &mut input, &mut out, &mut wheel)?;

        let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

/// Play `session` to completion reading moves from `input`
///
/// Invalid input is reported and prompted for again; it never reaches the
/// session.
///
/// # Errors
///
/// `SimpleError::InputClosed` if `input` runs out before someone wins, or
/// any write error.
pub fn play_text_game<R: BufRead, W: Write, S: SpinSource>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    wheel: &mut S,
) -> Result<Winner, SimpleError> {
    loop {
        write_board(out, session)?;
        let player = session.current_player();
        let choice = prompt_until(
            input,
            out,
            &format!("{player}, Spin (1) or Guess (2)?"),
            parse_choice,
        )?;

        let report = match choice {
            Choice::Spin => {
                let wedge = wheel.spin();
                writeln!(out, "{}", format!("{player} spun: {wedge}").bright_yellow())?;
                match session.spin(wedge)? {
                    SpinResult::Resolved(report) => report,
                    SpinResult::AwaitingLetter(amount) => {
                        let available = session.board().available();
                        let letter = prompt_until(
                            input,
                            out,
                            &format!("Guess a letter for ${amount}"),
                            |text| parse_letter(text, available),
                        )?;
                        session.guess_letter(letter)?
                    }
                }
            }
            Choice::Solve => {
                let guess = prompt_until(input, out, "Guess the puzzle", parse_solve)?;
                session.solve(&guess)?
            }
        };

        write_round(out, &report)?;
        if let Some(winner) = session.winner() {
            write_winner(out, winner, session.puzzle().phrase.text())?;
            return Ok(winner);
        }
    }
}

/// Prompt until `parse` accepts the line
fn prompt_until<T, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Result<T, SimpleError> {
    loop {
        let line = prompt(input, out, text)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
        }
    }
}

/// Get user input with a prompt
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<String, SimpleError> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SimpleError::InputClosed);
    }
    Ok(line.trim().to_string())
}
