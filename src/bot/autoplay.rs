//! Bot-driven games
//!
//! Plays a session to completion with every seat using the same strategy.

use super::strategy::{Decision, Strategy};
use crate::core::Category;
use crate::game::{
    Corpus, GameError, RoundEvent, RoundReport, Session, SpinResult, SpinSource, Winner,
};
use rand::Rng;

/// Outcome of one automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub category: Category,
    pub phrase: String,
    /// `None` if the round cap was hit first
    pub winner: Option<Winner>,
    pub rounds: usize,
    pub penalties: usize,
    pub lost_turns: usize,
    /// Won by guessing the phrase rather than revealing the last letter
    pub solved_by_guess: bool,
}

/// Play one round for the current player
///
/// # Errors
/// Propagates `GameError` if the session is already over.
pub fn play_round<S: Strategy, W: SpinSource, R: Rng + ?Sized>(
    session: &mut Session,
    corpus: &Corpus,
    strategy: &S,
    wheel: &mut W,
    rng: &mut R,
) -> Result<Option<RoundReport>, GameError> {
    match strategy.decide(session, corpus) {
        Decision::Solve(guess) => session.solve(&guess).map(Some),
        Decision::Spin => match session.spin(wheel.spin())? {
            SpinResult::Resolved(report) => Ok(Some(report)),
            SpinResult::AwaitingLetter(_) => {
                match strategy.pick_letter(session, corpus, rng) {
                    Some(letter) => session.guess_letter(letter).map(Some),
                    None => Ok(None),
                }
            }
        },
    }
}

/// Play `session` until someone wins or `max_rounds` rounds have been played
///
/// # Errors
/// Propagates `GameError` if the session is already over.
pub fn play_game<S: Strategy, W: SpinSource, R: Rng + ?Sized>(
    mut session: Session,
    corpus: &Corpus,
    strategy: &S,
    wheel: &mut W,
    rng: &mut R,
    max_rounds: usize,
) -> Result<GameRecord, GameError> {
    let mut penalties = 0;
    let mut lost_turns = 0;
    let mut solved_by_guess = false;

    while !session.is_over() && session.rounds_played() < max_rounds {
        let Some(report) = play_round(&mut session, corpus, strategy, wheel, rng)? else {
            log::warn!("No letters left to call; stopping game");
            break;
        };

        match report.event {
            RoundEvent::Penalized(_) => penalties += 1,
            RoundEvent::LostTurn => lost_turns += 1,
            RoundEvent::Solved { .. } => solved_by_guess = true,
            _ => {}
        }
    }

    Ok(GameRecord {
        category: session.puzzle().category,
        phrase: session.puzzle().phrase.text().to_string(),
        winner: session.winner(),
        rounds: session.rounds_played(),
        penalties,
        lost_turns,
        solved_by_guess,
    })
}
