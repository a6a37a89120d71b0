//! Turn and reward coordination for one game
//!
//! A `Session` owns the board, the ledger and whose turn it is. Drivers feed
//! it one round at a time: either a spin followed by a letter, or an attempt
//! to solve the whole puzzle.

use super::ledger::{Ledger, PenaltyApplied};
use super::reveal::Board;
use super::selector::{Corpus, Puzzle};
use super::wheel::Wedge;
use crate::core::Player;
use rand::Rng;
use thiserror::Error;

/// Protocol errors from calling session operations out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The game is already over")]
    GameOver,
    #[error("A letter must be called for the ${0} spin first")]
    LetterPending(u32),
    #[error("Spin the wheel before calling a letter")]
    NoSpinPending,
    #[error("{0:?} is not a letter")]
    NotALetter(char),
}

/// Where the session is within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Current player chooses to spin or solve
    AwaitingChoice,
    /// Wheel landed on cash; waiting for the player's letter
    SpinOutcome(u32),
    /// Puzzle solved; terminal
    GameOver { winner: Player },
}

/// What happened in a resolved round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    LostTurn,
    Penalized(PenaltyApplied),
    LetterFound {
        letter: char,
        occurrences: usize,
        credited: u32,
    },
    LetterMissing {
        letter: char,
    },
    Solved {
        guess: String,
    },
    WrongSolve {
        guess: String,
    },
}

/// Summary of one resolved round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Who acted
    pub player: Player,
    pub event: RoundEvent,
    /// Who acts next (same as `player` after a correct letter or a win)
    pub next: Player,
    pub winner: Option<Player>,
}

impl RoundReport {
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// Result of spinning the wheel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinResult {
    /// Landed on cash; call `guess_letter` next
    AwaitingLetter(u32),
    /// Landed on a lose-turn wedge; the round is over
    Resolved(RoundReport),
}

/// One full round of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundInput {
    /// Spin result plus the letter to call if it lands on cash
    Spin { wedge: Wedge, letter: char },
    /// Attempt to solve the whole puzzle
    Solve(String),
}

/// Final result once the puzzle is solved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    pub player: Player,
    pub earnings: u32,
}

/// A single game from first spin to solved puzzle
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    board: Board,
    ledger: Ledger,
    current: Player,
    phase: TurnPhase,
    rounds: usize,
}

impl Session {
    /// Start a game on `puzzle` with Player 1 to act
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        log::info!("New game in category {}", puzzle.category);
        Self {
            board: Board::new(puzzle.phrase.clone()),
            puzzle,
            ledger: Ledger::new(),
            current: Player::FIRST,
            phase: TurnPhase::AwaitingChoice,
            rounds: 0,
        }
    }

    /// Start a game on a random puzzle from `corpus`
    pub fn start<R: Rng + ?Sized>(corpus: &Corpus, rng: &mut R) -> Self {
        Self::new(corpus.select_puzzle(rng))
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Rounds resolved so far
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver { .. })
    }

    /// Winner and their final earnings, once the game is over
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(Winner {
                player: winner,
                earnings: self.ledger.earnings(winner),
            }),
            _ => None,
        }
    }

    /// Apply a wheel outcome for the current player
    ///
    /// Lose-turn wedges resolve the round immediately. A cash wedge moves to
    /// `SpinOutcome` and waits for `guess_letter`.
    ///
    /// # Errors
    /// `GameError::GameOver` after the puzzle is solved, or
    /// `GameError::LetterPending` if a previous spin still needs a letter.
    pub fn spin(&mut self, wedge: Wedge) -> Result<SpinResult, GameError> {
        self.expect_choice()?;
        let player = self.current;
        log::debug!("{player} spun {wedge}");

        match wedge {
            Wedge::LoseTurn => Ok(SpinResult::Resolved(
                self.resolve_and_pass(player, RoundEvent::LostTurn),
            )),
            Wedge::LoseTurnAndPenalty => {
                let change = self.ledger.apply_penalty(player);
                Ok(SpinResult::Resolved(
                    self.resolve_and_pass(player, RoundEvent::Penalized(change)),
                ))
            }
            Wedge::Cash(amount) => {
                self.phase = TurnPhase::SpinOutcome(amount);
                Ok(SpinResult::AwaitingLetter(amount))
            }
        }
    }

    /// Call a letter after landing on cash
    ///
    /// The letter is used up whatever the outcome. A hit pays the wedge
    /// value per occurrence and keeps the turn; a miss passes the turn.
    ///
    /// # Errors
    /// `GameError::NoSpinPending` unless the last spin landed on cash,
    /// `GameError::GameOver` after the puzzle is solved, or
    /// `GameError::NotALetter` for anything outside A-Z.
    pub fn guess_letter(&mut self, letter: char) -> Result<RoundReport, GameError> {
        let amount = match self.phase {
            TurnPhase::SpinOutcome(amount) => amount,
            TurnPhase::AwaitingChoice => return Err(GameError::NoSpinPending),
            TurnPhase::GameOver { .. } => return Err(GameError::GameOver),
        };
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::NotALetter(letter));
        }

        let letter = letter.to_ascii_uppercase();
        let player = self.current;
        self.board.remove_letter_from_available(letter);

        if !self.board.letter_exists(letter) {
            log::debug!("{player} called {letter}: not in puzzle");
            return Ok(self.resolve_and_pass(player, RoundEvent::LetterMissing { letter }));
        }

        let occurrences = self.board.occurrences(letter);
        let credited = amount.saturating_mul(u32::try_from(occurrences).unwrap_or(u32::MAX));
        self.ledger.credit(player, credited);
        self.board.reveal_letter(letter);
        log::debug!("{player} called {letter}: {occurrences} time(s), +${credited}");

        let event = RoundEvent::LetterFound {
            letter,
            occurrences,
            credited,
        };
        if self.board.is_fully_revealed() {
            Ok(self.resolve_win(player, event))
        } else {
            Ok(self.resolve_and_keep(player, event))
        }
    }

    /// Attempt to solve the puzzle outright
    ///
    /// # Errors
    /// `GameError::GameOver` after the puzzle is solved, or
    /// `GameError::LetterPending` if a spin still needs a letter.
    pub fn solve(&mut self, guess: &str) -> Result<RoundReport, GameError> {
        self.expect_choice()?;
        let player = self.current;
        let guess = guess.trim().to_ascii_uppercase();

        if self.board.is_solved(&guess) {
            log::debug!("{player} solved the puzzle");
            Ok(self.resolve_win(player, RoundEvent::Solved { guess }))
        } else {
            log::debug!("{player} guessed wrong: {guess}");
            Ok(self.resolve_and_pass(player, RoundEvent::WrongSolve { guess }))
        }
    }

    /// Play a whole round in one call
    ///
    /// For a spin the letter is only used when the wedge is cash.
    ///
    /// # Errors
    /// Same as `spin`, `guess_letter` and `solve`. A non-letter with a cash
    /// wedge fails with `NotALetter` before the spin is applied.
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::{Category, Phrase, Player};
    /// use wheel_of_fortune::game::{Puzzle, RoundInput, Session, Wedge};
    ///
    /// let puzzle = Puzzle::new(Category::Phrases, Phrase::new("PIECE OF CAKE").unwrap());
    /// let mut session = Session::new(puzzle);
    ///
    /// let report = session
    ///     .play_round(RoundInput::Spin { wedge: Wedge::Cash(300), letter: 'E' })
    ///     .unwrap();
    /// assert_eq!(report.next, Player::One);
    /// assert_eq!(session.ledger().earnings(Player::One), 900);
    ///
    /// let report = session.play_round(RoundInput::Solve("piece of cake".into())).unwrap();
    /// assert_eq!(report.winner, Some(Player::One));
    /// ```
    pub fn play_round(&mut self, input: RoundInput) -> Result<RoundReport, GameError> {
        match input {
            RoundInput::Spin { wedge, letter } => {
                // Reject a bad letter before the spin lands so the round is untouched
                if matches!(wedge, Wedge::Cash(_)) && !letter.is_ascii_alphabetic() {
                    self.expect_choice()?;
                    return Err(GameError::NotALetter(letter));
                }
                match self.spin(wedge)? {
                    SpinResult::Resolved(report) => Ok(report),
                    SpinResult::AwaitingLetter(_) => self.guess_letter(letter),
                }
            }
            RoundInput::Solve(guess) => self.solve(&guess),
        }
    }

    fn expect_choice(&self) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingChoice => Ok(()),
            TurnPhase::SpinOutcome(amount) => Err(GameError::LetterPending(amount)),
            TurnPhase::GameOver { .. } => Err(GameError::GameOver),
        }
    }

    fn resolve_and_pass(&mut self, player: Player, event: RoundEvent) -> RoundReport {
        self.current = Ledger::advance_turn(player);
        self.finish_round(player, event, None)
    }

    fn resolve_and_keep(&mut self, player: Player, event: RoundEvent) -> RoundReport {
        self.finish_round(player, event, None)
    }

    fn resolve_win(&mut self, player: Player, event: RoundEvent) -> RoundReport {
        log::info!(
            "{player} wins with ${} after {} rounds",
            self.ledger.earnings(player),
            self.rounds + 1
        );
        self.finish_round(player, event, Some(player))
    }

    fn finish_round(
        &mut self,
        player: Player,
        event: RoundEvent,
        winner: Option<Player>,
    ) -> RoundReport {
        self.rounds += 1;
        self.phase = match winner {
            Some(winner) => TurnPhase::GameOver { winner },
            None => TurnPhase::AwaitingChoice,
        };
        RoundReport {
            player,
            event,
            next: self.current,
            winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Phrase};

    fn session(text: &str) -> Session {
        Session::new(Puzzle::new(Category::Phrases, Phrase::new(text).unwrap()))
    }

    fn spin_letter(session: &mut Session, amount: u32, letter: char) -> RoundReport {
        session
            .play_round(RoundInput::Spin {
                wedge: Wedge::Cash(amount),
                letter,
            })
            .unwrap()
    }

    #[test]
    fn new_session_starts_with_player_one() {
        let s = session("PIECE OF CAKE");
        assert_eq!(s.current_player(), Player::One);
        assert_eq!(s.phase(), TurnPhase::AwaitingChoice);
        assert_eq!(s.rounds_played(), 0);
        assert!(s.winner().is_none());
    }

    #[test]
    fn lose_turn_passes_without_letter() {
        let mut s = session("PIECE OF CAKE");
        let result = s.spin(Wedge::LoseTurn).unwrap();
        let SpinResult::Resolved(report) = result else {
            panic!("lose turn should resolve the round");
        };
        assert_eq!(report.event, RoundEvent::LostTurn);
        assert_eq!(report.next, Player::Two);
        assert_eq!(s.board().available().len(), 26);
        assert_eq!(s.ledger().earnings(Player::One), 0);
    }

    #[test]
    fn penalty_on_zero_balance_stays_zero_and_passes() {
        let mut s = session("PIECE OF CAKE");
        let report = s
            .play_round(RoundInput::Spin {
                wedge: Wedge::LoseTurnAndPenalty,
                letter: 'E',
            })
            .unwrap();

        assert_eq!(
            report.event,
            RoundEvent::Penalized(PenaltyApplied { before: 0, after: 0 })
        );
        assert_eq!(report.next, Player::Two);
        assert_eq!(s.ledger().earnings(Player::One), 0);
        // The letter in the input is not processed
        assert!(s.board().available().contains('E'));
        assert_eq!(s.board().hidden_letters(), 11);
    }

    #[test]
    fn penalty_subtracts_from_funded_player() {
        let mut s = session("PIECE OF CAKE");
        spin_letter(&mut s, 500, 'E'); // 3 x 500
        let SpinResult::Resolved(report) = s.spin(Wedge::LoseTurnAndPenalty).unwrap() else {
            panic!("penalty should resolve the round");
        };
        assert_eq!(
            report.event,
            RoundEvent::Penalized(PenaltyApplied {
                before: 1500,
                after: 500
            })
        );
        assert_eq!(s.current_player(), Player::Two);
    }

    #[test]
    fn correct_letter_credits_and_keeps_turn() {
        let mut s = session("PIECE OF CAKE");
        let report = spin_letter(&mut s, 300, 'e');

        assert_eq!(
            report.event,
            RoundEvent::LetterFound {
                letter: 'E',
                occurrences: 3,
                credited: 900
            }
        );
        assert_eq!(report.player, Player::One);
        assert_eq!(report.next, Player::One);
        assert!(!report.is_game_over());
        assert_eq!(s.ledger().earnings(Player::One), 900);
        assert_eq!(s.board().render(), "_ _ E _ E   _ _   _ _ _ E ");
        assert!(!s.board().available().contains('E'));
    }

    #[test]
    fn wrong_letter_consumes_letter_and_passes() {
        let mut s = session("PIECE OF CAKE");
        let report = spin_letter(&mut s, 5000, 'Z');

        assert_eq!(report.event, RoundEvent::LetterMissing { letter: 'Z' });
        assert_eq!(report.next, Player::Two);
        assert_eq!(s.ledger().earnings(Player::One), 0);
        assert!(!s.board().available().contains('Z'));
    }

    #[test]
    fn revealing_last_letter_wins_without_advancing() {
        let mut s = session("AIR BASE");
        for letter in ['A', 'I', 'R', 'B', 'S'] {
            let report = spin_letter(&mut s, 100, letter);
            assert!(!report.is_game_over());
        }
        spin_letter(&mut s, 100, 'X'); // Player 2 now
        let report = spin_letter(&mut s, 700, 'E');

        assert_eq!(report.winner, Some(Player::Two));
        assert_eq!(report.next, Player::Two);
        assert_eq!(s.current_player(), Player::Two);
        assert_eq!(
            s.winner(),
            Some(Winner {
                player: Player::Two,
                earnings: 700
            })
        );
        // Game ends even though letters remain
        assert!(!s.board().available().is_empty());
    }

    #[test]
    fn full_phrase_guess_wins() {
        let mut s = session("PIECE OF CAKE");
        let report = s.solve("PIECE OF CAKE").unwrap();
        assert_eq!(
            report.event,
            RoundEvent::Solved {
                guess: "PIECE OF CAKE".to_string()
            }
        );
        assert_eq!(report.winner, Some(Player::One));
        assert!(s.is_over());
        assert_eq!(s.winner().map(|w| w.earnings), Some(0));
    }

    #[test]
    fn full_phrase_guess_is_case_insensitive() {
        let mut s = session("PIECE OF CAKE");
        s.spin(Wedge::LoseTurn).unwrap();
        let report = s.solve("  piece of cake").unwrap();
        assert_eq!(report.winner, Some(Player::Two));
    }

    #[test]
    fn wrong_phrase_guess_passes_without_credit_change() {
        let mut s = session("PIECE OF CAKE");
        spin_letter(&mut s, 300, 'C');
        let report = s.solve("PIECE OF PIE").unwrap();

        assert_eq!(
            report.event,
            RoundEvent::WrongSolve {
                guess: "PIECE OF PIE".to_string()
            }
        );
        assert_eq!(report.next, Player::Two);
        assert_eq!(s.ledger().earnings(Player::One), 600);
    }

    #[test]
    fn turn_wraps_after_three_misses() {
        let mut s = session("PIECE OF CAKE");
        spin_letter(&mut s, 100, 'X');
        spin_letter(&mut s, 100, 'Y');
        let report = spin_letter(&mut s, 100, 'Z');
        assert_eq!(report.player, Player::Three);
        assert_eq!(report.next, Player::One);
        assert_eq!(s.rounds_played(), 3);
    }

    #[test]
    fn letter_without_spin_is_rejected() {
        let mut s = session("PIECE OF CAKE");
        assert_eq!(s.guess_letter('E'), Err(GameError::NoSpinPending));
    }

    #[test]
    fn spin_or_solve_while_letter_pending_is_rejected() {
        let mut s = session("PIECE OF CAKE");
        assert_eq!(s.spin(Wedge::Cash(900)), Ok(SpinResult::AwaitingLetter(900)));
        assert_eq!(s.phase(), TurnPhase::SpinOutcome(900));
        assert_eq!(s.spin(Wedge::Cash(100)), Err(GameError::LetterPending(900)));
        assert_eq!(s.solve("PIECE OF CAKE"), Err(GameError::LetterPending(900)));
    }

    #[test]
    fn non_letter_guess_is_rejected_and_spin_stays_pending() {
        let mut s = session("HARD DAY'S WORK");
        s.spin(Wedge::Cash(300)).unwrap();
        assert_eq!(s.guess_letter('\''), Err(GameError::NotALetter('\'')));
        assert_eq!(s.phase(), TurnPhase::SpinOutcome(300));
        assert!(s.guess_letter('D').is_ok());
    }

    #[test]
    fn play_round_with_non_letter_leaves_round_untouched() {
        let mut s = session("HARD DAY'S WORK");
        let input = RoundInput::Spin {
            wedge: Wedge::Cash(100),
            letter: '\'',
        };
        assert_eq!(s.play_round(input), Err(GameError::NotALetter('\'')));
        assert_eq!(s.phase(), TurnPhase::AwaitingChoice);
        assert_eq!(s.current_player(), Player::One);
        assert_eq!(s.rounds_played(), 0);

        // The same player can simply play the round again
        let report = s
            .play_round(RoundInput::Spin {
                wedge: Wedge::Cash(100),
                letter: 'D',
            })
            .unwrap();
        assert_eq!(report.player, Player::One);
        assert_eq!(s.ledger().earnings(Player::One), 200);
    }

    #[test]
    fn play_round_lose_turn_ignores_letter() {
        let mut s = session("HARD DAY'S WORK");
        let report = s
            .play_round(RoundInput::Spin {
                wedge: Wedge::LoseTurn,
                letter: '\'',
            })
            .unwrap();
        assert_eq!(report.event, RoundEvent::LostTurn);
        assert_eq!(s.current_player(), Player::Two);
    }

    #[test]
    fn actions_after_game_over_are_rejected() {
        let mut s = session("PIECE OF CAKE");
        s.solve("PIECE OF CAKE").unwrap();
        assert_eq!(s.spin(Wedge::Cash(100)), Err(GameError::GameOver));
        assert_eq!(s.solve("PIECE OF CAKE"), Err(GameError::GameOver));
        assert_eq!(s.guess_letter('E'), Err(GameError::GameOver));
    }

    #[test]
    fn start_draws_from_corpus() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let corpus = Corpus::embedded().unwrap();
        let s = Session::start(&corpus, &mut StdRng::seed_from_u64(8));
        assert!(corpus.phrases(s.puzzle().category).contains(&s.puzzle().phrase));
        assert_eq!(s.board().phrase(), &s.puzzle().phrase);
    }
}
