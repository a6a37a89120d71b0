//! TUI application state and logic

use crate::core::Player;
use crate::game::{
    Corpus, GameError, RoundEvent, RoundReport, Session, SpinResult, SpinSource, Wedge, Wheel,
};
use crate::input::{parse_letter, parse_solve};
use crate::output::formatters::{describe_round, winner_banner};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: SpinSource> {
    pub corpus: &'a Corpus,
    pub session: Session,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_spin: Option<Wedge>,
    pub stats: Statistics,
    pub should_quit: bool,
    wheel: S,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Waiting for spin or solve
    Choice,
    /// Wheel landed on cash; typing a letter
    Letter(u32),
    /// Typing a whole-phrase guess
    Solve,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub wins: [usize; Player::COUNT],
}

impl<'a> App<'a, Wheel<StdRng>> {
    /// App on a random puzzle with the standard wheel
    ///
    /// The same seed replays the same puzzles and spins.
    #[must_use]
    pub fn new(corpus: &'a Corpus, seed: Option<u64>) -> Self {
        let mut rng =
            seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        let wheel = Wheel::standard(StdRng::seed_from_u64(rng.random()));
        Self::with_wheel(corpus, wheel, rng)
    }
}

impl<'a, S: SpinSource> App<'a, S> {
    #[must_use]
    pub fn with_wheel(corpus: &'a Corpus, wheel: S, mut rng: StdRng) -> Self {
        let session = Session::start(corpus, &mut rng);
        let mut app = Self {
            corpus,
            session,
            input_mode: InputMode::Choice,
            input_buffer: String::new(),
            messages: Vec::new(),
            last_spin: None,
            stats: Statistics::default(),
            should_quit: false,
            wheel,
            rng,
        };
        app.add_message("Welcome to Wheel of Fortune!", MessageStyle::Info);
        app.prompt_current_player();
        app
    }

    /// Replace the puzzle, e.g. with a known one
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
        self.input_mode = InputMode::Choice;
        self.input_buffer.clear();
        self.last_spin = None;
    }

    pub fn new_game(&mut self) {
        let session = Session::start(self.corpus, &mut self.rng);
        self.set_session(session);
        self.messages.clear();
        self.add_message("New puzzle! Player 1 starts.", MessageStyle::Info);
        self.prompt_current_player();
    }

    pub fn spin(&mut self) {
        let wedge = self.wheel.spin();
        self.last_spin = Some(wedge);
        let player = self.session.current_player();

        match self.session.spin(wedge) {
            Ok(SpinResult::AwaitingLetter(amount)) => {
                self.input_mode = InputMode::Letter(amount);
                self.input_buffer.clear();
                self.add_message(
                    &format!("{player} spun {wedge}. Pick a letter!"),
                    MessageStyle::Info,
                );
            }
            Ok(SpinResult::Resolved(report)) => self.apply_report(&report),
            Err(e) => self.report_error(e),
        }
    }

    pub fn start_solve(&mut self) {
        self.input_mode = InputMode::Solve;
        self.input_buffer.clear();
        self.add_message(
            &format!("{}, type your solution", self.session.current_player()),
            MessageStyle::Info,
        );
    }

    /// Submit the input buffer as a letter or a solution
    pub fn submit(&mut self) {
        match self.input_mode {
            InputMode::Letter(_) => {
                match parse_letter(&self.input_buffer, self.session.board().available()) {
                    Ok(letter) => match self.session.guess_letter(letter) {
                        Ok(report) => self.apply_report(&report),
                        Err(e) => self.report_error(e),
                    },
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            InputMode::Solve => match parse_solve(&self.input_buffer) {
                Ok(guess) => match self.session.solve(&guess) {
                    Ok(report) => self.apply_report(&report),
                    Err(e) => self.report_error(e),
                },
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            InputMode::Choice | InputMode::GameOver => {}
        }
        self.input_buffer.clear();
    }

    fn apply_report(&mut self, report: &RoundReport) {
        let style = match report.event {
            RoundEvent::LetterFound { .. } | RoundEvent::Solved { .. } => MessageStyle::Success,
            RoundEvent::LostTurn | RoundEvent::Penalized(_) => MessageStyle::Warning,
            RoundEvent::LetterMissing { .. } | RoundEvent::WrongSolve { .. } => {
                MessageStyle::Error
            }
        };
        self.add_message(&describe_round(report), style);

        if let Some(winner) = self.session.winner() {
            self.stats.games_played += 1;
            self.stats.wins[winner.player.index()] += 1;
            self.input_mode = InputMode::GameOver;
            for line in winner_banner(winner, self.session.puzzle().phrase.text()) {
                self.add_message(&line, MessageStyle::Success);
            }
            self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::Choice;
            self.prompt_current_player();
        }
    }

    fn report_error(&mut self, error: GameError) {
        log::warn!("Rejected move: {error}");
        self.add_message(&error.to_string(), MessageStyle::Error);
    }

    fn prompt_current_player(&mut self) {
        self.add_message(
            &format!(
                "{}: press 1 to spin or 2 to solve",
                self.session.current_player()
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Choice => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('1' | 's') => self.spin(),
                KeyCode::Char('2' | 'g') => self.start_solve(),
                _ => {}
            },
            InputMode::Letter(_) => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    // One letter at a time; typing again replaces it
                    self.input_buffer.clear();
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Esc => {
                    self.add_message("You already spun; pick a letter", MessageStyle::Warning);
                }
                _ => {}
            },
            InputMode::Solve => match key.code {
                KeyCode::Char(c) => self.input_buffer.push(c.to_ascii_uppercase()),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Esc => {
                    self.input_mode = InputMode::Choice;
                    self.input_buffer.clear();
                    self.add_message("Cancelled solve", MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SpinSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SpinSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Phrase};
    use crate::game::{Puzzle, ScriptedWheel};

    fn app(corpus: &Corpus, wedges: Vec<Wedge>) -> App<'_, ScriptedWheel> {
        let mut app = App::with_wheel(
            corpus,
            ScriptedWheel::new(wedges),
            StdRng::seed_from_u64(5),
        );
        app.set_session(Session::new(Puzzle::new(
            Category::Phrases,
            Phrase::new("PIECE OF CAKE").unwrap(),
        )));
        app
    }

    fn press(app: &mut App<'_, ScriptedWheel>, keys: &str) {
        for c in keys.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }
    }

    fn last_message<'b>(app: &'b App<'_, ScriptedWheel>) -> &'b str {
        app.messages.iter().rev().map(|m| m.text.as_str()).nth(1).unwrap_or("")
    }

    #[test]
    fn spin_then_letter_keeps_turn() {
        let corpus = Corpus::embedded().unwrap();
        let mut app = app(&corpus, vec![Wedge::Cash(300)]);

        press(&mut app, "1");
        assert_eq!(app.input_mode, InputMode::Letter(300));

        press(&mut app, "e\n");
        assert_eq!(app.input_mode, InputMode::Choice);
        assert_eq!(app.session.current_player(), Player::One);
        assert_eq!(app.session.ledger().earnings(Player::One), 900);
        assert_eq!(last_message(&app), "E occurs 3 time(s)! Player 1 earns $900");
    }

    #[test]
    fn lose_turn_passes_to_next_player() {
        let corpus = Corpus::embedded().unwrap();
        let mut app = app(&corpus, vec![Wedge::LoseTurn]);

        press(&mut app, "s");
        assert_eq!(app.input_mode, InputMode::Choice);
        assert_eq!(app.session.current_player(), Player::Two);
        assert_eq!(app.last_spin, Some(Wedge::LoseTurn));
    }

    #[test]
    fn unavailable_letter_stays_in_letter_mode() {
        let corpus = Corpus::embedded().unwrap();
        let mut app = app(&corpus, vec![Wedge::Cash(100)]);

        press(&mut app, "1e\n1e\n");
        assert_eq!(app.input_mode, InputMode::Letter(100));
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("E is not an available letter")
        );
    }

    #[test]
    fn solving_ends_game_and_counts_win() {
        let corpus = Corpus::embedded().unwrap();
        let mut app = app(&corpus, vec![Wedge::Cash(100)]);

        press(&mut app, "2piece of cake\n");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.wins, [1, 0, 0]);

        // Letters typed after the game ends are ignored
        press(&mut app, "1");
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, "n");
        assert_eq!(app.input_mode, InputMode::Choice);
        assert!(!app.session.is_over());
    }

    #[test]
    fn escape_cancels_solve() {
        let corpus = Corpus::embedded().unwrap();
        let mut app = app(&corpus, vec![Wedge::Cash(100)]);

        press(&mut app, "2pie");
        assert_eq!(app.input_buffer, "PIE");
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Choice);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.current_player(), Player::One);
    }

    #[test]
    fn q_types_into_solve_but_quits_from_choice() {
        let corpus = Corpus::embedded().unwrap();
        let mut app = app(&corpus, vec![Wedge::Cash(100)]);

        press(&mut app, "2q");
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        press(&mut app, "q");
        assert!(app.should_quit);
    }
}
