//! TUI rendering with ratatui
//!
//! Board, wheel and scoreboard panels for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, Player};
use crate::game::{SpinSource, Wedge};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SpinSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Puzzle
            Constraint::Percentage(40), // Players and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎡 WHEEL OF FORTUNE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Board
            Constraint::Length(4), // Letters
            Constraint::Length(3), // Progress
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_progress(f, app, chunks[2]);
}

fn render_board<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let board = app.session.board();
    let board_style = if app.input_mode == InputMode::GameOver {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(board.render(), board_style)),
        Line::from(""),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" Puzzle: {} ", app.session.puzzle().category))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}

fn render_letters<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let available = app.session.board().available();
    let spans: Vec<Span> = ALPHABET
        .iter()
        .map(|&c| {
            if available.contains(c) {
                Span::styled(format!("{c} "), Style::default().fg(Color::White))
            } else {
                Span::styled(format!("{c} "), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" Available Letters ({}) ", available.len()))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_progress<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let board = app.session.board();
    let total = board.phrase().text().chars().filter(char::is_ascii_alphabetic).count();
    let hidden = board.hidden_letters();
    let revealed = total.saturating_sub(hidden);
    let percent = if total == 0 {
        100
    } else {
        u16::try_from(revealed * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{revealed}/{total} letters revealed"));
    f.render_widget(gauge, area);
}

fn render_info_panel<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Players
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_players(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_players<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let current = app.session.current_player();
    let winner = app.session.winner().map(|w| w.player);

    let mut lines: Vec<Line> = app
        .session
        .ledger()
        .standings()
        .into_iter()
        .map(|(player, balance)| {
            let (marker, style) = if Some(player) == winner {
                ("🏆 ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else if player == current && winner.is_none() {
                ("▶ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            Line::from(vec![
                Span::styled(format!("{marker}{player}"), style),
                Span::raw(format!("  ${balance}")),
            ])
        })
        .collect();

    let ledger = app.session.ledger();
    let leader = ledger.leader();
    if winner.is_none() && ledger.earnings(leader) > 0 {
        lines.push(Line::from(Span::styled(
            format!("Leading: {leader} (${})", ledger.earnings(leader)),
            Style::default().fg(Color::Cyan),
        )));
    }

    if let Some(wedge) = app.last_spin {
        let color = match wedge {
            Wedge::Cash(_) => Color::Green,
            Wedge::LoseTurn | Wedge::LoseTurnAndPenalty => Color::Red,
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Last spin: "),
            Span::styled(wedge.to_string(), Style::default().fg(color)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Players ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let player = app.session.current_player();
    let (title, color) = match app.input_mode {
        InputMode::Choice => (
            format!(" {player}: 1/s Spin | 2/g Solve "),
            Color::Yellow,
        ),
        InputMode::Letter(amount) => (
            format!(" {player}: pick a letter for ${amount} | Enter to call "),
            Color::Green,
        ),
        InputMode::Solve => (
            format!(" {player}: type the solution | Enter to submit | ESC to cancel "),
            Color::Cyan,
        ),
        InputMode::GameOver => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new puzzle or 'q' to quit ".to_string(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status<S: SpinSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.session.rounds_played() + 1))
        .alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let wins = Player::ALL
        .iter()
        .map(|p| format!("P{}: {}", p.index() + 1, app.stats.wins[p.index()]))
        .collect::<Vec<_>>()
        .join(" ");
    let stats = Paragraph::new(format!("Games: {} | Wins {wins}", app.stats.games_played))
        .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Choice | InputMode::GameOver => "q: Quit | n: New Puzzle",
        InputMode::Letter(_) | InputMode::Solve => "Enter: Submit | Backspace: Delete",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
