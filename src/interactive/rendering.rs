//! TUI rendering with ratatui
//!
//! Grid, overlays and side panels for the guessing game.

use super::app::{App, MessageStyle};
use crate::core::LetterClass;
use crate::game::{Cell, CellKind, GameState, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.expanded {
        // Main content area - split horizontally
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Game grid
                Constraint::Percentage(45), // Side panel
            ])
            .split(chunks[1]);

        render_game(f, app, main_chunks[0]);
        render_info_panel(f, app, main_chunks[1]);
    } else {
        render_collapsed(f, chunks[1]);
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 I have a problem...")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_collapsed(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from("I never outgrew my Wordle phase; why not give it a shot yourself?"),
        Line::from(""),
        Line::from(Span::styled(
            "Press TAB to open the game",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn cell_span(cell: &Cell, is_cursor: bool) -> Span<'static> {
    let letter = cell.letter.unwrap_or(if is_cursor { '▏' } else { '·' });
    let text = format!(" {letter} ");

    let style = match cell.kind {
        CellKind::Classified(LetterClass::Exact) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellKind::Classified(LetterClass::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellKind::Classified(LetterClass::Absent) => {
            Style::default().fg(Color::White).bg(Color::Red)
        }
        CellKind::Pending => Style::default()
            .fg(Color::Cyan)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
        CellKind::Empty if is_cursor => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::SLOW_BLINK),
        CellKind::Empty => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let board = app.game.board();
    let cursor = board.cursor();

    let mut lines = vec![Line::from("")];
    for (row, cells) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(cells.len() * 2);
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(cell, cursor == Some((row, col))));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let hint = if app.game.state() == GameState::Playing {
        if app.game.can_submit() {
            Span::styled("Press Enter to submit", Style::default().fg(Color::Cyan))
        } else {
            Span::styled(
                "Type your guess and press Enter",
                Style::default().fg(Color::DarkGray),
            )
        }
    } else {
        Span::raw("")
    };
    lines.push(Line::from(hint));

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Wordle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(grid, area);

    match app.game.state() {
        GameState::Won => render_overlay(
            f,
            area,
            vec![
                Line::from("🎉"),
                Line::from(Span::styled(
                    "You Won!",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("[Enter] Play Again"),
            ],
            Color::Cyan,
        ),
        GameState::Lost => {
            let answer = app
                .game
                .revealed_target()
                .map(ToString::to_string)
                .unwrap_or_default();
            render_overlay(
                f,
                area,
                vec![
                    Line::from("💀"),
                    Line::from(Span::styled(
                        "Game Over!",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![
                        Span::raw("Word was: "),
                        Span::styled(
                            answer,
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(""),
                    Line::from("[Enter] Try Again"),
                ],
                Color::Red,
            );
        }
        GameState::Playing => {}
    }
}

fn render_overlay(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, color: Color) {
    let height = lines.len() as u16 + 2;
    let popup = centered_rect(area, 30, height);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(9), // Statistics
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.attempts_used();
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS} guesses used"));

    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Played {} | Won {} | Streak {} (best {})",
        stats.total_games, stats.games_won, stats.current_streak, stats.best_streak
    ))];
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar_len = count * 16 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = Paragraph::new(format!("State: {}", app.game.state())).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if !app.expanded {
        "Esc: Quit | TAB: Open game"
    } else if app.game.state().is_terminal() {
        "Esc: Quit | Enter/n: New Game | TAB: Hide"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Delete | TAB: Hide"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
