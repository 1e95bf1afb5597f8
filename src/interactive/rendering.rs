//! TUI rendering with ratatui
//!
//! Single-screen layout: root word header, accepted-word list, round panel,
//! input line and a modal alert for rejections.

use super::app::{App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::letter_count_badge;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Found words
            Constraint::Percentage(45), // Round panel
        ])
        .split(chunks[1]);

    render_found_words(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);

    // Rejection alert on top of everything
    if app.alert.is_some() {
        render_alert(f, app);
    }
}

fn render_header<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>, area: Rect) {
    let header = Paragraph::new(format!(
        "🔤 WORD SCRAMBLE — {}",
        app.game.root_word().to_uppercase()
    ))
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

fn render_found_words<W: WordSource, D: Dictionary>(
    f: &mut Frame,
    app: &App<'_, W, D>,
    area: Rect,
) {
    let items: Vec<ListItem> = app
        .game
        .used_words()
        .iter()
        .map(|word| {
            let count = word.chars().count();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", letter_count_badge(count)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(word.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {count} letters"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" Found Words ({}) ", app.game.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_round_panel<W: WordSource, D: Dictionary>(
    f: &mut Frame,
    app: &App<'_, W, D>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Scores
            Constraint::Length(3), // Best-score gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_scores(f, app, chunks[0]);
    render_score_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_scores<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>, area: Rect) {
    let best = app.stats.best_score.max(app.game.score());

    let content = vec![
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                app.game.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Best:   "),
            Span::styled(best.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(format!("Words:  {}", app.stats.words_found)),
        Line::from(format!("Rounds: {}", app.stats.rounds_played)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_score_gauge<W: WordSource, D: Dictionary>(
    f: &mut Frame,
    app: &App<'_, W, D>,
    area: Rect,
) {
    let best = app.stats.best_score.max(app.game.score()).max(1);
    let ratio = (app.game.score() as f64 / best as f64).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" vs Best ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio);

    f.render_widget(gauge, area);
}

fn render_messages<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(message.text.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_input<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>, area: Rect) {
    let input = Paragraph::new(format!("> {}_", app.input_buffer)).block(
        Block::default()
            .title(" Your word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(input, area);
}

fn render_status<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>, area: Rect) {
    let hint = if app.alert.is_some() {
        "Enter/Esc dismiss alert"
    } else {
        "Enter submit | Ctrl+N new round | Esc quit"
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_alert<W: WordSource, D: Dictionary>(f: &mut Frame, app: &App<'_, W, D>) {
    let Some(alert) = &app.alert else { return };

    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(popup, area);
}

/// Centered sub-rectangle taking the given percentages of `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
