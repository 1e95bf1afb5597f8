//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::engine::Game;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// A modal rejection alert
///
/// Shown over the board until dismissed, the way the original game
/// interrupts input with its title/message pair.
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics across rounds
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: usize,
}

/// Application state
pub struct App<'a, W: WordSource, D: Dictionary> {
    pub game: Game<'a, D>,
    word_source: &'a W,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a, W: WordSource, D: Dictionary> App<'a, W, D> {
    #[must_use]
    pub fn new(word_source: &'a W, dictionary: &'a D, language: &str) -> Self {
        let game = Game::start(word_source, dictionary, language);

        let mut app = Self {
            game,
            word_source,
            input_buffer: String::new(),
            messages: Vec::new(),
            alert: None,
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Make words from the root's letters.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter submits, Ctrl+N starts a new round, Esc quits.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the current input buffer as a candidate
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            // Blank input, ignore
            None => {}
            Some(Ok(accepted)) => {
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(self.game.score());
                self.add_message(
                    &format!("+{} points for '{}'", accepted.points, accepted.word),
                    MessageStyle::Success,
                );
            }
            Some(Err(reason)) => {
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.game.root_word()),
                });
            }
        }
    }

    /// Start a fresh round with a new root word
    pub fn new_round(&mut self) {
        self.stats.best_score = self.stats.best_score.max(self.game.score());
        self.stats.rounds_played += 1;

        self.game.new_round(self.word_source);
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(
            &format!(
                "New round! Root word: {}",
                self.game.root_word().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, D: Dictionary>(app: App<'_, W, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

fn run_app<B: ratatui::backend::Backend, W: WordSource, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, W, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.alert.is_some() {
                // Alert is modal: dismiss before anything else
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter | KeyCode::Esc => {
                        app.dismiss_alert();
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
