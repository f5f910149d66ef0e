//! TUI application state and logic

use crate::commands::hints::find_words;
use crate::core::StartupError;
use crate::round::{Presenter, RoundController, SubmitError};
use crate::spell::DictionarySpellChecker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// A rejection waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
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
    Error,
}

/// Everything the renderer shows, fed through `Presenter`
#[derive(Debug, Default)]
pub struct Screen {
    pub title: String,
    pub used_words: Vec<String>,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
}

impl Screen {
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

impl Presenter for Screen {
    fn show_error(&mut self, title: &str, message: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn show_root_word(&mut self, root: &str) {
        root.clone_into(&mut self.title);
    }

    fn show_used_words(&mut self, used: &[String]) {
        self.used_words = used.to_vec();
    }
}

/// Application state
pub struct App {
    pub controller: RoundController<DictionarySpellChecker>,
    pub screen: Screen,
    /// Dictionary words buildable from the current root
    pub possible_words: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(controller: RoundController<DictionarySpellChecker>) -> Self {
        let mut screen = Screen::default();
        screen.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );

        Self {
            controller,
            screen,
            possible_words: 0,
            should_quit: false,
        }
    }

    /// Begin a new round (first load or restart)
    ///
    /// # Errors
    ///
    /// Returns the `StartupError` if no root word could be chosen.
    pub fn start_round(&mut self) -> Result<(), StartupError> {
        let root = self.controller.start_round(&mut self.screen)?.clone();
        self.possible_words = find_words(&root, self.controller.checker()).len();
        self.screen.alert = None;

        let text = format!(
            "New round! {} words hide in {}.",
            self.possible_words,
            self.screen.title.to_uppercase()
        );
        self.screen.add_message(&text, MessageStyle::Info);
        Ok(())
    }

    /// Submit whatever is in the input field
    pub fn submit(&mut self) {
        match self.controller.submit(&mut self.screen) {
            Ok(accepted) => {
                let text = format!("✓ {}", accepted.word());
                self.screen.add_message(&text, MessageStyle::Success);
            }
            // The alert is already up
            Err(SubmitError::Rejected(_)) => {}
            Err(SubmitError::NoActiveRound) => {
                self.screen
                    .add_message("No round in progress!", MessageStyle::Error);
            }
        }
    }

    /// React to one key press
    ///
    /// # Errors
    ///
    /// Returns the `StartupError` if a requested restart cannot pick a root word.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), StartupError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        // An open alert swallows everything until dismissed
        if self.screen.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.screen.alert = None;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_round()?;
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => {
                self.controller.push_char(c);
            }
            KeyCode::Backspace => {
                self.controller.pop_char();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }

        Ok(())
    }
}

/// Run the TUI application
///
/// The first round should already be started so a startup failure surfaces
/// before the terminal is taken over.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a restart cannot pick a root word.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
