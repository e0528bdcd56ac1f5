//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{CursorMove, Input, TextArea};

use super::event::{AppEvent, EventHandler};
use super::request::fetch_reply;
use super::theme::Theme;
use super::ui;
use super::widgets::MessageListState;
use crate::chat::ChatController;
use crate::client::ChatClient;
use crate::config::Settings;

/// Lines moved per PageUp/PageDown press.
const PAGE_SCROLL: usize = 10;

/// Main TUI application
pub struct App {
    /// Terminal instance (taken out during the run loop)
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    /// Event handler (taken out during the run loop)
    events: Option<EventHandler>,
    /// Sender used by spawned request tasks to post resolutions
    event_tx: UnboundedSender<AppEvent>,
    /// Whether the app should quit
    should_quit: bool,
    /// Chat endpoint client
    client: ChatClient,
    /// Color theme
    pub theme: Theme,
    /// Conversation state
    pub controller: ChatController,
    /// Text input area
    pub input: TextArea<'static>,
    /// Message list scroll state
    pub message_list_state: MessageListState,
    /// Animation tick counter for the pending indicator
    pub tick: usize,
}

impl App {
    /// Create a new TUI application
    pub fn new(settings: Settings) -> Result<Self> {
        // Initialize terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Detect Shift+Enter where the terminal supports the kitty keyboard
        // protocol; Alt+Enter is the fallback newline binding otherwise.
        if crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false) {
            let _ = execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            );
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let theme = Theme::dark();
        let input = Self::build_input(&theme);

        // Tick rate doubles as the pending spinner cadence
        let events = EventHandler::new(Duration::from_millis(80));
        let event_tx = events.sender();

        Ok(Self {
            terminal: Some(terminal),
            events: Some(events),
            event_tx,
            should_quit: false,
            client: ChatClient::new(settings.endpoint),
            theme,
            controller: ChatController::new(),
            input,
            message_list_state: MessageListState::default(),
            tick: 0,
        })
    }

    /// URL the client posts to, shown in the header.
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Run the event loop until quit
    pub async fn run(&mut self) -> Result<()> {
        // Take terminal and events out of self to avoid borrow conflicts
        // while drawing
        let mut terminal = self.terminal.take().expect("Terminal not initialized");
        let mut events = self.events.take().expect("Events not initialized");

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if let Some(event) = events.next().await {
                self.handle_event(event);
            }
        }

        self.terminal = Some(terminal);
        self.events = Some(events);

        Ok(())
    }

    /// Handle an application event
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Paste(text) => {
                self.input.insert_str(&text);
            }
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {
                if self.controller.is_waiting() {
                    self.tick = self.tick.wrapping_add(1);
                }
            }
            AppEvent::Reply {
                pending_id,
                outcome,
            } => {
                self.controller.resolve(&pending_id, outcome);
                self.message_list_state.scroll_to_bottom();
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
                self.should_quit = true;
            }
            (_, KeyCode::PageUp) => self.message_list_state.scroll_up(PAGE_SCROLL),
            (_, KeyCode::PageDown) => self.message_list_state.scroll_down(PAGE_SCROLL),
            _ if is_submit_key(&key) => self.submit(),
            _ if is_newline_key(&key) => {
                self.input.insert_newline();
            }
            // Everything else goes to the textarea
            _ => {
                self.input.input(Input::from(key));
            }
        }
    }

    /// Submit the current input.
    ///
    /// Blank input is rejected by the controller and the field is left
    /// untouched. An accepted submission clears the input and dispatches
    /// the request as its own task; the resolution comes back through the
    /// event channel.
    fn submit(&mut self) {
        let content = self.input.lines().join("\n");
        let Some(submission) = self.controller.submit(&content) else {
            return;
        };

        self.input = Self::build_input(&self.theme);
        self.message_list_state.scroll_to_bottom();

        tokio::spawn(fetch_reply(
            self.client.clone(),
            submission.text,
            submission.pending_id,
            self.event_tx.clone(),
        ));
    }

    fn build_input(theme: &Theme) -> TextArea<'static> {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        input.set_placeholder_text("Type a message...");
        input.set_placeholder_style(Style::default().fg(theme.text_muted));
        input.set_style(Style::default().fg(theme.text));
        input.move_cursor(CursorMove::End);
        input
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal - reverse order of setup
        let mut stdout = io::stdout();
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

/// Enter with no modifier held submits the input.
fn is_submit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter && key.modifiers == KeyModifiers::NONE
}

/// Shift+Enter inserts a newline; Alt+Enter is the fallback for terminals
/// that cannot report the Shift modifier on Enter.
fn is_newline_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
        && (key.modifiers == KeyModifiers::SHIFT || key.modifiers == KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_enter_submits() {
        assert!(is_submit_key(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_modified_enter_does_not_submit() {
        assert!(!is_submit_key(&key(KeyCode::Enter, KeyModifiers::SHIFT)));
        assert!(!is_submit_key(&key(KeyCode::Enter, KeyModifiers::ALT)));
        assert!(!is_submit_key(&key(KeyCode::Enter, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shift_or_alt_enter_inserts_newline() {
        assert!(is_newline_key(&key(KeyCode::Enter, KeyModifiers::SHIFT)));
        assert!(is_newline_key(&key(KeyCode::Enter, KeyModifiers::ALT)));
        assert!(!is_newline_key(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_newline_key(&key(KeyCode::Char('j'), KeyModifiers::SHIFT)));
    }
}
