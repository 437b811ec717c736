//! Main Application
//!
//! The App struct manages the TUI lifecycle:
//! - Event loop (keyboard, mouse, resize)
//! - Per-frame animation updates
//! - Rendering the conversation and a one-line status bar
//!
//! Rendering is immediate-mode: every frame re-evaluates the same view
//! functions over the current [`ConversationState`].

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::{Frame, Terminal};

use crate::config::AppConfig;
use crate::message::Message;
use crate::theme::Theme;
use crate::widgets::{Conversation, ConversationState};

/// Status bar height (lines)
const STATUS_HEIGHT: u16 = 1;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: isize = 3;

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,

    // === Content ===
    /// Messages being shown, in display order
    messages: Vec<Message>,
    /// Scroll, selection and per-card expand state
    conversation: ConversationState,
    /// Active palette
    theme: Theme,

    // === Misc State ===
    /// Last frame time (for animations)
    last_frame: Instant,
    /// Frame budget
    frame_duration: Duration,
}

impl App {
    /// Create a new App over a message list
    pub fn new(config: &AppConfig, messages: Vec<Message>) -> Self {
        let mut conversation = ConversationState::new(config.animation);
        conversation.sync_len(messages.len());

        Self {
            running: true,
            messages,
            conversation,
            theme: Theme::for_mode(config.theme),
            last_frame: Instant::now(),
            frame_duration: config.frame,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e.into()),
                        None => self.running = false,
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(self.frame_duration) => {}
            }

            self.update();
            self.render(terminal)?;

            // Frame rate limiting while animations run
            let elapsed = frame_start.elapsed();
            if self.conversation.is_animating() && elapsed < self.frame_duration {
                tokio::time::sleep(self.frame_duration - elapsed).await;
            }
        }

        tracing::info!("Event loop finished");
        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => tracing::debug!(w, h, "Terminal resized"),
            _ => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Selection
            KeyCode::Up | KeyCode::Char('k') => self.conversation.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.conversation.select_next(),

            // Tap the selected card
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.conversation.selected().is_none() {
                    self.conversation.select_next();
                }
                self.conversation.toggle_selected();
            }

            // Scrolling
            KeyCode::PageUp => self.conversation.scroll_by(-self.page_size()),
            KeyCode::PageDown => self.conversation.scroll_by(self.page_size()),
            KeyCode::Home => self.conversation.scroll_to_top(),
            KeyCode::End => self.conversation.scroll_to_bottom(),

            // Light/dark
            KeyCode::Char('t') => self.flip_theme(),

            _ => {}
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.conversation.card_at(mouse.column, mouse.row) {
                    self.conversation.select(Some(index));
                    self.conversation.toggle(index);
                }
            }
            MouseEventKind::ScrollUp => self.conversation.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.conversation.scroll_by(WHEEL_STEP),
            _ => {}
        }
    }

    /// Switch between the light and dark palettes
    pub fn flip_theme(&mut self) {
        self.theme = Theme::for_mode(self.theme.mode.flipped());
        tracing::debug!(theme = %self.theme.mode, "Switched theme");
    }

    /// Advance animations by wall-clock time since the last frame
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.tick(delta);
    }

    /// Advance animations by `delta`
    pub fn tick(&mut self, delta: Duration) {
        self.conversation.update(delta);
    }

    /// Render the UI
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        terminal.draw(|frame| self.draw(frame))?;
        Ok(())
    }

    /// Draw one frame
    fn draw(&mut self, frame: &mut Frame) {
        let [conversation_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
                .areas(frame.area());

        frame.render_stateful_widget(
            Conversation::new(&self.messages, &self.theme),
            conversation_area,
            &mut self.conversation,
        );
        self.render_status(status_area, frame.buffer_mut());
    }

    /// Render status bar
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.status).bg(self.theme.surface);
        buf.set_style(area, style);

        let position = match self.conversation.selected() {
            Some(i) => format!("{}/{}", i + 1, self.messages.len()),
            None => format!("{} messages", self.messages.len()),
        };
        let status = format!(
            " {} | {} | Up/Down select, Enter expand, t theme, Esc quit",
            self.theme.mode, position
        );
        buf.set_stringn(area.x, area.y, &status, area.width as usize, style);
    }

    fn page_size(&self) -> isize {
        (self.conversation.viewport_height() / 2).max(1) as isize
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }
}
