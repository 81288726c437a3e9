//! Main Application
//!
//! `App` owns the core [`Guide`] plus the view-local state (scroll
//! position, frame timing) and runs the event loop: an async crossterm
//! event stream raced against a frame tick. Every iteration feeds the
//! measured frame delta to the guide, so fades and confetti advance at
//! the same pace regardless of how events arrive.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use festejo_core::{Guide, GuideEvent, Page, StateStore};

use crate::view;
use crate::widgets::TextBlockState;

/// Frame tick, ~30 FPS: smooth enough for the fades without burning CPU
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main application state
pub struct App {
    guide: Guide,
    scroll: TextBlockState,
    running: bool,
    last_frame: Instant,
}

impl App {
    /// App restored from the standard per-user storage locations
    #[must_use]
    pub fn new() -> Self {
        Self::with_guide(Guide::new(StateStore::open()))
    }

    /// App over a prepared guide (tests use a temp-dir store)
    #[must_use]
    pub fn with_guide(guide: Guide) -> Self {
        Self {
            guide,
            scroll: TextBlockState::default(),
            running: true,
            last_frame: Instant::now(),
        }
    }

    /// The guide, for rendering helpers and tests
    #[must_use]
    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        self.last_frame = Instant::now();

        // First frame immediately, so the intro starts on screen.
        self.draw(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        // Event stream ended or errored: leave cleanly.
                        Some(Err(error)) => {
                            tracing::warn!(%error, "terminal event stream failed");
                            break;
                        }
                        None => break,
                    }
                }

                _ = tokio::time::sleep(FRAME_DURATION) => {}
            }

            self.update();
            self.draw(terminal)?;
        }

        tracing::debug!("event loop stopped");
        Ok(())
    }

    /// Feed the measured frame delta to the guide
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.guide.advance(delta);
    }

    fn draw(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| view::draw(frame, &self.guide, &mut self.scroll))?;
        Ok(())
    }

    /// Translate a key press into a guide event or view action
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            KeyCode::Char('l') => {
                self.guide.handle(GuideEvent::ToggleLanguage);
            }

            KeyCode::Char('1') => self.navigate(Page::Home),
            KeyCode::Char('2') => self.navigate(Page::Schedule),
            KeyCode::Char('3') => self.navigate(Page::Travel),
            KeyCode::Char('4') => self.navigate(Page::Activities),
            KeyCode::Left => self.navigate(self.guide.active_nav().previous()),
            KeyCode::Right | KeyCode::Tab => self.navigate(self.guide.active_nav().next()),

            KeyCode::Up => self.scroll.scroll(-1),
            KeyCode::Down => self.scroll.scroll(1),
            KeyCode::PageUp => self.scroll.scroll(-8),
            KeyCode::PageDown => self.scroll.scroll(8),
            KeyCode::Home => self.scroll.scroll_to_top(),

            _ => {}
        }
    }

    fn navigate(&mut self, page: Page) {
        if self.guide.handle(GuideEvent::Navigate(page)) {
            self.scroll.scroll_to_top();
        }
    }

    /// Whether the event loop is still live
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
