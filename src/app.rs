//! Application state and main event loop.

use crate::domain::{Haiku, HAIKUS};
use crate::error::{AppError, Result};
use crate::ui::input::{Action, InputHandler};
use crate::ui::layout::PanelGeometry;
use crossterm::event::{self, Event};
use ratatui::prelude::*;

/// Lifecycle of the input loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

/// Main application state
pub struct App {
    /// Content table being browsed
    haikus: &'static [Haiku],
    /// Index of the highlighted and displayed haiku
    selected_index: usize,
    /// Current loop state
    state: LoopState,
    /// Panel geometry applied at the last resize
    geometry: PanelGeometry,
    /// Set on resize; the terminal is cleared before the next draw
    needs_clear: bool,

    input_handler: InputHandler,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application over the built-in haiku table
    pub fn new() -> Self {
        Self::with_haikus(HAIKUS)
    }

    /// Create an application over an arbitrary table
    pub fn with_haikus(haikus: &'static [Haiku]) -> Self {
        Self {
            haikus,
            selected_index: 0,
            state: LoopState::Running,
            geometry: PanelGeometry::default(),
            needs_clear: false,
            input_handler: InputHandler::new(),
        }
    }

    pub fn haikus(&self) -> &'static [Haiku] {
        self.haikus
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get the currently selected haiku
    pub fn selected_haiku(&self) -> Option<&'static Haiku> {
        self.haikus.get(self.selected_index)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Panel geometry from the most recent resize
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// Move selection up, wrapping from the first item to the last
    pub fn select_previous(&mut self) {
        let len = self.haikus.len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    /// Move selection down, wrapping from the last item to the first
    pub fn select_next(&mut self) {
        let len = self.haikus.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Recompute panel geometry for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.geometry = PanelGeometry::for_size(width, height);
        self.needs_clear = true;
        tracing::debug!(
            "Terminal resized to {}x{}: list {:?}, content {:?}",
            width,
            height,
            self.geometry.list,
            self.geometry.content
        );
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => match self.input_handler.handle_key(key) {
                Some(Action::MoveUp) => self.select_previous(),
                Some(Action::MoveDown) => self.select_next(),
                Some(Action::Quit) => {
                    tracing::info!("Quit requested");
                    self.state = LoopState::Terminated;
                }
                None => tracing::trace!("Ignoring key {:?}", key.code),
            },
            Event::Resize(width, height) => self.resize(width, height),
            Event::FocusGained | Event::FocusLost | Event::Mouse(_) | Event::Paste(_) => {
                // Nothing to do; the next iteration redraws anyway
            }
        }
    }

    /// Main event loop, blocking on the terminal for each event
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.run_with_events(terminal, || event::read().map_err(AppError::terminal))
    }

    /// Event loop fed by `next_event` instead of the terminal.
    ///
    /// Both panels are redrawn before every event is awaited. Returns once a
    /// quit key has been handled.
    pub fn run_with_events<B, F>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut next_event: F,
    ) -> Result<()>
    where
        B: Backend,
        F: FnMut() -> Result<Event>,
    {
        let size = terminal.size()?;
        self.geometry = PanelGeometry::for_size(size.width, size.height);

        while self.is_running() {
            if self.needs_clear {
                terminal.clear()?;
                self.needs_clear = false;
            }

            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let event = next_event()?;
            self.handle_event(event);
        }

        Ok(())
    }
}
