use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Terminal input, reduced to what the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Key { code: KeyCode, modifiers: KeyModifiers },
    Resize(u16, u16),
    Tick,
}

impl AppEvent {
    /// Map a crossterm event. Key releases and repeats are dropped so each
    /// press reaches the handlers once.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key {
                code: key.code,
                modifiers: key.modifiers,
            }),
            Event::Resize(w, h) => Some(Self::Resize(w, h)),
            _ => None,
        }
    }
}

/// Polls the terminal, yielding `Tick` when nothing arrives in time.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(AppEvent::Tick);
        }
        Ok(AppEvent::from_terminal(event::read()?).unwrap_or(AppEvent::Tick))
    }
}
