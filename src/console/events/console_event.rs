//! # Console Events
//!
//! Everything that enters the controller's single event path: terminal input
//! translated from crossterm, and outcomes of background dispatches.

use crate::console::services::DispatchOutcome;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// An event processed by the controller, strictly in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    /// Key pressed
    Key(KeyEvent),

    /// Text pasted through bracketed paste
    Paste(String),

    /// Terminal resized
    Resize { width: u16, height: u16 },

    /// A background dispatch finished and its outcome re-enters the event path
    DispatchCompleted(DispatchOutcome),
}

impl ConsoleEvent {
    /// Translate a crossterm event, dropping the ones the console ignores
    /// (mouse, focus gained/lost, key releases)
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            Event::Paste(text) => Some(Self::Paste(text)),
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}
