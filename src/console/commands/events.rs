//! # Command Events
//!
//! What a global command asks the controller to do. Commands suggest,
//! the controller decides.

use crate::console::services::RequestDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// End the event loop
    QuitRequested,

    /// Rotate focus to the next region
    FocusAdvanceRequested,

    /// Send the request described by the three request regions
    SendRequested { draft: RequestDraft },
}

impl CommandEvent {
    pub fn send(draft: RequestDraft) -> Self {
        Self::SendRequested { draft }
    }
}
