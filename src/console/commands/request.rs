//! # HTTP Request Commands

use crate::console::services::RequestDraft;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Send the request (Ctrl+R), from any region
pub struct SendRequestCommand;

impl Command for SendRequestCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('r')) && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let state = &context.state;
        let draft = RequestDraft::new(
            state.method_text.clone(),
            state.url_text.clone(),
            state.body_text.clone(),
        );
        Ok(vec![CommandEvent::send(draft)])
    }

    fn name(&self) -> &'static str {
        "SendRequest"
    }
}
