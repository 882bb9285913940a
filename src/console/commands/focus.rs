//! # Focus Commands
//!
//! Cycling focus through the four regions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

/// Advance focus to the next region (Tab)
pub struct AdvanceFocusCommand;

impl Command for AdvanceFocusCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        let relevant = matches!(event.code, KeyCode::Tab) && event.modifiers.is_empty();
        if relevant {
            tracing::debug!(
                "AdvanceFocusCommand: Tab pressed in {:?}",
                context.state.focused_region
            );
        }
        relevant
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusAdvanceRequested])
    }

    fn name(&self) -> &'static str {
        "AdvanceFocus"
    }
}
