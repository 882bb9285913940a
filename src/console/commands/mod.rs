//! # Global Commands
//!
//! Key bindings that act regardless of which region is focused. Each
//! command checks relevance against a read-only snapshot and produces
//! [`CommandEvent`]s; the controller decides how to apply them.

pub mod app;
pub mod context;
pub mod events;
pub mod focus;
pub mod request;

pub use app::AppTerminateCommand;
pub use context::{CommandContext, SessionSnapshot};
pub use events::CommandEvent;
pub use focus::AdvanceFocusCommand;
pub use request::SendRequestCommand;

use anyhow::Result;
use crossterm::event::KeyEvent;

/// A global key binding
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the given context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

/// Ordered set of global commands; the first relevant one wins
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Registry with quit, advance-focus and send, checked in that order
    pub fn new() -> Self {
        Self {
            commands: vec![
                Box::new(AppTerminateCommand),
                Box::new(AdvanceFocusCommand),
                Box::new(SendRequestCommand),
            ],
        }
    }

    /// Run the first relevant command; an unmatched key yields no events
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Command {} matched {:?}", command.name(), event);
                return command.execute(event, context);
            }
        }
        Ok(Vec::new())
    }

    /// Names in evaluation order
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.name()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
