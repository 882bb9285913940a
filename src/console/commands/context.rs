//! # Command Context
//!
//! Read-only view of the session that commands decide against.

use crate::console::events::Region;
use crate::console::models::Session;
use crate::console::regions::RegionSet;

/// Read-only snapshot of session and region state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub focused_region: Region,
    pub in_flight: bool,
    pub method_text: String,
    pub url_text: String,
    pub body_text: String,
}

impl SessionSnapshot {
    /// Capture the current state, after the focused region has seen the event
    pub fn capture(session: &Session, regions: &RegionSet) -> Self {
        Self {
            focused_region: session.focused_region(),
            in_flight: session.is_in_flight(),
            method_text: regions.text(Region::Method),
            url_text: regions.text(Region::Url),
            body_text: regions.text(Region::Body),
        }
    }

    /// Snapshot with empty fields, for a given focus
    pub fn empty(focused_region: Region) -> Self {
        Self {
            focused_region,
            in_flight: false,
            method_text: String::new(),
            url_text: String::new(),
            body_text: String::new(),
        }
    }
}

/// Context available to all commands
pub struct CommandContext {
    pub state: SessionSnapshot,
}

impl CommandContext {
    pub fn new(state: SessionSnapshot) -> Self {
        Self { state }
    }
}
