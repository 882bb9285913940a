//! # Session Model
//!
//! The single long-lived piece of interaction state. Only the controller
//! mutates it, always on the event path.

use crate::console::events::Region;
use crate::console::services::DispatchOutcome;

#[derive(Debug, Clone)]
pub struct Session {
    focused_region: Region,
    last_response: Option<DispatchOutcome>,
    last_error: Option<String>,
    in_flight: bool,
}

impl Session {
    /// Fresh session: method focused, nothing sent yet
    pub fn new() -> Self {
        Self {
            focused_region: Region::Method,
            last_response: None,
            last_error: None,
            in_flight: false,
        }
    }

    pub fn focused_region(&self) -> Region {
        self.focused_region
    }

    /// Move focus to the next region in the cycle and return it
    pub fn advance_focus(&mut self) -> Region {
        self.focused_region = self.focused_region.next();
        self.focused_region
    }

    pub fn last_response(&self) -> Option<&DispatchOutcome> {
        self.last_response.as_ref()
    }

    pub fn set_last_response(&mut self, outcome: DispatchOutcome) {
        self.last_response = Some(outcome);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_last_error(&mut self, error: String) {
        self.last_error = Some(error);
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
