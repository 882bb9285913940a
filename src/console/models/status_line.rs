//! # Status Line Model
//!
//! State shown in the one-line footer under the response region.

/// Key hints shown when nothing else needs saying
pub const KEY_HINTS: &str = "Tab: next field  Ctrl+R: send  Ctrl+C: quit";

/// Footer shown while a request is outstanding
pub const SENDING_MESSAGE: &str = "Sending...";

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Temporary message, replaced by the next one
    status_message: Option<String>,

    /// Whether a request is currently executing
    is_executing: bool,

    /// Duration of the last completed request in milliseconds
    last_duration_ms: Option<u64>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_executing(&mut self, executing: bool) {
        self.is_executing = executing;
    }

    pub fn is_executing(&self) -> bool {
        self.is_executing
    }

    pub fn set_last_duration_ms(&mut self, duration_ms: u64) {
        self.last_duration_ms = Some(duration_ms);
    }

    pub fn last_duration_ms(&self) -> Option<u64> {
        self.last_duration_ms
    }

    /// Text of the footer: executing state first, then any message, then hints
    pub fn display_text(&self) -> String {
        if self.is_executing {
            return SENDING_MESSAGE.to_string();
        }

        let mut parts = Vec::new();
        if let Some(message) = &self.status_message {
            parts.push(message.clone());
        }
        if let Some(duration_ms) = self.last_duration_ms {
            parts.push(format!("{duration_ms} ms"));
        }
        parts.push(KEY_HINTS.to_string());
        parts.join("  |  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_status_should_show_key_hints() {
        assert_eq!(StatusLine::new().display_text(), KEY_HINTS);
    }

    #[test]
    fn executing_should_override_everything() {
        let mut status = StatusLine::new();
        status.set_status_message("hello");
        status.set_executing(true);
        assert_eq!(status.display_text(), SENDING_MESSAGE);
    }

    #[test]
    fn message_and_duration_should_precede_hints() {
        let mut status = StatusLine::new();
        status.set_status_message("Request failed");
        status.set_last_duration_ms(42);
        assert_eq!(
            status.display_text(),
            format!("Request failed  |  42 ms  |  {KEY_HINTS}")
        );
    }

    #[test]
    fn cleared_message_should_disappear() {
        let mut status = StatusLine::new();
        status.set_status_message("x");
        status.clear_status_message();
        assert_eq!(status.status_message(), None);
    }
}
