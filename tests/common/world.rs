use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;
use reqline::config::ConsoleConfig;
use reqline::console::io::{MockEventStream, MockRenderStream};
use reqline::console::services::DispatchOutcome;
use reqline::{AppController, ConsoleEvent, Region};
use wiremock::MockServer;

/// Upper bound for a single dispatch in a scenario
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(10);

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// Map the region names used in feature files to regions
pub fn parse_region(name: &str) -> Region {
    match name {
        "Method" => Region::Method,
        "URL" => Region::Url,
        "Body" => Region::Body,
        "Response" => Region::Response,
        other => panic!("Unknown region '{other}' in step"),
    }
}

/// Scenario state: a real controller driven through mock I/O
#[derive(World)]
#[world(init = Self::new)]
pub struct ReqlineWorld {
    pub controller: TestController,

    /// Shares its recordings with the stream inside the controller
    pub render_stream: MockRenderStream,

    pub mock_server: Option<MockServer>,

    /// Focus captured right before the last send
    pub focus_before_send: Option<Region>,
}

impl std::fmt::Debug for ReqlineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqlineWorld")
            .field("focused_region", &self.controller.session().focused_region())
            .field("in_flight", &self.controller.session().is_in_flight())
            .field("should_quit", &self.controller.should_quit())
            .field("mock_server", &self.mock_server.as_ref().map(|s| s.uri()))
            .field("focus_before_send", &self.focus_before_send)
            .finish()
    }
}

impl ReqlineWorld {
    pub fn new() -> Self {
        Self::with_config(&ConsoleConfig::default())
    }

    pub fn with_config(config: &ConsoleConfig) -> Self {
        let render_stream = MockRenderStream::new();
        let controller =
            AppController::with_io_streams(config, MockEventStream::empty(), render_stream.clone())
                .expect("Failed to create controller");

        Self {
            controller,
            render_stream,
            mock_server: None,
            focus_before_send: None,
        }
    }

    /// Replace the controller, keeping any mock server
    pub fn restart_with(&mut self, config: &ConsoleConfig) {
        let mock_server = self.mock_server.take();
        *self = Self::with_config(config);
        self.mock_server = mock_server;
    }

    pub fn send_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.controller
            .process_event(ConsoleEvent::Key(KeyEvent::new(code, modifiers)))
            .expect("Failed to process key event");
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key_event(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    pub fn paste(&mut self, text: &str) {
        self.controller
            .process_event(ConsoleEvent::Paste(text.to_string()))
            .expect("Failed to process paste");
    }

    pub fn press_tab(&mut self) {
        self.send_key_event(KeyCode::Tab, KeyModifiers::NONE);
    }

    pub fn focused_region(&self) -> Region {
        self.controller.session().focused_region()
    }

    /// Tab until `region` is focused
    pub fn focus(&mut self, region: Region) {
        while self.focused_region() != region {
            self.press_tab();
        }
    }

    /// Type into method, URL and body, then return focus to the method region
    pub fn fill_request(&mut self, method: &str, url: &str, body: &str) {
        for (region, text) in [
            (Region::Method, method),
            (Region::Url, url),
            (Region::Body, body),
        ] {
            self.focus(region);
            self.type_text(text);
        }
        self.focus(Region::Method);
    }

    pub fn mock_url(&self, path: &str) -> String {
        let server = self
            .mock_server
            .as_ref()
            .expect("No mock server was started");
        format!("{}{}", server.uri(), path)
    }

    /// Press Ctrl+R and wait for the outcome to be applied
    pub async fn send_request(&mut self) {
        self.focus_before_send = Some(self.focused_region());
        self.send_key_event(KeyCode::Char('r'), KeyModifiers::CONTROL);
        tokio::time::timeout(DISPATCH_TIMEOUT, self.controller.wait_for_dispatch())
            .await
            .expect("Dispatch timed out")
            .expect("Dispatch failed");
    }

    pub fn region_text(&self, region: Region) -> String {
        self.controller.regions().text(region)
    }

    pub fn last_response(&self) -> Option<&DispatchOutcome> {
        self.controller.session().last_response()
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.controller.screen().contains(text)
    }
}
