//! # Console Application Controller
//!
//! The single router for every event. It owns the session, the four regions
//! and the footer, runs the focus-cycling state machine and starts request
//! dispatches. Dispatches run on a blocking task; their outcomes come back
//! through a channel and are applied here, on the same event path as input.

use crate::config::ConsoleConfig;
use crate::console::{
    commands::{CommandContext, CommandEvent, CommandRegistry, SessionSnapshot},
    events::{ConsoleEvent, Region, RegionCapabilities},
    io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream},
    models::{Session, StatusLine},
    regions::RegionSet,
    services::{
        DispatchOutcome, PreparedRequest, ReqwestExecutor, RequestDraft, RequestExecutor,
    },
    views::{compose, Screen, TerminalRenderer, ViewRenderer},
};
use anyhow::{anyhow, Result};
use crossterm::event::KeyEvent;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// How long to wait for terminal input before checking for finished dispatches
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const ALREADY_IN_FLIGHT_MESSAGE: &str = "A request is already in flight";
const NOT_SENT_MESSAGE: &str = "Request not sent";
const RECEIVED_MESSAGE: &str = "Response received";
const FAILED_MESSAGE: &str = "Request failed";

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    session: Session,
    regions: RegionSet,
    status_line: StatusLine,
    command_registry: CommandRegistry,
    executor: Arc<dyn RequestExecutor>,
    outcome_sender: UnboundedSender<DispatchOutcome>,
    outcome_receiver: UnboundedReceiver<DispatchOutcome>,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
    should_quit: bool,
    dispatch_started: Option<Instant>,
}

impl AppController<TerminalEventStream, TerminalRenderStream<io::Stdout>> {
    /// Controller over the real terminal
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        Self::with_io_streams(
            config,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Controller with injected I/O streams and the reqwest executor
    pub fn with_io_streams(
        config: &ConsoleConfig,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let executor = Arc::new(ReqwestExecutor::new(config.status_policy, config.timeout));
        Self::with_executor(config, executor, event_stream, render_stream)
    }

    /// Controller with injected I/O streams and a custom executor
    pub fn with_executor(
        config: &ConsoleConfig,
        executor: Arc<dyn RequestExecutor>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (outcome_sender, outcome_receiver) = mpsc::unbounded_channel();

        let session = Session::new();
        let mut regions = RegionSet::new(config.theme);
        regions.apply_focus(session.focused_region());

        Ok(Self {
            session,
            regions,
            status_line: StatusLine::new(),
            command_registry: CommandRegistry::new(),
            executor,
            outcome_sender,
            outcome_receiver,
            view_renderer,
            event_stream,
            should_quit: false,
            dispatch_started: None,
        })
    }

    /// Run the main loop until quit; the terminal is restored even on error
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;

        let result = self.event_loop().await;
        if let Err(error) = &result {
            tracing::error!("Event loop failed: {:#}", error);
            self.session.set_last_error(format!("{error:#}"));
        }

        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    /// Run on a dedicated multi-threaded runtime and return once the loop
    /// ends. A dispatch still on its blocking thread is abandoned, not joined.
    ///
    /// Must not be called from within a tokio runtime.
    pub fn run_blocking(&mut self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let result = runtime.block_on(self.run());
        runtime.shutdown_background();
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render()?;

        while !self.should_quit {
            let mut dirty = false;

            while let Ok(outcome) = self.outcome_receiver.try_recv() {
                self.process_event(ConsoleEvent::DispatchCompleted(outcome))?;
                dirty = true;
            }

            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                if let Some(event) = ConsoleEvent::from_terminal(event) {
                    self.process_event(event)?;
                    dirty = true;
                }
            } else {
                // Give the dispatch task a chance on single-threaded runtimes
                tokio::task::yield_now().await;
            }

            if dirty && !self.should_quit {
                self.render()?;
            }
        }

        Ok(())
    }

    /// Apply one event to the session and regions
    pub fn process_event(&mut self, event: ConsoleEvent) -> Result<()> {
        match event {
            ConsoleEvent::Key(key) => self.handle_key(key)?,
            ConsoleEvent::Paste(text) => {
                if let Some(region) = self.editable_focus() {
                    self.regions.get_mut(region).insert_text(&text);
                }
            }
            ConsoleEvent::Resize { width, height } => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.view_renderer.update_size(width, height);
            }
            ConsoleEvent::DispatchCompleted(outcome) => self.complete_dispatch(outcome),
        }
        Ok(())
    }

    /// The focused editable region sees every key first, command keys
    /// included; then the global commands get their turn
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(region) = self.editable_focus() {
            let consumed = self.regions.get_mut(region).handle_key(&key);
            tracing::trace!("{:?} region consumed {:?}: {}", region, key.code, consumed);
        }

        let context = CommandContext::new(SessionSnapshot::capture(&self.session, &self.regions));
        for event in self.command_registry.process_event(key, &context)? {
            self.apply_command_event(event);
        }
        Ok(())
    }

    /// The focused region, if it accepts user input
    fn editable_focus(&self) -> Option<Region> {
        let region = self.session.focused_region();
        region
            .capabilities()
            .contains(RegionCapabilities::EDITABLE)
            .then_some(region)
    }

    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            CommandEvent::FocusAdvanceRequested => {
                let previous = self.session.focused_region();
                let focused = self.session.advance_focus();
                self.regions.apply_focus(focused);
                tracing::debug!("Focus {:?} -> {:?}", previous, focused);
            }
            CommandEvent::SendRequested { draft } => self.begin_dispatch(draft),
        }
    }

    /// Validate the draft and start the exchange off the event path
    ///
    /// Must be called from within a tokio runtime.
    fn begin_dispatch(&mut self, draft: RequestDraft) {
        if self.session.is_in_flight() {
            tracing::warn!("Send rejected: a request is already in flight");
            self.status_line.set_status_message(ALREADY_IN_FLIGHT_MESSAGE);
            return;
        }

        let request = match PreparedRequest::prepare(&draft) {
            Ok(request) => request,
            Err(unsupported) => {
                tracing::warn!("Not sending request: {}", unsupported);
                self.apply_outcome(DispatchOutcome::Failure(unsupported.to_string()));
                self.status_line.set_status_message(NOT_SENT_MESSAGE);
                return;
            }
        };

        tracing::info!("Dispatching {} {}", request.method(), request.url());
        self.session.set_in_flight(true);
        self.status_line.clear_status_message();
        self.status_line.set_executing(true);
        self.dispatch_started = Some(Instant::now());

        let executor = Arc::clone(&self.executor);
        let sender = self.outcome_sender.clone();
        tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || executor.execute(&request))
                .await
                .unwrap_or_else(|error| {
                    DispatchOutcome::Failure(format!("Request task failed: {error}"))
                });
            if sender.send(outcome).is_err() {
                tracing::debug!("Dispatch outcome discarded: controller is gone");
            }
        });
    }

    fn complete_dispatch(&mut self, outcome: DispatchOutcome) {
        self.session.set_in_flight(false);
        self.status_line.set_executing(false);
        if let Some(started) = self.dispatch_started.take() {
            self.status_line
                .set_last_duration_ms(started.elapsed().as_millis() as u64);
        }
        self.status_line.set_status_message(if outcome.is_success() {
            RECEIVED_MESSAGE
        } else {
            FAILED_MESSAGE
        });
        tracing::info!("Dispatch completed (success: {})", outcome.is_success());
        self.apply_outcome(outcome);
    }

    /// Show an outcome in the response region; focus is left alone
    fn apply_outcome(&mut self, outcome: DispatchOutcome) {
        self.regions
            .get_mut(Region::Response)
            .set_text(outcome.display_text());
        self.session.set_last_response(outcome);
    }

    /// Wait for the outstanding dispatch, if any, and apply its outcome
    pub async fn wait_for_dispatch(&mut self) -> Result<()> {
        if !self.session.is_in_flight() {
            return Ok(());
        }
        let outcome = self
            .outcome_receiver
            .recv()
            .await
            .ok_or_else(|| anyhow!("Dispatch channel closed"))?;
        self.process_event(ConsoleEvent::DispatchCompleted(outcome))
    }

    /// Compose the current frame at the renderer's size
    pub fn screen(&self) -> Screen {
        let (width, height) = self.view_renderer.terminal_size();
        compose(
            &self.regions,
            self.session.focused_region(),
            &self.status_line,
            width,
            height,
        )
    }

    fn render(&mut self) -> Result<()> {
        let screen = self.screen();
        self.view_renderer.render(&screen)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
