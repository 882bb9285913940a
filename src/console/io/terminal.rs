//! # Terminal Streams
//!
//! crossterm-backed [`EventStream`] and [`RenderStream`] for the live console.
//! Every escape sequence reqline emits goes out through [`TerminalRenderStream`].

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, Command, ExecutableCommand};
use std::io::{self, Write};
use std::time::Duration;

/// Keyboard, paste and resize events from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Console output over any writer; stdout in production
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Write one command and flush it straight away
    fn apply(&mut self, command: impl Command) -> Result<()> {
        self.writer.execute(command)?;
        Ok(())
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        self.apply(terminal::Clear(ClearType::All))
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.apply(cursor::MoveTo(x, y))
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.apply(cursor::Hide)
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.apply(cursor::Show)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.apply(EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.apply(LeaveAlternateScreen)
    }

    // Raw mode is a tty setting, not an escape sequence
    fn enable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::enable_raw_mode()?)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::disable_raw_mode()?)
    }

    fn enable_bracketed_paste(&mut self) -> Result<()> {
        self.apply(EnableBracketedPaste)
    }

    fn disable_bracketed_paste(&mut self) -> Result<()> {
        self.apply(DisableBracketedPaste)
    }
}
