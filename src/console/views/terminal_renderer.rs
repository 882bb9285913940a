//! # Terminal Renderer
//!
//! Writes composed [`Screen`]s to a [`RenderStream`].

use super::Screen;
use crate::console::io::{RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::queue;
use crossterm::style::PrintStyledContent;
use std::io::Write;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal: alternate screen, raw mode, bracketed paste
    fn initialize(&mut self) -> Result<()>;

    /// Draw a full frame
    fn render(&mut self, screen: &Screen) -> Result<()>;

    fn update_size(&mut self, width: u16, height: u16);

    fn terminal_size(&self) -> TerminalSize;

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer over any render stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
    initialized: bool,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
            initialized: false,
        })
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enable_bracketed_paste()?;
        self.initialized = true;
        tracing::debug!("Terminal initialized at {:?}", self.terminal_size);
        Ok(())
    }

    fn render(&mut self, screen: &Screen) -> Result<()> {
        let (_, height) = self.terminal_size;

        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        for (row, line) in screen.rows.iter().enumerate().take(usize::from(height)) {
            self.render_stream.move_cursor(0, row as u16)?;
            for span in line {
                queue!(self.render_stream, PrintStyledContent(span.clone()))?;
            }
        }

        if let Some((x, y)) = screen.cursor.filter(|(_, y)| *y < height) {
            self.render_stream.move_cursor(x, y)?;
            self.render_stream.show_cursor()?;
        }

        self.render_stream.flush()?;
        Ok(())
    }

    fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    fn cleanup(&mut self) -> Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;
        self.render_stream.disable_bracketed_paste()?;
        self.render_stream.show_cursor()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.leave_alternate_screen()?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::io::{MockRenderStream, RenderCommand};
    use crossterm::style::Stylize;

    fn screen_with(rows: &[&str], cursor: Option<(u16, u16)>) -> Screen {
        Screen {
            rows: rows
                .iter()
                .map(|text| vec![text.to_string().bold()])
                .collect(),
            cursor,
        }
    }

    #[test]
    fn initialize_and_cleanup_should_bracket_the_session() {
        let stream = MockRenderStream::new();
        let mut renderer = TerminalRenderer::with_render_stream(stream.clone()).unwrap();

        renderer.initialize().unwrap();
        renderer.cleanup().unwrap();

        assert_eq!(
            stream.get_commands(),
            vec![
                RenderCommand::EnterAlternateScreen,
                RenderCommand::EnableRawMode,
                RenderCommand::EnableBracketedPaste,
                RenderCommand::DisableBracketedPaste,
                RenderCommand::ShowCursor,
                RenderCommand::DisableRawMode,
                RenderCommand::LeaveAlternateScreen,
            ]
        );
    }

    #[test]
    fn cleanup_without_initialize_should_do_nothing() {
        let stream = MockRenderStream::new();
        let mut renderer = TerminalRenderer::with_render_stream(stream.clone()).unwrap();

        renderer.cleanup().unwrap();
        assert!(stream.get_commands().is_empty());
    }

    #[test]
    fn render_should_write_rows_and_place_cursor() {
        let stream = MockRenderStream::new();
        let mut renderer = TerminalRenderer::with_render_stream(stream.clone()).unwrap();

        renderer
            .render(&screen_with(&["first", "second"], Some((3, 1))))
            .unwrap();

        let buffer = stream.get_buffer_string();
        assert!(buffer.contains("first"));
        assert!(buffer.contains("second"));
        assert!(stream.has_command(&RenderCommand::MoveCursor(0, 1)));
        assert!(stream.has_command(&RenderCommand::MoveCursor(3, 1)));
        assert_eq!(stream.get_commands().last(), Some(&RenderCommand::Flush));
    }

    #[test]
    fn render_should_drop_rows_below_the_terminal() {
        let stream = MockRenderStream::with_size((20, 1));
        let mut renderer = TerminalRenderer::with_render_stream(stream.clone()).unwrap();

        renderer
            .render(&screen_with(&["visible", "hidden"], Some((0, 1))))
            .unwrap();

        let buffer = stream.get_buffer_string();
        assert!(buffer.contains("visible"));
        assert!(!buffer.contains("hidden"));
        assert!(!stream.has_command(&RenderCommand::ShowCursor));
    }

    #[test]
    fn update_size_should_change_visible_rows() {
        let stream = MockRenderStream::with_size((20, 1));
        let mut renderer = TerminalRenderer::with_render_stream(stream.clone()).unwrap();
        renderer.update_size(20, 2);

        renderer
            .render(&screen_with(&["visible", "now too"], None))
            .unwrap();

        assert_eq!(renderer.terminal_size(), (20, 2));
        assert!(stream.get_buffer_string().contains("now too"));
    }
}
