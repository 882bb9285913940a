//! # Screen Composition
//!
//! Pure layout of the four regions, their labels and the footer into rows
//! of styled spans. Nothing here touches the terminal.
//!
//! ```text
//! Method:    URL:
//! ┃ GET      │ http://example.test/ok
//! Body:
//! │ {"x":1}
//! │ ...
//! Response:
//! │ pong
//! │ ...
//! Tab: next field  Ctrl+R: send  Ctrl+C: quit
//! ```

use crate::config::{BODY_REGION_HEIGHT, METHOD_REGION_WIDTH, MIN_RESPONSE_REGION_HEIGHT, Theme};
use crate::console::events::Region;
use crate::console::models::StatusLine;
use crate::console::regions::{line_text, RegionSet, StyledLine};
use crossterm::style::{style, Color, StyledContent, Stylize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns between the method region and the URL region
const COLUMN_GAP: u16 = 1;

/// Rows taken by everything except the response region
const FIXED_ROWS: u16 = 1 + 1 + 1 + BODY_REGION_HEIGHT + 1 + 1;

/// A fully composed frame
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub rows: Vec<StyledLine>,
    /// Absolute cursor position of the focused region
    pub cursor: Option<(u16, u16)>,
}

impl Screen {
    /// Unstyled text of every row
    pub fn plain_rows(&self) -> Vec<String> {
        self.rows.iter().map(|row| line_text(row)).collect()
    }

    /// Whether any row contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.plain_rows().iter().any(|row| row.contains(needle))
    }
}

/// Height left for the response region at a given terminal height
pub fn response_height(terminal_height: u16) -> u16 {
    terminal_height
        .saturating_sub(FIXED_ROWS)
        .max(MIN_RESPONSE_REGION_HEIGHT)
}

/// Compose the whole frame for a terminal of `width` x `height` cells
pub fn compose(
    regions: &RegionSet,
    focused: Region,
    status: &StatusLine,
    width: u16,
    height: u16,
) -> Screen {
    let theme = regions.theme();
    let url_column = METHOD_REGION_WIDTH + COLUMN_GAP;
    let url_width = width.saturating_sub(url_column).max(1);

    let mut rows: Vec<StyledLine> = Vec::new();
    let mut cursor = None;

    // Method and URL share their rows
    let mut header = vec![label(Region::Method, focused, theme)];
    pad_to(&mut header, url_column);
    header.push(label(Region::Url, focused, theme));
    rows.push(header);

    let method_view = regions.get(Region::Method).render(METHOD_REGION_WIDTH, 1);
    let url_view = regions.get(Region::Url).render(url_width, 1);
    let top = rows.len() as u16;
    for (mut line, url_line) in method_view.lines.into_iter().zip(url_view.lines) {
        pad_to(&mut line, url_column);
        line.extend(url_line);
        rows.push(line);
    }
    cursor = cursor.or(offset(method_view.cursor, 0, top));
    cursor = cursor.or(offset(url_view.cursor, url_column, top));

    rows.push(vec![label(Region::Body, focused, theme)]);
    let body_view = regions.get(Region::Body).render(width, BODY_REGION_HEIGHT);
    cursor = cursor.or(offset(body_view.cursor, 0, rows.len() as u16));
    rows.extend(body_view.lines);

    rows.push(vec![label(Region::Response, focused, theme)]);
    let response_view = regions
        .get(Region::Response)
        .render(width, response_height(height));
    cursor = cursor.or(offset(response_view.cursor, 0, rows.len() as u16));
    rows.extend(response_view.lines);

    rows.push(footer(status, width));

    Screen { rows, cursor }
}

fn label(region: Region, focused: Region, theme: &Theme) -> StyledContent<String> {
    let text = region.label().to_string();
    if region == focused {
        text.with(theme.accent).bold()
    } else {
        style(text)
    }
}

fn footer(status: &StatusLine, width: u16) -> StyledLine {
    let text: String = status
        .display_text()
        .chars()
        .scan(0usize, |used, ch| {
            *used += ch.width().unwrap_or(0);
            (*used <= usize::from(width)).then_some(ch)
        })
        .collect();
    vec![text.with(Color::DarkGrey)]
}

/// Pad a row with spaces until it is `column` cells wide
fn pad_to(line: &mut StyledLine, column: u16) {
    let used: usize = line.iter().map(|span| span.content().width()).sum();
    let wanted = usize::from(column);
    if used < wanted {
        line.push(style(" ".repeat(wanted - used)));
    }
}

fn offset(cursor: Option<(u16, u16)>, column: u16, row: u16) -> Option<(u16, u16)> {
    cursor.map(|(x, y)| (x.saturating_add(column), y.saturating_add(row)))
}
