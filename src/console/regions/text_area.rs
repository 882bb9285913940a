//! # Text Area
//!
//! The concrete editable text region used for all four fields. Holds the
//! region's own editing state (lines, cursor, focus flag) and renders a
//! cursor-following window of it. Multi-line areas soft-wrap at the region
//! width; single-line areas scroll sideways instead.

use super::{RegionView, TextRegion};
use crate::config::{Theme, SINGLE_LINE_CHAR_LIMIT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Color, ContentStyle, StyledContent, Stylize};
use unicode_width::UnicodeWidthChar;

/// Columns a tab expands to when rendered
const TAB_WIDTH: usize = 4;

/// Prompt bar drawn in front of every row; its colour shows focus
const PROMPT_FOCUSED: &str = "┃ ";
const PROMPT_BLURRED: &str = "│ ";
const PROMPT_WIDTH: u16 = 2;

/// Construction options for a [`TextArea`]
#[derive(Debug, Clone)]
pub struct TextAreaOptions {
    pub placeholder: String,
    pub char_limit: Option<usize>,
    pub multi_line: bool,
    pub text_style: ContentStyle,
    pub accent: Color,
}

#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<String>,
    cursor_line: usize,
    cursor_column: usize,
    focused: bool,
    options: TextAreaOptions,
}

impl TextArea {
    pub fn new(options: TextAreaOptions) -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_column: 0,
            focused: false,
            options,
        }
    }

    /// Single-line field holding the HTTP verb
    pub fn method_field(theme: &Theme) -> Self {
        Self::new(TextAreaOptions {
            placeholder: "GET".to_string(),
            char_limit: Some(SINGLE_LINE_CHAR_LIMIT),
            multi_line: false,
            text_style: ContentStyle::new(),
            accent: theme.accent,
        })
    }

    /// Single-line field holding the target URL
    pub fn url_field(theme: &Theme) -> Self {
        Self::new(TextAreaOptions {
            placeholder: "Enter URL here....".to_string(),
            char_limit: Some(SINGLE_LINE_CHAR_LIMIT),
            multi_line: false,
            text_style: ContentStyle::new(),
            accent: theme.accent,
        })
    }

    /// Multi-line field holding the request payload
    pub fn body_field(theme: &Theme) -> Self {
        Self::new(TextAreaOptions {
            placeholder: "Enter body here....".to_string(),
            char_limit: None,
            multi_line: true,
            text_style: ContentStyle::new(),
            accent: theme.accent,
        })
    }

    /// Multi-line field the controller writes responses into
    pub fn response_field(theme: &Theme) -> Self {
        Self::new(TextAreaOptions {
            placeholder: "Response will be here....".to_string(),
            char_limit: None,
            multi_line: true,
            text_style: ContentStyle::new().with(theme.accent),
            accent: theme.accent,
        })
    }

    /// Cursor as (line, column in characters)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_column)
    }

    fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|line| line.chars().count()).sum();
        chars + self.lines.len() - 1
    }

    fn has_room(&self) -> bool {
        self.options
            .char_limit
            .map_or(true, |limit| self.char_count() < limit)
    }

    fn current_line_len(&self) -> usize {
        self.lines[self.cursor_line].chars().count()
    }

    fn insert_char(&mut self, ch: char) {
        if !self.has_room() {
            return;
        }
        let line = &mut self.lines[self.cursor_line];
        let at = byte_index(line, self.cursor_column);
        line.insert(at, ch);
        self.cursor_column += 1;
    }

    fn insert_newline(&mut self) {
        if !self.options.multi_line || !self.has_room() {
            return;
        }
        let line = &mut self.lines[self.cursor_line];
        let at = byte_index(line, self.cursor_column);
        let rest = line.split_off(at);
        self.cursor_line += 1;
        self.cursor_column = 0;
        self.lines.insert(self.cursor_line, rest);
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor_column > 0 {
            let line = &mut self.lines[self.cursor_line];
            let at = byte_index(line, self.cursor_column - 1);
            line.remove(at);
            self.cursor_column -= 1;
        } else if self.cursor_line > 0 {
            let removed = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_column = self.current_line_len();
            self.lines[self.cursor_line].push_str(&removed);
        }
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor_column < self.current_line_len() {
            let line = &mut self.lines[self.cursor_line];
            let at = byte_index(line, self.cursor_column);
            line.remove(at);
        } else if self.cursor_line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.cursor_column > 0 {
            self.cursor_column -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_column = self.current_line_len();
        }
    }

    fn move_right(&mut self) {
        if self.cursor_column < self.current_line_len() {
            self.cursor_column += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_column = 0;
        }
    }

    fn move_vertically(&mut self, down: bool) {
        if down && self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
        } else if !down && self.cursor_line > 0 {
            self.cursor_line -= 1;
        } else {
            return;
        }
        self.cursor_column = self.cursor_column.min(self.current_line_len());
    }

    fn prompt(&self) -> StyledContent<String> {
        if self.focused {
            PROMPT_FOCUSED.to_string().with(self.options.accent)
        } else {
            PROMPT_BLURRED.to_string().with(Color::DarkGrey)
        }
    }
}

impl TextRegion for TextArea {
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused
            || key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Enter if self.options.multi_line => self.insert_newline(),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_vertically(false),
            KeyCode::Down => self.move_vertically(true),
            KeyCode::Home => self.cursor_column = 0,
            KeyCode::End => self.cursor_column = self.current_line_len(),
            _ => return false,
        }
        true
    }

    fn insert_text(&mut self, text: &str) {
        if !self.focused {
            return;
        }
        for ch in normalize_newlines(text).chars() {
            if ch == '\n' {
                self.insert_newline();
            } else {
                self.insert_char(ch);
            }
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn set_text(&mut self, text: &str) {
        self.lines = normalize_newlines(text)
            .split('\n')
            .map(str::to_string)
            .collect();
        self.cursor_line = 0;
        self.cursor_column = 0;
    }

    fn render(&self, width: u16, height: u16) -> RegionView {
        let height = usize::from(height.max(1));
        let text_width = usize::from(width.saturating_sub(PROMPT_WIDTH).max(1));

        if self.is_empty() {
            let placeholder = clip(&self.options.placeholder, 0, text_width);
            let mut lines = vec![vec![self.prompt(), placeholder.with(Color::DarkGrey)]];
            lines.extend((1..height).map(|_| vec![self.prompt()]));
            let cursor = self.focused.then_some((PROMPT_WIDTH, 0));
            return RegionView { lines, cursor };
        }

        let (rows, (cursor_row, cursor_column)) = if self.options.multi_line {
            self.wrapped_rows(text_width)
        } else {
            self.scrolled_rows(text_width)
        };

        let first_row = (cursor_row + 1).saturating_sub(height);
        let lines = (first_row..first_row + height)
            .map(|index| match rows.get(index) {
                Some(text) => vec![
                    self.prompt(),
                    StyledContent::new(self.options.text_style, text.clone()),
                ],
                None => vec![self.prompt()],
            })
            .collect();

        let cursor = self.focused.then(|| {
            let column = u16::try_from(cursor_column).unwrap_or(u16::MAX);
            let row = u16::try_from(cursor_row - first_row).unwrap_or(u16::MAX);
            (PROMPT_WIDTH.saturating_add(column), row)
        });

        RegionView { lines, cursor }
    }
}

impl TextArea {
    /// Soft-wrap every line at `width` columns. Returns the rows and the
    /// cursor's (row, column) among them.
    fn wrapped_rows(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let mut rows = Vec::new();
        let mut cursor = (0, 0);

        for (index, line) in self.lines.iter().enumerate() {
            let target = (index == self.cursor_line).then_some(self.cursor_column);
            let (wrapped, position) = wrap(line, width, target);
            if let Some((row, column)) = position {
                cursor = (rows.len() + row, column);
            }
            rows.extend(wrapped);
        }
        (rows, cursor)
    }

    /// One row per line, the cursor line scrolled horizontally to keep the
    /// cursor in view
    fn scrolled_rows(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let line = &self.lines[self.cursor_line];
        let before: usize = line
            .chars()
            .take(self.cursor_column)
            .map(display_width)
            .sum();
        let offset = (before + 1).saturating_sub(width);

        let rows = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let skip = if index == self.cursor_line { offset } else { 0 };
                clip(line, skip, width)
            })
            .collect();
        (rows, (self.cursor_line, before - offset))
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(index, _)| index)
}

fn display_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Skip `offset` display columns of `line`, then keep at most `width` columns
fn clip(line: &str, offset: usize, width: usize) -> String {
    let mut skipped = 0;
    let mut used = 0;
    let mut visible = String::new();

    for ch in line.chars() {
        let w = display_width(ch);
        if skipped < offset {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        used += w;
        push_expanded(&mut visible, ch);
    }
    visible
}

/// Split `line` into rows of at most `width` columns with tabs expanded.
/// When `cursor` names a character index, also locate it among the rows.
fn wrap(line: &str, width: usize, cursor: Option<usize>) -> (Vec<String>, Option<(usize, usize)>) {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    let mut position = None;

    for (index, ch) in line.chars().enumerate() {
        let w = display_width(ch);
        if used > 0 && used + w > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        if cursor == Some(index) {
            position = Some((rows.len(), used));
        }
        push_expanded(&mut current, ch);
        used += w;
    }

    if cursor.is_some() && position.is_none() {
        // Cursor past the end of a full row starts the next one
        if used >= width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        position = Some((rows.len(), used));
    }
    rows.push(current);
    (rows, position)
}

fn push_expanded(row: &mut String, ch: char) {
    if ch == '\t' {
        row.push_str(&" ".repeat(TAB_WIDTH));
    } else {
        row.push(ch);
    }
}
