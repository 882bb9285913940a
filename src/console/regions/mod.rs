//! # Region Set
//!
//! The four independently focusable text regions. The controller only talks
//! to a region through the [`TextRegion`] capability: forward input, push
//! focus or blur, read or replace its text, and ask it to render.

pub mod text_area;

pub use text_area::{TextArea, TextAreaOptions};

use crate::config::Theme;
use crate::console::events::Region;
use crossterm::event::KeyEvent;
use crossterm::style::StyledContent;

/// One rendered row made of styled spans
pub type StyledLine = Vec<StyledContent<String>>;

/// A region's rendered form
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView {
    /// Exactly as many rows as were requested
    pub lines: Vec<StyledLine>,
    /// Cursor position relative to the region, present only while focused
    pub cursor: Option<(u16, u16)>,
}

/// Capability set every region implements
pub trait TextRegion: Send {
    /// Apply a key to the region's editing state; returns whether it was consumed
    fn handle_key(&mut self, key: &KeyEvent) -> bool;

    /// Insert pasted text at the cursor
    fn insert_text(&mut self, text: &str);

    fn focus(&mut self);

    /// Must be safe to call on an already blurred region
    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    fn text(&self) -> String;

    /// Replace the whole content
    fn set_text(&mut self, text: &str);

    /// Render into a `width` x `height` cell box; must not mutate the region
    fn render(&self, width: u16, height: u16) -> RegionView;
}

/// Method, URL, body and response regions, indexed by [`Region`]
pub struct RegionSet {
    regions: [Box<dyn TextRegion>; 4],
    theme: Theme,
}

impl RegionSet {
    /// Build the standard four fields with the given static styling
    pub fn new(theme: Theme) -> Self {
        Self::with_regions(
            theme,
            [
                Box::new(TextArea::method_field(&theme)),
                Box::new(TextArea::url_field(&theme)),
                Box::new(TextArea::body_field(&theme)),
                Box::new(TextArea::response_field(&theme)),
            ],
        )
    }

    /// Build from custom regions, in `Region::ALL` order
    pub fn with_regions(theme: Theme, regions: [Box<dyn TextRegion>; 4]) -> Self {
        Self { regions, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get(&self, region: Region) -> &dyn TextRegion {
        self.regions[region.index()].as_ref()
    }

    pub fn get_mut(&mut self, region: Region) -> &mut dyn TextRegion {
        self.regions[region.index()].as_mut()
    }

    pub fn text(&self, region: Region) -> String {
        self.get(region).text()
    }

    /// Focus `focused` and blur the other three, unconditionally
    pub fn apply_focus(&mut self, focused: Region) {
        for region in Region::ALL {
            let target = self.get_mut(region);
            if region == focused {
                target.focus();
            } else {
                target.blur();
            }
        }
    }

    /// The regions that currently report focus
    pub fn focused_regions(&self) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|region| self.get(*region).is_focused())
            .collect()
    }
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Unstyled text of every row of a view
pub fn plain_text(view: &RegionView) -> Vec<String> {
    view.lines.iter().map(|line| line_text(line)).collect()
}

/// Unstyled text of one row
pub fn line_text(line: &[StyledContent<String>]) -> String {
    line.iter().map(|span| span.content().as_str()).collect()
}
