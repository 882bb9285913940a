//! # Views Module
//!
//! Composition of the console frame and its rendering to a terminal.

pub mod screen;
pub mod terminal_renderer;

pub use screen::{compose, response_height, Screen};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
