//! Step definitions for Cucumber tests
//!
//! - `focus` - focus cycling and input routing
//! - `editing` - typing and pasting into regions
//! - `http` - mock servers, sending, and outcomes

pub mod editing;
pub mod focus;
pub mod http;
