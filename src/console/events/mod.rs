//! # Events Module
//!
//! Region identities and the events the controller consumes.

pub mod console_event;
pub mod types;

pub use console_event::ConsoleEvent;
pub use types::{Region, RegionCapabilities};
