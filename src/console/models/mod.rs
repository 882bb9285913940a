//! # Models
//!
//! Session state and footer state owned by the controller.

pub mod session;
pub mod status_line;

pub use session::Session;
pub use status_line::StatusLine;
