//! # reqline - Four-Region Terminal HTTP Console
//!
//! Compose a request in three regions (method, URL, body), send it with
//! Ctrl+R and read the answer in the fourth.
//!
//! ## Architecture
//!
//! ```text
//! terminal ──▶ EventStream ──▶ AppController ──▶ CommandRegistry
//!                                  │    ▲              (quit / focus / send)
//!                                  │    │
//!                  focused region ◀┘    └── mpsc ◀── spawn_blocking(RequestExecutor)
//!                                  │
//!                                  ▼
//!                     compose(RegionSet) ──▶ TerminalRenderer ──▶ RenderStream
//! ```
//!
//! The controller is the only writer of the session and the regions. A send
//! validates the method, runs the exchange on a blocking task and applies
//! the outcome when it comes back through the channel.

pub mod cmd_args;
pub mod config;
pub mod console;
pub mod logging;

// Re-export main types for easy access
pub use console::AppController;
pub use console::{ConsoleEvent, Region};
