//! # Console
//!
//! The four-region request console: event types, global commands, the
//! region set, the request executor, terminal I/O and the controller that
//! ties them together.

pub mod commands;
pub mod controller;
pub mod events;
pub mod io;
pub mod models;
pub mod regions;
pub mod services;
pub mod views;

pub use controller::AppController;
pub use events::{ConsoleEvent, Region};
