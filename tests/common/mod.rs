//! Common test utilities and infrastructure
//!
//! - Cucumber world wrapping a real controller over mock I/O
//! - Region name parsing for step expressions

pub mod world;

#[allow(unused_imports)]
pub use world::{parse_region, ReqlineWorld};
