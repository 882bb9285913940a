//! # Core Event Types
//!
//! The regions that can hold focus and the capabilities that decide how
//! input is routed to them.

use bitflags::bitflags;

/// Which region currently owns keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Method,
    Url,
    Body,
    Response,
}

impl Region {
    /// Fixed cyclic focus order
    pub const ALL: [Region; 4] = [Region::Method, Region::Url, Region::Body, Region::Response];

    /// The region that receives focus after this one, wrapping unconditionally
    pub fn next(self) -> Self {
        match self {
            Region::Method => Region::Url,
            Region::Url => Region::Body,
            Region::Body => Region::Response,
            Region::Response => Region::Method,
        }
    }

    /// Static label rendered in front of the region
    pub fn label(self) -> &'static str {
        match self {
            Region::Method => "Method:",
            Region::Url => "URL:",
            Region::Body => "Body:",
            Region::Response => "Response:",
        }
    }

    /// What the controller is allowed to do with this region
    pub fn capabilities(self) -> RegionCapabilities {
        match self {
            Region::Response => RegionCapabilities::OUTPUT_ONLY,
            _ => RegionCapabilities::FULL_ACCESS,
        }
    }

    /// Position of the region in `Region::ALL`
    pub fn index(self) -> usize {
        match self {
            Region::Method => 0,
            Region::Url => 1,
            Region::Body => 2,
            Region::Response => 3,
        }
    }
}

bitflags! {
    /// Capabilities that control how the controller treats a region
    ///
    /// ```rust
    /// use reqline::console::events::{Region, RegionCapabilities};
    ///
    /// assert!(Region::Body.capabilities().contains(RegionCapabilities::EDITABLE));
    /// assert!(!Region::Response.capabilities().contains(RegionCapabilities::EDITABLE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RegionCapabilities: u32 {
        /// No capabilities
        const NONE         = 0b00000000;

        /// Can receive focus through the focus cycle
        const FOCUSABLE    = 0b00000001;

        /// Receives forwarded keyboard and paste input
        const EDITABLE     = 0b00000010;

        /// Content is replaced programmatically by the controller
        const WRITABLE     = 0b00000100;

        /// The response region: focusable and written by the controller,
        /// never fed user input
        const OUTPUT_ONLY = Self::FOCUSABLE.bits() | Self::WRITABLE.bits();

        /// The request regions: focusable and user-editable
        const FULL_ACCESS = Self::FOCUSABLE.bits() | Self::EDITABLE.bits();
    }
}
