//! # Services
//!
//! The request executor and the response body decoding it relies on.

pub mod decoder;
pub mod http;

pub use http::{
    DispatchOutcome, HttpMethod, PreparedRequest, ReqwestExecutor, RequestDraft, RequestExecutor,
    UnsupportedMethod,
};
