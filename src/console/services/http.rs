//! # HTTP Service
//!
//! Turns the literal contents of the method, URL and body regions into a
//! single HTTP exchange and normalizes whatever happens into a
//! [`DispatchOutcome`] that can be written into the response region.

use super::decoder::{decode_bytes, ENC_NONE};
use crate::config::StatusPolicy;
use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_ENCODING};
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

/// Value of the `accept` header sent with every request
pub const ACCEPT_JSON: &str = "application/json";

/// Verbs the console can send, matched case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Patch,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    /// Exact, case-sensitive match against the supported verbs
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether the body region is sent as the payload
    pub fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch | HttpMethod::Put)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal text of the three request regions at the moment of sending
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestDraft {
    pub method: String,
    pub url: String,
    pub body: String,
}

impl RequestDraft {
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Method text that is not one of the supported verbs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMethod(pub String);

impl fmt::Display for UnsupportedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = HttpMethod::ALL.iter().map(|m| m.as_str()).collect();
        write!(
            f,
            "Unsupported method \"{}\": expected one of {}",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for UnsupportedMethod {}

/// A validated request, with the verb-body policy already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    method: HttpMethod,
    url: String,
    body: Option<String>,
}

impl PreparedRequest {
    /// Validate the method text and drop the body for GET and DELETE
    pub fn prepare(draft: &RequestDraft) -> std::result::Result<Self, UnsupportedMethod> {
        let method =
            HttpMethod::parse(&draft.method).ok_or_else(|| UnsupportedMethod(draft.method.clone()))?;
        let body = method.carries_body().then(|| draft.body.clone());

        Ok(Self {
            method,
            url: draft.url.clone(),
            body,
        })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Result of one send, displayed verbatim in the response region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The exchange completed; carries the response payload text
    Success(String),
    /// The request was rejected or could not be completed; carries a
    /// human-readable description
    Failure(String),
}

impl DispatchOutcome {
    /// Text written into the response region
    pub fn display_text(&self) -> &str {
        match self {
            DispatchOutcome::Success(body) => body,
            DispatchOutcome::Failure(description) => description,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success(_))
    }
}

/// Anything that can perform one exchange for a prepared request
///
/// Implementations block until the exchange completes; the controller runs
/// them off the event path.
pub trait RequestExecutor: Send + Sync {
    fn execute(&self, request: &PreparedRequest) -> DispatchOutcome;
}

/// Status and decoded payload of a completed exchange
#[derive(Debug)]
struct HttpResponse {
    status: StatusCode,
    body: String,
}

/// Executor backed by reqwest's blocking client
#[derive(Debug, Clone, Default)]
pub struct ReqwestExecutor {
    status_policy: StatusPolicy,
    timeout: Option<Duration>,
}

impl ReqwestExecutor {
    pub fn new(status_policy: StatusPolicy, timeout: Option<Duration>) -> Self {
        Self {
            status_policy,
            timeout,
        }
    }

    fn build_client(&self) -> Result<Client> {
        // `None` disables reqwest's 30 second default
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(client)
    }

    fn send(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        let client = self.build_client()?;
        let mut builder = client
            .request(request.method().into(), request.url())
            .header(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        let response = builder.send()?;
        let status = response.status();
        let encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(ENC_NONE)
            .to_string();
        let bytes = response.bytes()?;
        let body = decode_bytes(&bytes, &encoding)?;

        Ok(HttpResponse { status, body })
    }

    fn classify(&self, response: HttpResponse) -> DispatchOutcome {
        match self.status_policy {
            StatusPolicy::Raw => DispatchOutcome::Success(response.body),
            StatusPolicy::Classify if response.status.is_success() => {
                DispatchOutcome::Success(response.body)
            }
            StatusPolicy::Classify => {
                let status_line = format!(
                    "HTTP {} {}",
                    response.status.as_u16(),
                    response.status.canonical_reason().unwrap_or("")
                );
                DispatchOutcome::Failure(format!("{}\n{}", status_line.trim_end(), response.body))
            }
        }
    }
}

impl RequestExecutor for ReqwestExecutor {
    fn execute(&self, request: &PreparedRequest) -> DispatchOutcome {
        tracing::info!("Sending {} {}", request.method(), request.url());

        match self.send(request) {
            Ok(response) => {
                tracing::info!(
                    "Received {} ({} bytes)",
                    response.status,
                    response.body.len()
                );
                self.classify(response)
            }
            Err(error) => {
                tracing::warn!("Request failed: {:#}", error);
                DispatchOutcome::Failure(format!("{error:#}"))
            }
        }
    }
}
