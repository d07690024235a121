//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test, and lets any transport (ureq, a scripted fake) sit behind it.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ListClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `ListClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A response body interpreted as structured data when possible.
///
/// The service declares most success bodies as "any", and error bodies are
/// free-form, so every body is first parsed as JSON and falls back to the
/// raw text when that fails. Failure diagnostics carry this value so the log
/// shows whatever the server actually said.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyValue {
    Json(serde_json::Value),
    Text(String),
}

impl BodyValue {
    /// Parse `raw` as JSON, falling back to the raw text verbatim.
    pub fn interpret(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => BodyValue::Json(value),
            Err(_) => BodyValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for BodyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyValue::Json(value) => write!(f, "{value}"),
            BodyValue::Text(text) => f.write_str(text),
        }
    }
}
