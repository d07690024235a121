//! Executes `HttpRequest` values produced by the core client.
//!
//! # Design
//! The core builds requests and parses responses as plain data; this module
//! supplies the actual I/O behind a `Transport` trait so the controller can
//! run against a real HTTP agent in the binary and a scripted fake in tests.

use std::fmt;

use list_core::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single HTTP round-trip for the controller.
///
/// Implementations return non-2xx responses as data; only transport-level
/// failures (connection refused, timeouts, malformed responses) are errors.
/// Status interpretation belongs to the core client.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A network-level failure executing a request.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failed: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// `Transport` backed by a blocking ureq agent.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, letting the core client
/// handle status interpretation.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match (request.method, request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
            // The service addresses deletions by content carried in the body,
            // so DELETE needs force_send_body.
            (HttpMethod::Delete, Some(body)) => self
                .agent
                .delete(&request.path)
                .force_send_body()
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Delete, None) => self.agent.delete(&request.path).call(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
