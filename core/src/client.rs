//! Stateless HTTP request builder and response parser for the list service.
//!
//! # Design
//! `ListClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the actual HTTP round-trip, keeping the core deterministic
//! and free of I/O dependencies.
//!
//! The mutation routes declare their success bodies as "any", so their
//! `parse_*` methods return the interpreted `BodyValue` rather than a typed
//! payload. Only `/get` and `/totalnum` have typed responses.

use crate::error::ApiError;
use crate::http::{BodyValue, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ContentChange, Item, ItemRef, NewItem, TotalCount};

/// Synchronous, stateless client for the list service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ListClient {
    base_url: String,
}

impl ListClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/get", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/post", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_item(&self, input: &ContentChange) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/update", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, input: &ItemRef) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/delete", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_fetch_total(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/totalnum", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The full item list, in server-defined order, preserved verbatim.
    ///
    /// The backend encodes an empty table as JSON `null` rather than `[]`,
    /// so a `null` body is an empty list, not an error.
    pub fn parse_fetch_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_success(&response)?;
        let items: Option<Vec<Item>> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(items.unwrap_or_default())
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<BodyValue, ApiError> {
        check_success(&response)?;
        Ok(BodyValue::interpret(&response.body))
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<BodyValue, ApiError> {
        check_success(&response)?;
        Ok(BodyValue::interpret(&response.body))
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<BodyValue, ApiError> {
        check_success(&response)?;
        Ok(BodyValue::interpret(&response.body))
    }

    /// The server-reported total. A 2xx body that is not `{"total": <number>}`
    /// is a deserialization error; callers keep their previous count on it.
    pub fn parse_fetch_total(&self, response: HttpResponse) -> Result<TotalCount, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Any non-2xx status is a failure regardless of body shape; the error keeps
/// the status and the interpreted body for logging.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: BodyValue::interpret(&response.body),
    })
}
