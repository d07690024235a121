//! Error types for the list service client.
//!
//! # Design
//! The service treats any non-2xx status as failure regardless of body shape,
//! so there is a single `Status` variant carrying the status code and the
//! interpreted body for diagnostic logging. The service has no meaningful
//! not-found contract (mutations on unknown content still return 200), so no
//! dedicated variant exists for it.

use std::fmt;

use crate::http::BodyValue;

/// Errors returned by `ListClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status. `body` is the response body,
    /// parsed as JSON when possible and kept as raw text otherwise.
    Status { status: u16, body: BodyValue },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
