//! Wire payloads for the list service.
//!
//! # Design
//! These types mirror the service's JSON contract but are defined
//! independently from the mock-server crate. An item carries no identifier:
//! the service addresses items by their content value, so the mutation
//! payloads repeat the content string rather than a key. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single list entry as returned by `GET /get`. The content string is also
/// the item's identity — duplicate contents are indistinguishable to the
/// mutation routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub content: String,
}

/// Request payload for `POST /post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub content: String,
}

/// Request payload for `PUT /update`. Targets every stored item whose
/// content equals `old_content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentChange {
    pub old_content: String,
    pub new_content: String,
}

/// Request payload for `DELETE /delete`, addressing items by content value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    pub content: String,
}

/// Response payload of `GET /totalnum` — the server-reported item total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TotalCount {
    pub total: u64,
}
