//! Synchronous API client core for the list service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ListClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Items are addressed by their content value; there is no server-assigned
//!   identifier on the wire.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ListClient;
pub use error::ApiError;
pub use http::{BodyValue, HttpMethod, HttpRequest, HttpResponse};
pub use types::{ContentChange, Item, ItemRef, NewItem, TotalCount};
