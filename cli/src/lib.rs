//! Interactive client for the list service.
//!
//! # Overview
//! Wires the transport-free core client to real I/O: a `Transport` executes
//! the HTTP round-trips, a `Surface` displays server state, and the
//! `ListController` in between turns user actions (submit, edit, delete)
//! into request/refetch/rerender cycles.
//!
//! # Design
//! - All failures are logged and swallowed (best-effort, fail-silent); the
//!   previous render stays visible until the next successful refetch.
//! - The server-reported total is the authoritative count; the fetched list
//!   length is only a provisional fallback.

pub mod controller;
pub mod surface;
pub mod transport;

pub use controller::{CallError, ListController};
pub use surface::{ConsoleSurface, Surface};
pub use transport::{Transport, TransportError, UreqTransport};
