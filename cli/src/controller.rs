//! Bridges user actions to the list service and reflects server state.
//!
//! # Design
//! `ListController` is the only stateful piece of the client: it remembers
//! whatever is currently rendered (the last fetched list and the displayed
//! count) and overwrites that state wholesale on every successful refetch.
//! There are no optimistic updates and no partial patching — every mutation
//! is followed by a full refetch-and-rerender cycle.
//!
//! Failures are best-effort, fail-silent: each one is logged at the call
//! site nearest the user action and otherwise swallowed, leaving the
//! previous render visible. Nothing here panics on a bad response.

use std::fmt;

use list_core::{ApiError, ContentChange, Item, ItemRef, ListClient, NewItem, TotalCount};
use tracing::{debug, error, warn};

use crate::surface::Surface;
use crate::transport::{Transport, TransportError};

/// A failed round-trip, either at the network or at status/parse level.
#[derive(Debug)]
pub enum CallError {
    Transport(TransportError),
    Api(ApiError),
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Transport(e) => e.fmt(f),
            CallError::Api(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CallError {}

impl From<TransportError> for CallError {
    fn from(e: TransportError) -> Self {
        CallError::Transport(e)
    }
}

impl From<ApiError> for CallError {
    fn from(e: ApiError) -> Self {
        CallError::Api(e)
    }
}

/// Client-side list controller: issues CRUD calls through a `Transport`,
/// renders results into a `Surface`, and keeps the displayed count in sync
/// with the server-reported total.
pub struct ListController<T, S> {
    client: ListClient,
    transport: T,
    surface: S,
    items: Vec<Item>,
    shown_count: u64,
}

impl<T: Transport, S: Surface> ListController<T, S> {
    pub fn new(base_url: &str, transport: T, surface: S) -> Self {
        Self {
            client: ListClient::new(base_url),
            transport,
            surface,
            items: Vec::new(),
            shown_count: 0,
        }
    }

    /// Fetch the full list and re-render it, then refresh the count.
    ///
    /// On list-fetch failure the previous render stays visible. The count
    /// refresh runs regardless of the list fetch's outcome; the
    /// server-reported total is authoritative and overwrites the provisional
    /// list-length count, while a failed or malformed total response leaves
    /// the displayed number untouched.
    pub fn refresh(&mut self) {
        match self.fetch_items() {
            Ok(items) => {
                self.items = items;
                self.surface.render_items(&self.items);
                self.shown_count = self.items.len() as u64;
                self.surface.render_count(self.shown_count);
            }
            Err(err) => error!(%err, "list fetch failed, keeping previous render"),
        }
        match self.fetch_total() {
            Ok(total) => {
                self.shown_count = total.total;
                self.surface.render_count(self.shown_count);
            }
            Err(err) => warn!(%err, "count fetch failed, keeping displayed count"),
        }
    }

    /// Create an item from the add-input. Whitespace-only input is silently
    /// dropped without issuing a request. On success the input is cleared
    /// and the list refetched; on failure the input stays populated.
    pub fn submit(&mut self, input: &str) {
        let content = input.trim();
        if content.is_empty() {
            debug!("empty input, no create request sent");
            return;
        }
        match self.create(content) {
            Ok(()) => {
                self.surface.clear_input();
                self.refresh();
            }
            Err(err) => error!(%err, content, "create failed"),
        }
    }

    /// Change an item's content, addressing it by its current value. An
    /// empty or unchanged trimmed value issues no request. No rollback is
    /// needed on failure since nothing was mutated locally.
    pub fn edit(&mut self, old_content: &str, input: &str) {
        let new_content = input.trim();
        if new_content.is_empty() || new_content == old_content {
            debug!(old_content, "unchanged or empty edit, no update request sent");
            return;
        }
        match self.update(old_content, new_content) {
            Ok(()) => self.refresh(),
            Err(err) => error!(%err, old_content, new_content, "update failed"),
        }
    }

    /// Delete an item by content value, after interactive confirmation.
    /// Declining the confirmation issues no request.
    pub fn remove(&mut self, content: &str) {
        if !self.surface.confirm_delete(content) {
            debug!(content, "deletion not confirmed, no request sent");
            return;
        }
        match self.delete(content) {
            Ok(()) => self.refresh(),
            Err(err) => error!(%err, content, "delete failed"),
        }
    }

    /// The last successfully fetched list.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The number currently shown in the count display.
    pub fn shown_count(&self) -> u64 {
        self.shown_count
    }

    fn fetch_items(&self) -> Result<Vec<Item>, CallError> {
        let request = self.client.build_fetch_items();
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_fetch_items(response)?)
    }

    fn fetch_total(&self) -> Result<TotalCount, CallError> {
        let request = self.client.build_fetch_total();
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_fetch_total(response)?)
    }

    fn create(&self, content: &str) -> Result<(), CallError> {
        let input = NewItem {
            content: content.to_string(),
        };
        let request = self.client.build_create_item(&input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_item(response)?;
        Ok(())
    }

    fn update(&self, old_content: &str, new_content: &str) -> Result<(), CallError> {
        let input = ContentChange {
            old_content: old_content.to_string(),
            new_content: new_content.to_string(),
        };
        let request = self.client.build_update_item(&input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_item(response)?;
        Ok(())
    }

    fn delete(&self, content: &str) -> Result<(), CallError> {
        let input = ItemRef {
            content: content.to_string(),
        };
        let request = self.client.build_delete_item(&input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_delete_item(response)?;
        Ok(())
    }
}
