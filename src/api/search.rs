//! Simulated search API.
//!
//! Stands in for a remote search service: every call waits a fixed delay on
//! the injected [`Clock`] and then answers from the in-memory catalog.

use super::clock::Clock;
use super::notify::{Notification, Notifier};
use crate::catalog;
use crate::domain::error::{GuideError, Result};
use crate::domain::SearchItem;
use crate::search::{filter_items, normalize_query};
use std::sync::Arc;
use std::time::Duration;

/// Default simulated latency of a search call.
pub const SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Simulated latency of the list, favorite and subscribe calls.
pub const ITEM_ACTION_DELAY: Duration = Duration::from_millis(300);

/// Per-call search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// How long to wait before answering.
    pub delay: Duration,
    /// Fail with [`GuideError::SearchFailure`] after the delay.
    pub simulate_error: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            delay: SEARCH_DELAY,
            simulate_error: false,
        }
    }
}

/// Mock search backend over a fixed item list.
pub struct SearchApi<C> {
    clock: C,
    items: Arc<[SearchItem]>,
    notifier: Arc<dyn Notifier>,
}

impl<C: Clock> SearchApi<C> {
    /// Creates an API answering from the sample catalog.
    pub fn new(clock: C, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_items(clock, notifier, catalog::all_items().to_vec())
    }

    pub fn with_items(clock: C, notifier: Arc<dyn Notifier>, items: Vec<SearchItem>) -> Self {
        Self {
            clock,
            items: items.into(),
            notifier,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Searches the catalog.
    ///
    /// Queries shorter than two characters after trimming return an empty
    /// list immediately, without waiting. Otherwise waits `options.delay` and
    /// returns every item matching the query, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::SearchFailure`] when `options.simulate_error` is set.
    pub async fn search(&self, query: &str, options: SearchOptions) -> Result<Vec<SearchItem>> {
        tracing::debug!(query = %query, "searching");

        let Some(normalized) = normalize_query(query) else {
            tracing::trace!(query = %query, "query below minimum length, skipping");
            return Ok(vec![]);
        };

        self.clock.sleep(options.delay).await;

        if options.simulate_error {
            return Err(GuideError::SearchFailure("search backend unavailable".to_string()));
        }

        let results = filter_items(&self.items, &normalized);
        tracing::debug!(query = %query, found = results.len(), "search complete");
        Ok(results)
    }

    /// Adds an item to the user's list.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::ItemNotFound`] for an unknown id.
    pub async fn add_to_list(&self, id: u32) -> Result<SearchItem> {
        tracing::debug!(item_id = id, "adding item to list");
        self.item_action(id, |title| format!("Added {title} to list")).await
    }

    /// Adds an item to the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::ItemNotFound`] for an unknown id.
    pub async fn add_to_favorites(&self, id: u32) -> Result<SearchItem> {
        tracing::debug!(item_id = id, "adding item to favorites");
        self.item_action(id, |title| format!("Added {title} to favorites")).await
    }

    /// Subscribes to updates for an item.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::ItemNotFound`] for an unknown id.
    pub async fn subscribe_to_item(&self, id: u32) -> Result<SearchItem> {
        tracing::debug!(item_id = id, "subscribing to item");
        self.item_action(id, |title| format!("Subscribed to updates for {title}")).await
    }

    async fn item_action<F>(&self, id: u32, message: F) -> Result<SearchItem>
    where
        F: FnOnce(&str) -> String,
    {
        self.clock.sleep(ITEM_ACTION_DELAY).await;

        if let Some(item) = catalog::find_item(&self.items, id) {
            self.notifier.notify(Notification::success(message(&item.title)));
            Ok(item.clone())
        } else {
            self.notifier.notify(Notification::error("Item not found"));
            Err(GuideError::ItemNotFound { id })
        }
    }
}
