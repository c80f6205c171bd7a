//! View model types representing renderable spotlight state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `compute_viewmodel()` and carry display-ready data only: pre-formatted meta
//! lines, highlight ranges and selection flags. Whatever draws the overlay
//! reads these and never touches the state machine directly.
//!
//! # Example
//!
//! ```rust
//! use devconnect_guide::ui::viewmodel::{EmptyState, SearchBarInfo, SpotlightViewModel};
//!
//! let vm = SpotlightViewModel {
//!     open: true,
//!     search_bar: SearchBarInfo {
//!         query: "e".to_string(),
//!         placeholder: "Search events, places, restaurants...".to_string(),
//!     },
//!     loading: false,
//!     rows: vec![],
//!     selected_index: 0,
//!     empty_state: None,
//!     footer: "↑↓ navigate · ↵ open · esc close".to_string(),
//! };
//! assert!(vm.rows.is_empty());
//! ```

use serde::Serialize;

/// Complete spotlight view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotlightViewModel {
    /// Whether the overlay is visible at all.
    pub open: bool,

    pub search_bar: SearchBarInfo,

    /// A search is pending; show a spinner instead of rows.
    pub loading: bool,

    /// Result rows in catalog order.
    pub rows: Vec<ResultRow>,

    /// Index of the highlighted row.
    pub selected_index: usize,

    /// Shown in place of rows when a search finished with nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Keybinding hints.
    pub footer: String,
}

/// One search result as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: u32,
    pub title: String,
    pub description: String,

    /// `"kind · category"`, e.g. `"event · Conference"`.
    pub meta: String,

    /// Route opened when the row is selected.
    pub link: String,

    pub is_selected: bool,

    /// Byte ranges of the query inside `title`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown when there are no rows.
///
/// "No matches" and "search failed" are distinct: `is_error` is set only for
/// the latter, and `message` then carries the failure text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub is_error: bool,
}

impl EmptyState {
    /// The "no matches" state.
    #[must_use]
    pub fn no_results(query: &str) -> Self {
        Self {
            message: "No results found.".to_string(),
            subtitle: format!("Nothing matches \"{}\"", query.trim()),
            is_error: false,
        }
    }

    /// The "search failed" state.
    #[must_use]
    pub fn failed(error: &str) -> Self {
        Self {
            message: "Search failed".to_string(),
            subtitle: error.to_string(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}
