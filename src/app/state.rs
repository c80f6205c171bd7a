//! Spotlight state and view model computation.
//!
//! [`AppState`] is the single source of truth for the search overlay: whether
//! it is open, the query, the current [`SearchPhase`], the last results and
//! the selection. It is mutated only by [`handle_event`](super::handle_event).
//!
//! # Generations
//!
//! Every query edit and every close bumps `generation`. Timers and searches
//! are tagged with the generation that started them; anything that comes back
//! tagged with an older one is ignored. This is what makes "only the last
//! keystroke searches" hold without cancelling anything.
//!
//! # Example
//!
//! ```rust
//! use devconnect_guide::app::{AppState, SearchPhase};
//!
//! let mut state = AppState::new();
//! state.open_overlay();
//! let generation = state.set_query("eth");
//! assert_eq!(generation, Some(1));
//! assert_eq!(state.phase, SearchPhase::Debouncing);
//! ```

use super::modes::SearchPhase;
use crate::domain::SearchItem;
use crate::search::{match_ranges, normalize_query};
use crate::ui::viewmodel::{EmptyState, ResultRow, SearchBarInfo, SpotlightViewModel};

pub const SEARCH_PLACEHOLDER: &str = "Search events, places, restaurants...";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub overlay_open: bool,

    /// Raw query as typed, untrimmed.
    pub query: String,

    pub phase: SearchPhase,

    /// Results of the last completed search for the current query.
    ///
    /// Kept while a follow-up search is pending so the list does not flicker.
    pub results: Vec<SearchItem>,

    /// Index into `results`. Wraps during navigation.
    pub selected_index: usize,

    /// Bumped on every query edit and close.
    pub generation: u64,

    /// Failure message of the last search, set only in [`SearchPhase::Error`].
    pub error: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Hides the overlay and resets the search.
    ///
    /// Bumps the generation, so a debounce timer or search still in flight is
    /// ignored when it comes back.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
        self.query.clear();
        self.results.clear();
        self.selected_index = 0;
        self.error = None;
        self.phase = SearchPhase::Idle;
        self.bump_generation();
    }

    /// Opens a closed overlay or closes an open one. Returns the new visibility.
    pub fn toggle_overlay(&mut self) -> bool {
        if self.overlay_open {
            self.close_overlay();
        } else {
            self.open_overlay();
        }
        self.overlay_open
    }

    /// Replaces the query.
    ///
    /// Returns the new generation when the query is long enough to search;
    /// the caller should arm a debounce timer for it. Returns `None` for
    /// short queries, which clear the results instead.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<u64> {
        self.query = query.into();
        self.error = None;
        let generation = self.bump_generation();

        if normalize_query(&self.query).is_none() {
            self.results.clear();
            self.selected_index = 0;
            self.phase = if self.query.trim().is_empty() {
                SearchPhase::Idle
            } else {
                SearchPhase::Typing
            };
            return None;
        }

        self.phase = SearchPhase::Debouncing;
        Some(generation)
    }

    fn bump_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if `generation` is still the live one.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.overlay_open && self.generation == generation
    }

    pub fn begin_loading(&mut self) {
        self.phase = SearchPhase::Loading;
    }

    pub fn apply_results(&mut self, results: Vec<SearchItem>) {
        self.phase = if results.is_empty() {
            SearchPhase::Empty
        } else {
            SearchPhase::Results
        };
        self.results = results;
        self.selected_index = 0;
        self.error = None;
    }

    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.phase = SearchPhase::Error;
        self.results.clear();
        self.selected_index = 0;
        self.error = Some(message.into());
    }

    /// Moves the selection down one row, wrapping to the top.
    ///
    /// No-op without results.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves the selection up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&SearchItem> {
        self.results.get(self.selected_index)
    }

    /// Computes the renderable view of the overlay.
    ///
    /// Rows are only produced once a search has settled or while a follow-up
    /// search is pending over earlier results. The empty state separates
    /// "no matches" from "search failed".
    #[must_use]
    pub fn compute_viewmodel(&self) -> SpotlightViewModel {
        let normalized = normalize_query(&self.query);

        let rows = self
            .results
            .iter()
            .enumerate()
            .map(|(idx, item)| ResultRow {
                id: item.id,
                title: item.title.clone(),
                description: item.description.clone(),
                meta: format!("{} · {}", item.kind, item.category),
                link: item.link.clone(),
                is_selected: idx == self.selected_index,
                highlight_ranges: normalized
                    .as_deref()
                    .map_or_else(Vec::new, |query| match_ranges(&item.title, query)),
            })
            .collect();

        let empty_state = match self.phase {
            SearchPhase::Empty => Some(EmptyState::no_results(&self.query)),
            SearchPhase::Error => Some(EmptyState::failed(
                self.error.as_deref().unwrap_or("Something went wrong"),
            )),
            _ => None,
        };

        SpotlightViewModel {
            open: self.overlay_open,
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
            },
            loading: self.phase.is_pending(),
            rows,
            selected_index: self.selected_index,
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_footer(&self) -> String {
        match self.phase {
            SearchPhase::Results => "↑↓ navigate · ↵ open · esc close".to_string(),
            SearchPhase::Idle | SearchPhase::Typing => "Type at least 2 characters · esc close".to_string(),
            _ => "esc close".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_items;

    fn open_state() -> AppState {
        let mut state = AppState::new();
        state.open_overlay();
        state
    }

    #[test]
    fn short_queries_do_not_search() {
        let mut state = open_state();

        assert_eq!(state.set_query("e"), None);
        assert_eq!(state.phase, SearchPhase::Typing);

        assert_eq!(state.set_query("  "), None);
        assert_eq!(state.phase, SearchPhase::Idle);
    }

    #[test]
    fn every_edit_bumps_generation() {
        let mut state = open_state();
        let first = state.set_query("et").unwrap();
        let second = state.set_query("eth").unwrap();

        assert!(second > first);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn close_invalidates_pending_generation() {
        let mut state = open_state();
        let generation = state.set_query("eth").unwrap();

        state.close_overlay();
        assert!(!state.is_current(generation));
        assert!(state.query.is_empty());
        assert_eq!(state.phase, SearchPhase::Idle);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = open_state();
        state.apply_results(all_items()[..3].to_vec());

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_separates_empty_from_error() {
        let mut state = open_state();
        state.set_query("zzz");
        state.apply_results(vec![]);
        let empty = state.compute_viewmodel().empty_state.unwrap();
        assert_eq!(empty.message, "No results found.");
        assert!(!empty.is_error);

        state.apply_failure("search backend unavailable");
        let failed = state.compute_viewmodel().empty_state.unwrap();
        assert!(failed.is_error);
        assert_eq!(failed.subtitle, "search backend unavailable");
    }

    #[test]
    fn viewmodel_rows_carry_meta_and_highlights() {
        let mut state = open_state();
        state.set_query("ETH");
        let hit = all_items().iter().find(|i| i.title == "ETHLatam").cloned().unwrap();
        state.apply_results(vec![hit]);

        let vm = state.compute_viewmodel();
        assert!(!vm.loading);
        assert_eq!(vm.rows[0].meta, format!("event · {}", state.results[0].category));
        assert_eq!(vm.rows[0].highlight_ranges, vec![(0, 3)]);
        assert!(vm.rows[0].is_selected);
    }
}
