//! Event handling and state transition logic for the spotlight.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the keyboard or from the controller (timers, searches)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Overlay**: `Shortcut`, `Open`, `Close`
//! - **Input**: `Char`, `Backspace`, `SetQuery`
//! - **Navigation**: `KeyDown`, `KeyUp`, `SelectResult`
//! - **Item actions**: `AddSelectedToList`, `AddSelectedToFavorites`, `SubscribeSelected`
//! - **Async completions**: `DebounceElapsed`, `SearchCompleted`, `SearchFailed`,
//!   `ItemActionFinished`
//!
//! # Example
//!
//! ```rust
//! use devconnect_guide::app::{handle_event, Action, AppState, Event, KeyChord};
//!
//! let mut state = AppState::new();
//! handle_event(&mut state, &Event::Shortcut(KeyChord::ctrl('k')))?;
//! let (_, actions) = handle_event(&mut state, &Event::SetQuery("eth".into()))?;
//! assert!(matches!(actions[0], Action::ArmDebounce { .. }));
//! # Ok::<(), devconnect_guide::domain::GuideError>(())
//! ```

use super::modes::KeyChord;
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SearchItem;
use std::time::Duration;

/// Quiet period after the last keystroke before a search is issued.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Which per-item call finished, reported back by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    AddToList,
    AddToFavorites,
    Subscribe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key chord pressed anywhere in the app. Only the spotlight toggle
    /// (Ctrl/Cmd+K) does anything.
    Shortcut(KeyChord),
    /// Opens the overlay, e.g. from the navbar search button.
    Open,
    /// Escape or a click outside the overlay.
    Close,

    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Replaces the whole query (paste, input change).
    SetQuery(String),

    /// Moves selection down one result (wraps to top).
    KeyDown,
    /// Moves selection up one result (wraps to bottom).
    KeyUp,
    /// Opens the highlighted result.
    SelectResult,

    AddSelectedToList,
    AddSelectedToFavorites,
    SubscribeSelected,

    /// The debounce timer armed for `generation` fired.
    DebounceElapsed { generation: u64 },
    /// A search started for `generation` returned.
    SearchCompleted { generation: u64, results: Vec<SearchItem> },
    /// A search started for `generation` failed.
    SearchFailed { generation: u64, message: String },
    /// A list/favorite/subscribe call finished. The API has already posted
    /// its notification; this only lets the controller account for the task.
    ItemActionFinished { action: ItemAction, id: u32, ok: bool },
}

/// Processes an event, mutates spotlight state, and returns actions to execute.
///
/// The returned bool asks for a re-render. Events tagged with a stale
/// generation are dropped without touching state.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for
/// handlers that may fail.
///
/// # Example
///
/// ```rust
/// use devconnect_guide::app::{handle_event, AppState, Event};
///
/// let mut state = AppState::new();
/// let (rerender, actions) = handle_event(&mut state, &Event::KeyDown)?;
/// assert!(!rerender);
/// assert!(actions.is_empty());
/// # Ok::<(), devconnect_guide::domain::GuideError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Shortcut(chord) => {
            if !chord.is_spotlight_toggle() {
                return Ok((false, vec![]));
            }
            let open = state.toggle_overlay();
            tracing::debug!(open = open, "spotlight toggled");
            Ok((true, vec![]))
        }
        Event::Open => {
            if state.overlay_open {
                return Ok((false, vec![]));
            }
            state.open_overlay();
            Ok((true, vec![]))
        }
        Event::Close => {
            if !state.overlay_open {
                return Ok((false, vec![]));
            }
            state.close_overlay();
            Ok((true, vec![]))
        }

        Event::Char(c) => {
            let mut query = state.query.clone();
            query.push(*c);
            Ok(edit_query(state, query))
        }
        Event::Backspace => {
            let mut query = state.query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok(edit_query(state, query))
        }
        Event::SetQuery(query) => Ok(edit_query(state, query.clone())),

        Event::KeyDown => {
            if state.results.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.results.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SelectResult => {
            let Some(item) = state.selected_item() else {
                tracing::debug!("no result selected");
                return Ok((false, vec![]));
            };
            let link = item.link.clone();
            tracing::info!(item_id = item.id, title = %item.title, link = %link, "opening result");
            state.close_overlay();
            Ok((true, vec![Action::Navigate { link }]))
        }

        Event::AddSelectedToList => Ok(item_action(state, |id| Action::AddToList { id })),
        Event::AddSelectedToFavorites => Ok(item_action(state, |id| Action::AddToFavorites { id })),
        Event::SubscribeSelected => Ok(item_action(state, |id| Action::SubscribeToItem { id })),

        Event::DebounceElapsed { generation } => {
            if !state.is_current(*generation) {
                tracing::trace!(generation = generation, current = state.generation, "stale debounce dropped");
                return Ok((false, vec![]));
            }
            state.begin_loading();
            Ok((
                true,
                vec![Action::Search {
                    generation: *generation,
                    query: state.query.clone(),
                }],
            ))
        }
        Event::SearchCompleted { generation, results } => {
            if !state.is_current(*generation) {
                tracing::debug!(generation = generation, current = state.generation, "stale results dropped");
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.query, found = results.len(), "results applied");
            state.apply_results(results.clone());
            Ok((true, vec![]))
        }
        Event::SearchFailed { generation, message } => {
            if !state.is_current(*generation) {
                return Ok((false, vec![]));
            }
            tracing::warn!(query = %state.query, error = %message, "search failed");
            state.apply_failure(message.clone());
            Ok((true, vec![]))
        }
        Event::ItemActionFinished { action, id, ok } => {
            tracing::debug!(action = ?action, item_id = id, ok = ok, "item action finished");
            Ok((false, vec![]))
        }
    }
}

fn edit_query(state: &mut AppState, query: String) -> (bool, Vec<Action>) {
    if !state.overlay_open {
        return (false, vec![]);
    }
    match state.set_query(query) {
        Some(generation) => (
            true,
            vec![Action::ArmDebounce {
                generation,
                delay: DEBOUNCE_DELAY,
            }],
        ),
        None => (true, vec![]),
    }
}

fn item_action<F>(state: &AppState, action: F) -> (bool, Vec<Action>)
where
    F: FnOnce(u32) -> Action,
{
    state
        .selected_item()
        .map_or_else(|| (false, vec![]), |item| (false, vec![action(item.id)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchPhase;
    use crate::catalog::all_items;

    fn open_state() -> AppState {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::Shortcut(KeyChord::ctrl('k'))).unwrap();
        state
    }

    fn type_str(state: &mut AppState, text: &str) -> Vec<Action> {
        text.chars()
            .flat_map(|c| handle_event(state, &Event::Char(c)).unwrap().1)
            .collect()
    }

    #[test]
    fn shortcut_toggles_overlay_in_any_phase() {
        let mut state = open_state();
        assert!(state.overlay_open);

        type_str(&mut state, "eth");
        assert_eq!(state.phase, SearchPhase::Debouncing);

        handle_event(&mut state, &Event::Shortcut(KeyChord::meta('k'))).unwrap();
        assert!(!state.overlay_open);

        let (rerender, _) = handle_event(&mut state, &Event::Shortcut(KeyChord::plain('k'))).unwrap();
        assert!(!rerender);
        assert!(!state.overlay_open);
    }

    #[test]
    fn typing_while_closed_is_ignored() {
        let mut state = AppState::new();
        let (rerender, actions) = handle_event(&mut state, &Event::Char('e')).unwrap();
        assert!(!rerender);
        assert!(actions.is_empty());
        assert!(state.query.is_empty());
    }

    #[test]
    fn only_last_debounce_issues_search() {
        let mut state = open_state();
        let actions = type_str(&mut state, "eth");

        let generations: Vec<u64> = actions
            .iter()
            .filter_map(|a| match a {
                Action::ArmDebounce { generation, .. } => Some(*generation),
                _ => None,
            })
            .collect();
        assert_eq!(generations.len(), 2, "'e' alone is too short to arm");

        let (_, stale) = handle_event(&mut state, &Event::DebounceElapsed { generation: generations[0] }).unwrap();
        assert!(stale.is_empty());

        let (_, live) = handle_event(&mut state, &Event::DebounceElapsed { generation: generations[1] }).unwrap();
        assert_eq!(
            live,
            vec![Action::Search { generation: generations[1], query: "eth".to_string() }]
        );
        assert_eq!(state.phase, SearchPhase::Loading);
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut state = open_state();
        handle_event(&mut state, &Event::SetQuery("palermo".into())).unwrap();
        let old = state.generation;
        handle_event(&mut state, &Event::SetQuery("eth".into())).unwrap();

        let (rerender, _) = handle_event(
            &mut state,
            &Event::SearchCompleted { generation: old, results: all_items().to_vec() },
        )
        .unwrap();
        assert!(!rerender);
        assert!(state.results.is_empty());
        assert_eq!(state.phase, SearchPhase::Debouncing);
    }

    #[test]
    fn failure_enters_error_phase() {
        let mut state = open_state();
        handle_event(&mut state, &Event::SetQuery("eth".into())).unwrap();
        let generation = state.generation;

        handle_event(&mut state, &Event::SearchFailed { generation, message: "boom".into() }).unwrap();
        assert_eq!(state.phase, SearchPhase::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn backspace_below_minimum_returns_to_typing() {
        let mut state = open_state();
        type_str(&mut state, "et");
        let (_, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.phase, SearchPhase::Typing);
    }

    #[test]
    fn select_result_navigates_and_closes() {
        let mut state = open_state();
        handle_event(&mut state, &Event::SetQuery("eth".into())).unwrap();
        let generation = state.generation;
        let results = crate::search::filter_items(all_items(), "eth");
        handle_event(&mut state, &Event::SearchCompleted { generation, results }).unwrap();

        handle_event(&mut state, &Event::KeyDown).unwrap();
        let expected = state.selected_item().unwrap().link.clone();

        let (_, actions) = handle_event(&mut state, &Event::SelectResult).unwrap();
        assert_eq!(actions, vec![Action::Navigate { link: expected }]);
        assert!(!state.overlay_open);
    }

    #[test]
    fn item_actions_target_selected_result() {
        let mut state = open_state();
        let (_, none) = handle_event(&mut state, &Event::AddSelectedToList).unwrap();
        assert!(none.is_empty());

        handle_event(&mut state, &Event::SetQuery("eth".into())).unwrap();
        let generation = state.generation;
        let results = crate::search::filter_items(all_items(), "eth");
        let first_id = results[0].id;
        handle_event(&mut state, &Event::SearchCompleted { generation, results }).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::SubscribeSelected).unwrap();
        assert_eq!(actions, vec![Action::SubscribeToItem { id: first_id }]);
    }
}
