//! Side effects requested by the spotlight state machine.
//!
//! [`handle_event`](super::handle_event) never sleeps or calls an API itself.
//! It returns [`Action`]s, and the
//! [`SpotlightController`](super::SpotlightController) carries them out,
//! feeding any result back in as a new event.
//!
//! # Example
//!
//! ```rust
//! use devconnect_guide::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::ArmDebounce { generation: 3, delay: Duration::from_millis(300) },
//! ];
//! assert_eq!(actions.len(), 1);
//! ```

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Starts the debounce timer for a query edit.
    ///
    /// When it fires, the controller sends
    /// [`Event::DebounceElapsed`](super::Event::DebounceElapsed) with the same
    /// generation. Older timers are not cancelled; their events are stale and
    /// get dropped.
    ArmDebounce {
        generation: u64,
        delay: Duration,
    },

    /// Runs a search against the API.
    Search {
        generation: u64,
        query: String,
    },

    /// Opens a route.
    Navigate {
        link: String,
    },

    AddToList {
        id: u32,
    },

    AddToFavorites {
        id: u32,
    },

    SubscribeToItem {
        id: u32,
    },
}
