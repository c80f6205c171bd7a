//! Search phase and keyboard chord types for the spotlight.
//!
//! # State Machine
//!
//! While the overlay is open the search box moves through these phases:
//!
//! ```text
//! Idle ──edit──▶ Typing ──(≥ 2 chars)──▶ Debouncing ──timer──▶ Loading
//!   ▲                                        ▲  │                 │
//!   └──────────── clear / close ─────────────┘  └─edit resets─┘   ▼
//!                                                     Results | Empty | Error
//! ```
//!
//! Any edit from `Results`, `Empty` or `Error` starts over at `Typing` or
//! `Debouncing`.

/// Phase of the spotlight search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Empty query, nothing shown.
    #[default]
    Idle,

    /// The query is non-empty but too short to search.
    Typing,

    /// A debounce timer is armed for the current query.
    Debouncing,

    /// The search for the current query is in flight.
    Loading,

    /// The last search returned matches.
    Results,

    /// The last search returned no matches.
    Empty,

    /// The last search failed.
    Error,
}

impl SearchPhase {
    /// True while the user is waiting on a search.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Debouncing | Self::Loading)
    }
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS, the Windows key elsewhere.
    pub meta: bool,
}

impl KeyChord {
    #[must_use]
    pub const fn plain(key: char) -> Self {
        Self { key, ctrl: false, meta: false }
    }

    #[must_use]
    pub const fn ctrl(key: char) -> Self {
        Self { key, ctrl: true, meta: false }
    }

    #[must_use]
    pub const fn meta(key: char) -> Self {
        Self { key, ctrl: false, meta: true }
    }

    /// True for Ctrl+K or Cmd+K, in either case.
    ///
    /// ```
    /// use devconnect_guide::app::KeyChord;
    ///
    /// assert!(KeyChord::ctrl('k').is_spotlight_toggle());
    /// assert!(KeyChord::meta('K').is_spotlight_toggle());
    /// assert!(!KeyChord::plain('k').is_spotlight_toggle());
    /// ```
    #[must_use]
    pub const fn is_spotlight_toggle(&self) -> bool {
        (self.ctrl || self.meta) && (self.key == 'k' || self.key == 'K')
    }
}
