//! Application layer: the search spotlight state machine.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                          ↑                                          ↓
//!                          └───── timer / search completions ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Search phase and key chord types
//! - [`state`]: Spotlight state container and view model computation
//! - [`controller`]: Tokio driver executing actions and feeding results back
//!
//! # Example
//!
//! ```rust
//! use devconnect_guide::app::{handle_event, AppState, Event, KeyChord};
//!
//! let mut state = AppState::new();
//! handle_event(&mut state, &Event::Shortcut(KeyChord::ctrl('k')))?;
//! assert!(state.overlay_open);
//! # Ok::<(), devconnect_guide::domain::GuideError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::SpotlightController;
pub use handler::{handle_event, Event, ItemAction, DEBOUNCE_DELAY};
pub use modes::{KeyChord, SearchPhase};
pub use state::AppState;
