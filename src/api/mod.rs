//! Simulated async API layer.
//!
//! These services stand in for network calls. Each one waits a fixed delay on
//! an injected [`Clock`] and answers from static data; nothing leaves the
//! process.
//!
//! # Modules
//!
//! - [`clock`]: Time abstraction (`SystemClock`, `RecordingClock`)
//! - [`notify`]: Toast notifications
//! - [`search`]: Catalog search and item actions
//! - [`trip`]: Trip plan and mock wallet provider

pub mod clock;
pub mod notify;
pub mod search;
pub mod trip;

pub use clock::{Clock, RecordingClock, SystemClock};
pub use notify::{Notification, Notifier, Severity, ToastLog};
pub use search::{SearchApi, SearchOptions, ITEM_ACTION_DELAY, SEARCH_DELAY};
pub use trip::{MockWalletApi, TripApi, TRIP_PLAN_DELAY, WALLET_CONNECT_DELAY, WALLET_DISCONNECT_DELAY};
