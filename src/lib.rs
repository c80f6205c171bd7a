//! Devconnect Guide: the data and state core of a city guide for Devconnect
//! Argentina.
//!
//! The crate provides:
//! - A searchable catalog of events, places to stay, restaurants and activities
//! - A debounced search spotlight driven by an event/action state machine
//! - Simulated trip-planning and wallet APIs with injectable latency
//! - A single wallet session persisted across restarts
//! - A publish/subscribe bus broadcasting the sidebar's collapsed flag

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Entry points (initialize / Guide, main.rs)         │  ← Wiring
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, debounce generations             │
//! │  - Action dispatching via the tokio controller      │
//! │  - View model computation (ui/)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ API Layer     │   │ Wallet        │   │ Layout        │
//! │ (api/)        │   │ (wallet/)     │   │ (layout/)     │
//! │ - Clock       │   │ - Session     │   │ - Sidebar bus │
//! │ - Search/trip │   │ - Storage     │   │ - Grid        │
//! │ - Toasts      │   │   (storage/)  │   │ - Visibility  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Search, Catalog, Trip & Domain Layers              │
//! │  - Substring matching, city filter (search/)        │
//! │  - Static sample data (catalog/)                    │
//! │  - Calendar, countdown (trip/)                      │
//! │  - Types and errors (domain/)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability & Infrastructure                     │
//! │  - tracing subscriber, rotating log file            │
//! │  - Data directory resolution                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Simulated async APIs, clock abstraction, notifications
//! - [`app`]: Spotlight state machine with event/action model
//! - [`catalog`]: Static sample data
//! - [`domain`]: Core domain types and errors
//! - [`infrastructure`]: Data directory paths
//! - [`layout`]: Sidebar broadcast and its listeners
//! - [`observability`]: Structured logging to a rotating file
//! - [`search`]: Query normalization and matching
//! - [`storage`]: Persisted wallet-session flag
//! - [`trip`]: Calendar bucketing and countdown
//! - [`ui`]: Spotlight view models
//! - [`wallet`]: The wallet session
//!
//! # Configuration
//!
//! ```toml
//! # guide.toml
//! data_dir = "~/.local/share/devconnect-guide"
//! trace_level = "debug"
//! simulate_search_error = false
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect_guide::{initialize, Config};
//! use devconnect_guide::app::{Event, KeyChord};
//!
//! # async fn run() -> devconnect_guide::Result<()> {
//! let guide = initialize(&Config::default())?;
//!
//! let mut spotlight = guide.spotlight();
//! spotlight.dispatch(Event::Shortcut(KeyChord::ctrl('k')))?;
//! spotlight.dispatch(Event::SetQuery("palermo".into()))?;
//! spotlight.settle().await?;
//!
//! for row in spotlight.viewmodel().rows {
//!     println!("{} ({})", row.title, row.meta);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod layout;
pub mod observability;
pub mod search;
pub mod storage;
pub mod trip;
pub mod ui;
pub mod wallet;

pub use domain::{GuideError, Result};

use api::{Clock, MockWalletApi, SearchApi, SearchOptions, SystemClock, ToastLog, TripApi};
use app::SpotlightController;
use layout::SidebarBus;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use storage::{JsonSessionStore, SessionStore};
use wallet::WalletSession;

/// File holding the persisted wallet session, inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Guide configuration.
///
/// Simulated API delays are fixed and deliberately not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for the session file and logs. `~` is expanded.
    ///
    /// Default: `~/.local/share/devconnect-guide`
    pub data_dir: Option<String>,

    /// Log level or `EnvFilter` directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Make every search fail, to exercise the error state.
    pub simulate_search_error: bool,
}

impl Config {
    /// Parses configuration from a string map, e.g. collected `key=value`
    /// arguments.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`, `trace_level`: taken as-is, empty values ignored
    /// - `simulate_search_error`: `true`/`1`/`yes` enable it, anything else disables
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use devconnect_guide::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    /// map.insert("simulate_search_error".to_string(), "true".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.simulate_search_error);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            map.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let simulate_search_error = map
            .get("simulate_search_error")
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"));

        Self {
            data_dir: non_empty("data_dir"),
            trace_level: non_empty("trace_level"),
            simulate_search_error,
        }
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::Io`] if the file cannot be read and
    /// [`GuideError::Config`] if it is not valid TOML for this struct.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| GuideError::Config(format!("{}: {e}", path.display())))
    }

    const fn search_options(&self) -> SearchOptions {
        SearchOptions {
            delay: api::SEARCH_DELAY,
            simulate_error: self.simulate_search_error,
        }
    }
}

/// All guide services, wired once and owned together.
///
/// Components receive what they need from here instead of reaching for
/// globals: the spotlight gets the search API, the layout gets the sidebar
/// bus, and the wallet session is the single one for the process.
pub struct Guide<C> {
    pub search: Arc<SearchApi<C>>,
    pub trips: TripApi<C>,
    pub wallet: Arc<WalletSession<C>>,
    pub sidebar: SidebarBus,
    pub toasts: Arc<ToastLog>,
    clock: C,
    config: Config,
}

impl<C> Guide<C>
where
    C: Clock + Clone + 'static,
{
    /// Wires the services around an injected clock and session store.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted session cannot be read.
    pub fn assemble(clock: C, store: Box<dyn SessionStore>, config: &Config) -> Result<Self> {
        let toasts = Arc::new(ToastLog::new());
        let search = Arc::new(SearchApi::new(clock.clone(), toasts.clone()));
        let wallet = WalletSession::restore(MockWalletApi::new(clock.clone()), store, toasts.clone())?;

        Ok(Self {
            search,
            trips: TripApi::new(clock.clone()),
            wallet: Arc::new(wallet),
            sidebar: SidebarBus::default(),
            toasts,
            clock,
            config: config.clone(),
        })
    }

    /// A fresh spotlight over the shared search API.
    #[must_use]
    pub fn spotlight(&self) -> SpotlightController<C> {
        SpotlightController::new(Arc::clone(&self.search), self.clock.clone())
            .with_search_options(self.config.search_options())
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

/// Initializes the guide with configuration.
///
/// Resolves the data directory, opens the JSON session store there and
/// restores the wallet session from it. Tracing is not installed here; call
/// [`observability::init_tracing`] first if logs are wanted.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the session
/// file exists but cannot be read.
///
/// # Example
///
/// ```rust,no_run
/// use devconnect_guide::{initialize, Config};
///
/// let guide = initialize(&Config::default())?;
/// println!("connected: {}", guide.wallet.is_connected());
/// # Ok::<(), devconnect_guide::GuideError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Guide<SystemClock>> {
    let data_dir = infrastructure::resolve_data_dir(config);
    tracing::debug!(data_dir = %data_dir.display(), "initializing guide");

    std::fs::create_dir_all(&data_dir)?;
    let store = JsonSessionStore::open(data_dir.join(SESSION_FILE_NAME))?;

    Guide::assemble(SystemClock, Box::new(store), config)
}
