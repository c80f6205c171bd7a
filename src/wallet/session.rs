//! Wallet session service.
//!
//! [`WalletSession`] is the single source of truth for wallet connectivity. It
//! is created once at start-up and shared by reference (or `Arc`) with every
//! consumer; nothing reaches it through globals.
//!
//! # State Transitions
//!
//! ```text
//!            connect()                 provider ok
//! disconnected ───────▶ connecting ─────────────────▶ connected
//!      ▲                    │ provider error               │
//!      │                    ▼                              │
//!      └──────────── (unchanged) ◀──── disconnect() ───────┘
//! ```
//!
//! The `connecting` flag is the guard against double invocation: a second
//! `connect()` issued while the first is in flight returns
//! [`ConnectOutcome::InProgress`] without touching the provider. `disconnect()`
//! has the same guard through `disconnecting`.
//!
//! The state lives behind a `std::sync::Mutex` that is never held across an
//! await point.

use crate::api::clock::Clock;
use crate::api::notify::{Notification, Notifier};
use crate::api::trip::MockWalletApi;
use crate::catalog::{sample_transactions, MOCK_WALLET_ADDRESS};
use crate::domain::error::{GuideError, Result};
use crate::domain::wallet::short_address;
use crate::domain::Transaction;
use crate::storage::{SessionRecord, SessionStore};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Snapshot of the wallet session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WalletState {
    pub connected: bool,
    pub connecting: bool,
    pub disconnecting: bool,
    pub address: Option<String>,
    pub transactions: Vec<Transaction>,
}

impl WalletState {
    /// Display form of the address, e.g. `0x71C7...976F`.
    #[must_use]
    pub fn short_address(&self) -> Option<String> {
        self.address.as_deref().map(short_address)
    }

    fn signed_in() -> Self {
        Self {
            connected: true,
            connecting: false,
            disconnecting: false,
            address: Some(MOCK_WALLET_ADDRESS.to_string()),
            transactions: sample_transactions(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// This call performed the connection.
    Connected,
    /// The wallet was already connected; nothing happened.
    AlreadyConnected,
    /// Another connect is in flight; this call was dropped by the guard.
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectOutcome {
    Disconnected,
    /// The wallet was not connected; nothing happened.
    AlreadyDisconnected,
    /// Another disconnect is in flight; this call was dropped by the guard.
    InProgress,
}

/// The process-wide wallet session.
pub struct WalletSession<C> {
    api: MockWalletApi<C>,
    store: Mutex<Box<dyn SessionStore>>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<WalletState>,
}

impl<C: Clock> WalletSession<C> {
    /// Restores the session from `store`.
    ///
    /// Runs synchronously so the first render already sees the persisted
    /// state. A connected record brings back the mock address and the
    /// transaction list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn restore(api: MockWalletApi<C>, store: Box<dyn SessionStore>, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let record = store.load()?;
        let connected = record.as_ref().is_some_and(|r| r.connected);

        tracing::debug!(connected = connected, "restoring wallet session");

        let state = if connected {
            api.resume(true);
            WalletState::signed_in()
        } else {
            WalletState::default()
        };

        Ok(Self {
            api,
            store: Mutex::new(store),
            notifier,
            state: Mutex::new(state),
        })
    }

    /// Current session snapshot.
    #[must_use]
    pub fn state(&self) -> WalletState {
        self.lock_state().clone()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.lock_state().connected
    }

    /// Provider handle, e.g. to arm simulated failures.
    #[must_use]
    pub const fn provider(&self) -> &MockWalletApi<C> {
        &self.api
    }

    /// Connects the wallet.
    ///
    /// On success the session gets the mock address and transactions, the
    /// flag is persisted and a "Wallet Connected" toast is emitted. On failure
    /// a "Connection Failed" toast is emitted and the state is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::ConnectFailure`] when the provider refuses.
    pub async fn connect(&self) -> Result<ConnectOutcome> {
        {
            let mut state = self.lock_state();
            if state.connecting {
                tracing::debug!("connect already in progress, ignoring");
                return Ok(ConnectOutcome::InProgress);
            }
            if state.connected {
                tracing::debug!("wallet already connected");
                return Ok(ConnectOutcome::AlreadyConnected);
            }
            state.connecting = true;
        }

        tracing::debug!("connecting wallet");
        let result = self.api.connect().await;

        let mut state = self.lock_state();
        state.connecting = false;

        match result {
            Ok(true) => {
                *state = WalletState::signed_in();
                drop(state);

                self.persist(&SessionRecord::connected(MOCK_WALLET_ADDRESS));
                self.notifier.notify(
                    Notification::success("Wallet Connected")
                        .with_description("Your wallet has been successfully connected."),
                );
                tracing::info!(address = MOCK_WALLET_ADDRESS, "wallet connected");
                Ok(ConnectOutcome::Connected)
            }
            Ok(false) | Err(_) => {
                drop(state);

                let err = match result {
                    Err(e) => e,
                    Ok(_) => GuideError::ConnectFailure("wallet declined".to_string()),
                };
                tracing::warn!(error = %err, "wallet connection failed");
                self.notifier.notify(
                    Notification::error("Connection Failed")
                        .with_description("Failed to connect wallet. Please try again."),
                );
                Err(err)
            }
        }
    }

    /// Disconnects the wallet.
    ///
    /// Clears the address and transactions, persists the flag and emits a
    /// "Wallet Disconnected" toast. Calling it on a disconnected session, or
    /// while another disconnect is in flight, is a no-op without a toast.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::DisconnectFailure`] when the provider refuses;
    /// the session then stays connected.
    pub async fn disconnect(&self) -> Result<DisconnectOutcome> {
        {
            let mut state = self.lock_state();
            if state.disconnecting {
                tracing::debug!("disconnect already in progress, ignoring");
                return Ok(DisconnectOutcome::InProgress);
            }
            if !state.connected {
                tracing::debug!("wallet already disconnected");
                return Ok(DisconnectOutcome::AlreadyDisconnected);
            }
            state.disconnecting = true;
        }

        let result = self.api.disconnect().await;
        self.lock_state().disconnecting = false;

        match result {
            Ok(true) => {
                {
                    let mut state = self.lock_state();
                    state.connected = false;
                    state.address = None;
                    state.transactions.clear();
                }
                self.persist(&SessionRecord::disconnected());
                self.notifier.notify(
                    Notification::success("Wallet Disconnected")
                        .with_description("Your wallet has been disconnected."),
                );
                tracing::info!("wallet disconnected");
                Ok(DisconnectOutcome::Disconnected)
            }
            other => {
                let err = match other {
                    Err(e) => e,
                    Ok(_) => GuideError::DisconnectFailure("wallet declined".to_string()),
                };
                tracing::warn!(error = %err, "wallet disconnect failed");
                self.notifier.notify(
                    Notification::error("Disconnect Failed").with_description("Failed to disconnect wallet."),
                );
                Err(err)
            }
        }
    }

    /// Writes the flag; a failed write is logged and otherwise ignored.
    fn persist(&self, record: &SessionRecord) {
        let result = self
            .store
            .lock()
            .map_err(|e| GuideError::Storage(format!("session store lock poisoned: {e}")))
            .and_then(|mut store| store.save(record));

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist wallet session");
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::clock::RecordingClock;
    use crate::api::notify::ToastLog;
    use crate::storage::MemorySessionStore;

    fn session(store: MemorySessionStore) -> (WalletSession<RecordingClock>, Arc<ToastLog>) {
        let toasts = Arc::new(ToastLog::new());
        let session = WalletSession::restore(
            MockWalletApi::new(RecordingClock::default()),
            Box::new(store),
            toasts.clone(),
        )
        .unwrap();
        (session, toasts)
    }

    #[test]
    fn restores_connected_flag_synchronously() {
        let (session, toasts) = session(MemorySessionStore::with_record(SessionRecord::connected(MOCK_WALLET_ADDRESS)));

        let state = session.state();
        assert!(state.connected);
        assert_eq!(state.short_address().as_deref(), Some("0x71C7...976F"));
        assert_eq!(state.transactions.len(), 3);
        assert!(session.provider().is_connected());
        assert!(toasts.entries().is_empty());
    }

    #[tokio::test]
    async fn failed_connect_leaves_state_unchanged() {
        let (session, toasts) = session(MemorySessionStore::default());
        session.provider().fail_next_connect();

        let err = session.connect().await.unwrap_err();
        assert!(matches!(err, GuideError::ConnectFailure(_)));
        assert_eq!(session.state(), WalletState::default());
        assert_eq!(toasts.entries()[0].title, "Connection Failed");
    }

    #[tokio::test]
    async fn failed_disconnect_keeps_wallet_connected() {
        let (session, toasts) = session(MemorySessionStore::default());
        session.connect().await.unwrap();
        session.provider().fail_next_disconnect();

        assert!(session.disconnect().await.is_err());
        assert!(session.is_connected());
        assert_eq!(toasts.entries().last().unwrap().title, "Disconnect Failed");
    }

    #[tokio::test]
    async fn connect_twice_in_sequence_is_a_no_op() {
        let (session, toasts) = session(MemorySessionStore::default());

        assert_eq!(session.connect().await.unwrap(), ConnectOutcome::Connected);
        assert_eq!(session.connect().await.unwrap(), ConnectOutcome::AlreadyConnected);
        assert_eq!(toasts.entries().len(), 1);
    }
}
