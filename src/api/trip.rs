//! Simulated trip-planning and wallet APIs.

use super::clock::Clock;
use crate::catalog;
use crate::domain::error::{GuideError, Result};
use crate::domain::TripPlan;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const TRIP_PLAN_DELAY: Duration = Duration::from_millis(500);
pub const WALLET_CONNECT_DELAY: Duration = Duration::from_millis(1000);
pub const WALLET_DISCONNECT_DELAY: Duration = Duration::from_millis(500);

/// Mock trip planner service.
#[derive(Debug, Clone)]
pub struct TripApi<C> {
    clock: C,
}

impl<C: Clock> TripApi<C> {
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Fetches the visitor's trip plan. The mock always succeeds.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors a real planner service.
    pub async fn get_trip_plan(&self) -> Result<TripPlan> {
        tracing::debug!("fetching trip plan");
        self.clock.sleep(TRIP_PLAN_DELAY).await;

        let plan = catalog::sample_trip_plan();
        tracing::debug!(
            events = plan.events.len(),
            restaurants = plan.restaurants.len(),
            friends = plan.friends.len(),
            "trip plan loaded"
        );
        Ok(plan)
    }
}

/// Mock wallet provider.
///
/// Holds the provider-side "connected" flag. Failures can be armed for the
/// next call to exercise error handling; an armed failure fires once.
#[derive(Debug)]
pub struct MockWalletApi<C> {
    clock: C,
    connected: AtomicBool,
    fail_connect: AtomicBool,
    fail_disconnect: AtomicBool,
}

impl<C: Clock> MockWalletApi<C> {
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            connected: AtomicBool::new(false),
            fail_connect: AtomicBool::new(false),
            fail_disconnect: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Marks the provider connected without the handshake delay.
    ///
    /// Used when a persisted session is restored.
    pub fn resume(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Makes the next [`connect`](Self::connect) call fail.
    pub fn fail_next_connect(&self) {
        self.fail_connect.store(true, Ordering::SeqCst);
    }

    /// Makes the next [`disconnect`](Self::disconnect) call fail.
    pub fn fail_next_disconnect(&self) {
        self.fail_disconnect.store(true, Ordering::SeqCst);
    }

    /// Connects the wallet after the handshake delay.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::ConnectFailure`] if a failure was armed.
    pub async fn connect(&self) -> Result<bool> {
        self.clock.sleep(WALLET_CONNECT_DELAY).await;

        if self.fail_connect.swap(false, Ordering::SeqCst) {
            return Err(GuideError::ConnectFailure("wallet rejected the connection".to_string()));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(true)
    }

    /// Disconnects the wallet after a short delay.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::DisconnectFailure`] if a failure was armed.
    pub async fn disconnect(&self) -> Result<bool> {
        self.clock.sleep(WALLET_DISCONNECT_DELAY).await;

        if self.fail_disconnect.swap(false, Ordering::SeqCst) {
            return Err(GuideError::DisconnectFailure("wallet did not respond".to_string()));
        }
        self.connected.store(false, Ordering::SeqCst);
        Ok(true)
    }
}
