//! Time abstraction for the simulated APIs.
//!
//! Every mock API waits before answering. Waiting goes through [`Clock`] so
//! tests can replace real timers with [`RecordingClock`], which answers at once
//! and remembers what it was asked to wait for.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Time source and sleeper injected into the API layer.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Waits for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real clock backed by tokio timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Test clock: sleeps complete immediately and are recorded.
///
/// Clones share the same record, so a clone handed to an API can be inspected
/// from the test afterwards.
///
/// ```
/// use devconnect_guide::api::{Clock, RecordingClock};
/// use std::time::Duration;
///
/// # tokio_test_block(async {
/// let clock = RecordingClock::default();
/// clock.sleep(Duration::from_millis(300)).await;
/// assert_eq!(clock.sleeps(), vec![Duration::from_millis(300)]);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordingClock {
    now: DateTime<Utc>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingClock {
    /// A recording clock frozen at `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every duration slept so far, in call order.
    #[must_use]
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps
            .lock()
            .map(|sleeps| sleeps.clone())
            .unwrap_or_default()
    }
}

impl Default for RecordingClock {
    fn default() -> Self {
        Self::at(DateTime::<Utc>::default())
    }
}

impl Clock for RecordingClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }

    async fn sleep(&self, duration: Duration) {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
    }
}
