//! Storage record models for the persistence layer.
//!
//! These types describe what is written to disk and stay separate from the
//! live wallet state so the file format can evolve on its own.

use serde::{Deserialize, Serialize};

/// Persisted wallet-session flag.
///
/// Only the facts needed to restore the signed-in UI on the next start are
/// kept; transactions are reloaded from the mock provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Whether the wallet was connected when the record was written.
    pub connected: bool,

    /// Address of the connected wallet, `None` when disconnected.
    #[serde(default)]
    pub address: Option<String>,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl SessionRecord {
    /// A record for a connected wallet, stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use devconnect_guide::storage::SessionRecord;
    ///
    /// let record = SessionRecord::connected("0xabc");
    /// assert!(record.connected);
    /// assert_eq!(record.address.as_deref(), Some("0xabc"));
    /// ```
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            connected: true,
            address: Some(address.into()),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    /// A record for a signed-out session.
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            address: None,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
