//! Session store abstraction.
//!
//! This module defines the [`SessionStore`] trait, the persisted key/value flag
//! the wallet session consults on start-up. Backends can be swapped without
//! touching the session logic.

use crate::domain::error::Result;
use crate::storage::models::SessionRecord;

/// Abstraction over where the wallet-session flag lives.
///
/// # Implementations
///
/// - [`JsonSessionStore`](crate::storage::JsonSessionStore): JSON file with atomic writes
/// - [`MemorySessionStore`](crate::storage::MemorySessionStore): in-process, for tests and ephemeral runs
///
/// # Examples
///
/// ```
/// use devconnect_guide::storage::{MemorySessionStore, SessionRecord, SessionStore};
///
/// let mut store = MemorySessionStore::default();
/// store.save(&SessionRecord::connected("0xabc"))?;
/// assert!(store.load()?.is_some_and(|r| r.connected));
/// # Ok::<(), devconnect_guide::GuideError>(())
/// ```
pub trait SessionStore: Send {
    /// Reads the persisted record, `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or holds invalid data.
    fn load(&self) -> Result<Option<SessionRecord>>;

    /// Replaces the persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, record: &SessionRecord) -> Result<()>;
}
