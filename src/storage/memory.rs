//! In-memory session store.

use crate::domain::error::Result;
use crate::storage::backend::SessionStore;
use crate::storage::models::SessionRecord;

/// Keeps the session record in process memory; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    record: Option<SessionRecord>,
}

impl MemorySessionStore {
    /// A store pre-seeded with `record`, as if a previous run had saved it.
    #[must_use]
    pub const fn with_record(record: SessionRecord) -> Self {
        Self { record: Some(record) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionRecord>> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &SessionRecord) -> Result<()> {
        self.record = Some(record.clone());
        Ok(())
    }
}
