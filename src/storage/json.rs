//! JSON file-based session store.
//!
//! Keeps the wallet-session record in a small, human-readable JSON file. Writes
//! go to a temporary file which is then renamed over the target, so a crash
//! never leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "session": {
//!     "connected": true,
//!     "address": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
//!     "updated_at": 1763164800
//!   }
//! }
//! ```

use crate::domain::error::{GuideError, Result};
use crate::storage::backend::SessionStore;
use crate::storage::models::SessionRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    session: Option<SessionRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            session: None,
        }
    }
}

/// JSON file session store.
///
/// The record is loaded once when the store is opened and cached in memory;
/// every save writes through to disk.
#[derive(Debug)]
pub struct JsonSessionStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonSessionStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file is treated as an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - The file cannot be read
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use devconnect_guide::storage::JsonSessionStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonSessionStore::open(PathBuf::from("/tmp/guide/session.json"))?;
    /// # Ok::<(), devconnect_guide::GuideError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening session store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no session file yet, starting empty");
            StoreData::default()
        };

        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| GuideError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(GuideError::Storage(format!(
                "unsupported session file version {}",
                data.version
            )));
        }

        tracing::debug!(version = data.version, has_session = data.session.is_some(), "loaded session file");
        Ok(data)
    }

    /// Writes the cached data to disk via write-to-temp and rename.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| GuideError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "session file saved");
        Ok(())
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Option<SessionRecord>> {
        Ok(self.data.session.clone())
    }

    fn save(&mut self, record: &SessionRecord) -> Result<()> {
        let _span = tracing::debug_span!("json_save_session", connected = record.connected).entered();

        self.data.version = FORMAT_VERSION;
        self.data.session = Some(record.clone());
        self.save_to_file()
    }
}
