//! Rotating log file with size-based rotation and backup retention.
//!
//! [`RotatingFileWriter`] plugs into `tracing_subscriber::fmt` as a
//! [`MakeWriter`]. The fmt layer formats each event into one buffer and writes
//! it in a single call, so the size check runs once per log line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated backups kept next to the live file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the live file exceeds the size limit it is renamed to
/// `<name>.<nanos>` and a fresh file is started. Backups beyond
/// [`MAX_BACKUP_FILES`] are removed, oldest first.
pub struct RotatingFileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    /// Opened lazily on first write.
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for `file_path`. Nothing is opened until the first write.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_bytes(file_path, MAX_FILE_SIZE_BYTES)
    }

    pub const fn with_max_bytes(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf`, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors while rotating, opening or writing, or if another
    /// thread panicked while holding the file lock.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "No file available"));
        };

        handle.write_all(buf)?;
        handle.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        let Some(name) = self.file_path.file_name().and_then(|n| n.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::Other, "Invalid log file name"));
        };
        let backup = self.file_path.with_file_name(format!("{name}.{stamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup)?;
        }
        self.cleanup_old_backups(name)
    }

    /// Individual deletion errors are ignored so one stuck file does not stop
    /// the rest from being cleaned up.
    fn cleanup_old_backups(&self, name: &str) -> io::Result<()> {
        let Some(parent) = self.file_path.parent() else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Same-width nanosecond stamps: newest sorts last.
        backups.sort();
        backups.reverse();

        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

/// Per-event handle handed to the fmt layer.
pub struct LogLine<'a> {
    writer: &'a RotatingFileWriter,
}

impl Write for LogLine<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = LogLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogLine { writer: self }
    }
}
