//! File-based structured logging.
//!
//! Everything in the crate logs through `tracing` macros and spans. This
//! module installs the subscriber that writes those events to a rotating log
//! file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → guide.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data_dir>/guide.log`, default data dir
//!   `~/.local/share/devconnect-guide`
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3-backup retention
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, LOG_FILE_NAME};
