//! Error types for the guide core.
//!
//! This module defines the centralized error type [`GuideError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! None of these errors are fatal. Callers catch them where they occur, turn them
//! into a transient notification and carry on; nothing is retried automatically.
//! A query that is too short is not an error at all: search simply answers with
//! an empty list.

use thiserror::Error;

/// The main error type for guide operations.
///
/// # Examples
///
/// ```
/// use devconnect_guide::GuideError;
///
/// let err = GuideError::ItemNotFound { id: 42 };
/// assert_eq!(err.to_string(), "Item not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum GuideError {
    /// A referenced catalog id is absent from the static item list.
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// The simulated search backend reported a transient failure.
    #[error("Search failed: {0}")]
    SearchFailure(String),

    /// The simulated wallet refused to connect.
    #[error("Wallet connection failed: {0}")]
    ConnectFailure(String),

    /// The simulated wallet refused to disconnect.
    #[error("Wallet disconnect failed: {0}")]
    DisconnectFailure(String),

    /// Reading or writing the persisted session flag failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A result could not be rendered for output.
    #[error("Output error: {0}")]
    Output(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for guide operations.
pub type Result<T> = std::result::Result<T, GuideError>;
