//! Path utilities for the guide's data directory.
//!
//! The data directory holds the persisted wallet session (`session.json`) and
//! the rotating log (`guide.log`).

use crate::Config;
use std::path::PathBuf;

const APP_DIR: &str = "devconnect-guide";

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Returns the default data directory, `$HOME/.local/share/devconnect-guide`.
///
/// Falls back to a relative `.devconnect-guide` when `HOME` is unset.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and every path when `HOME` is unset, come back
/// unchanged.
///
/// # Examples
///
/// ```
/// use devconnect_guide::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~/path"), "relative/~/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if path == "~" {
        home.into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

/// Resolves the data directory: the configured one (tilde-expanded) or the default.
#[must_use]
pub fn resolve_data_dir(config: &Config) -> PathBuf {
    config
        .data_dir
        .as_deref()
        .map_or_else(default_data_dir, |dir| PathBuf::from(expand_tilde(dir)))
}
