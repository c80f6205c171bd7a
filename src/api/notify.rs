//! Transient user notifications ("toasts").
//!
//! The API layer and the wallet session report outcomes by emitting a
//! [`Notification`] through a [`Notifier`]. Nothing else observes failures:
//! a toast and a log line are the whole error surface.

use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that logs every toast and keeps them for later inspection.
#[derive(Debug, Default)]
pub struct ToastLog {
    entries: Mutex<Vec<Notification>>,
}

impl ToastLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications emitted so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Removes and returns all recorded notifications.
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!(title = %notification.title, description = ?notification.description, "toast"),
            Severity::Error => tracing::warn!(title = %notification.title, description = ?notification.description, "toast"),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(notification);
        }
    }
}
