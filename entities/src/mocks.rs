//! Mock collaborators for tests.

use crate::notifications::NotificationSink;
use std::sync::{Arc, Mutex};

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Success message.
    Success(String),
    /// Error message.
    Error(String),
}

/// Notification sink that records every message for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notification received so far, in arrival order.
    #[must_use]
    pub fn log(&self) -> Vec<Notification> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl NotificationSink for RecordingNotifier {
    fn success(&self, message: &str) {
        if let Ok(mut log) = self.log.lock() {
            log.push(Notification::Success(message.to_owned()));
        }
    }

    fn error(&self, message: &str) {
        if let Ok(mut log) = self.log.lock() {
            log.push(Notification::Error(message.to_owned()));
        }
    }
}
