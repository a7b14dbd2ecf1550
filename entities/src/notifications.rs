//! Transient user-facing notifications.

/// Sink for transient success/error messages.
///
/// Fire-and-forget: implementations must not block and no return value is
/// consumed. Every operation failure surfaces through this sink exactly
/// once, with a message produced by
/// [`ApiError::user_message`](crate::error::ApiError::user_message).
pub trait NotificationSink: Send + Sync {
    /// Display a success message.
    fn success(&self, message: &str);

    /// Display an error message.
    fn error(&self, message: &str);
}

/// Notification sink that logs through `tracing`.
///
/// Stands in for a toast/banner surface when the engine runs headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "studio::notifications", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "studio::notifications", "{message}");
    }
}
