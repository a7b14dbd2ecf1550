//! Dependency injection for entity reducers.

use crate::client::RestClient;
use crate::notifications::NotificationSink;
use std::sync::Arc;

/// Dependencies injected into every entity reducer.
///
/// One environment is shared by all entity stores of a running studio: the
/// HTTP adapter (already scoped to the selected space) and the notification
/// sink.
#[derive(Clone)]
pub struct EntityEnvironment {
    /// CMS REST adapter.
    pub api: RestClient,

    /// Transient notification surface.
    pub notifier: Arc<dyn NotificationSink>,
}

impl EntityEnvironment {
    /// Create a new environment.
    #[must_use]
    pub fn new(api: RestClient, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { api, notifier }
    }
}

impl std::fmt::Debug for EntityEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityEnvironment")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
