//! Environment-variable configuration for the demo binary.

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// CMS API root, e.g. `http://localhost:8000`.
    pub api_url: String,
    /// Space to scope requests to.
    pub space: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// - `STUDIO_API_URL` (default `http://localhost:8000`)
    /// - `STUDIO_SPACE` (optional numeric space id)
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("STUDIO_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_owned()),
            space: std::env::var("STUDIO_SPACE")
                .ok()
                .and_then(|space| space.parse().ok()),
        }
    }
}
