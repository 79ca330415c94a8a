//! Configuration loaded from environment variables.

use std::env;

/// Origin the search backend listens on when nothing is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search backend
    pub origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `EXPERT_PORTAL_ORIGIN` - Base URL of the search backend (default: http://localhost:8000)
    /// - `RUST_LOG` - Log filter (default: no output)
    pub fn from_env() -> Self {
        let origin = env::var("EXPERT_PORTAL_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

        // A trailing slash would produce urls like "http://host//api/search".
        let origin = origin.trim_end_matches('/').to_string();

        Self { origin }
    }
}
