//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "blogs_output.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Destination of the fixture file, overwritten on every run.
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output_path = lookup("FIXTURE_OUTPUT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::default().output_path);

        Self { output_path }
    }
}
