//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default backend origin when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default transcription request timeout in seconds
pub const DEFAULT_TRANSCRIBE_TIMEOUT_SECS: u64 = 60;

/// Default health probe timeout in seconds
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;

/// Default health poll interval in seconds
pub const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 10;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub transcribe_timeout: Option<u64>,
    pub health_timeout: Option<u64>,
    pub health_interval: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            transcribe_timeout: Some(DEFAULT_TRANSCRIBE_TIMEOUT_SECS),
            health_timeout: Some(DEFAULT_HEALTH_TIMEOUT_SECS),
            health_interval: Some(DEFAULT_HEALTH_INTERVAL_SECS),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            transcribe_timeout: other.transcribe_timeout.or(self.transcribe_timeout),
            health_timeout: other.health_timeout.or(self.health_timeout),
            health_interval: other.health_interval.or(self.health_interval),
        }
    }

    /// Get the backend origin, trimmed of any trailing slash
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Get the transcription timeout in seconds
    pub fn transcribe_timeout_or_default(&self) -> u64 {
        self.transcribe_timeout
            .unwrap_or(DEFAULT_TRANSCRIBE_TIMEOUT_SECS)
    }

    /// Get the health probe timeout in seconds
    pub fn health_timeout_or_default(&self) -> u64 {
        self.health_timeout.unwrap_or(DEFAULT_HEALTH_TIMEOUT_SECS)
    }

    /// Get the health poll interval in seconds
    pub fn health_interval_or_default(&self) -> u64 {
        self.health_interval.unwrap_or(DEFAULT_HEALTH_INTERVAL_SECS)
    }
}
