//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Valid configuration keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "base_url",
    "transcribe_timeout",
    "health_timeout",
    "health_interval",
];

/// Check whether a config key is recognized
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// ATC Console - air-traffic transcription and analysis client
#[derive(Parser, Debug)]
#[command(name = "atc-console")]
#[command(version)]
#[command(about = "Upload audio for transcription and intent analysis, and monitor backend health")]
#[command(long_about = None)]
pub struct Cli {
    /// Audio file to upload for transcription
    #[arg(value_name = "AUDIO_FILE")]
    pub audio: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(short, long, value_name = "URL", env = "ATC_BASE_URL")]
    pub base_url: Option<String>,

    /// Print the raw JSON response instead of formatted cards
    #[arg(long)]
    pub json: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll backend health until interrupted
    Watch {
        /// Poll interval in seconds
        #[arg(short, long, value_name = "SECS")]
        interval: Option<u64>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved options for a one-shot transcription run
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub audio_path: PathBuf,
    pub base_url: String,
    pub transcribe_timeout_secs: u64,
    pub health_timeout_secs: u64,
    pub json: bool,
}

/// Resolved options for the watch loop
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub base_url: String,
    pub health_timeout_secs: u64,
    pub interval_secs: u64,
}
