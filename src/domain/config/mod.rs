//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_BASE_URL, DEFAULT_HEALTH_INTERVAL_SECS, DEFAULT_HEALTH_TIMEOUT_SECS,
    DEFAULT_TRANSCRIBE_TIMEOUT_SECS,
};
