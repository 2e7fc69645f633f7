//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod health;
pub mod transcribe;

// Re-export common types
pub use config::ConfigStore;
pub use health::{HealthProbe, ProbeError};
pub use transcribe::{TranscribeBackend, TranscribeError, GENERIC_TRANSCRIBE_FAILURE};
