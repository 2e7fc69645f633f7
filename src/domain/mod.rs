//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod health;
pub mod transcription;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use health::HealthStatus;
pub use transcription::{
    AudioFile, AudioMimeType, Phase, SubmitError, TranscriptionRequest, TranscriptionResult,
};
