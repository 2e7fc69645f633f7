//! Application layer - Use cases and port interfaces
//!
//! Contains the core orchestration logic and trait definitions
//! for external system interactions.

pub mod controller;
pub mod monitor;
pub mod ports;

// Re-export use cases
pub use controller::{RequestCallback, RequestSnapshot, TranscriptionController};
pub use monitor::{HealthMonitor, StatusCallback};
