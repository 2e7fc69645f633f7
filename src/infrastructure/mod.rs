//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the HTTP backend and local config storage.

pub mod api;
pub mod config;

// Re-export adapters
pub use api::HttpBackend;
pub use config::XdgConfigStore;
