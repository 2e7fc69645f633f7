//! CLI module
//!
//! The UI shell: argument parsing, output formatting, and wiring of the
//! core use cases to the HTTP backend and config storage.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use args::{Cli, Commands, ConfigAction, TranscribeOptions, WatchOptions};
