//! ATC Console - air-traffic transcription and analysis client
//!
//! This crate provides the client-side orchestration for submitting audio
//! to a transcription backend and tracking backend reachability.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, the request/health state machines, and errors
//! - **Application**: Use cases (request controller, health monitor) and port
//!   interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP backend, XDG config)
//! - **CLI**: Command-line shell, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
