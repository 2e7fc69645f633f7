//! Health probe port interface

use async_trait::async_trait;
use thiserror::Error;

/// Health probe errors. Every variant maps to `Disconnected`.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("Health check timed out")]
    Timeout,

    #[error("Health check failed: {0}")]
    Transport(String),

    /// The backend answered but did not report itself healthy
    #[error("Backend reported status \"{0}\"")]
    Unhealthy(String),
}

/// Port for one bounded-latency backend reachability probe
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Issue a single health round-trip.
    ///
    /// # Returns
    /// `Ok(())` iff the backend reports itself healthy
    async fn check(&self) -> Result<(), ProbeError>;
}
