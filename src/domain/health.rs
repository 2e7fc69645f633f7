//! Backend reachability state

use std::fmt;

/// Current belief about backend reachability.
///
/// Lifecycle: starts at `Unknown` when the monitor is created; each probe
/// cycle goes `* -> Checking -> (Connected | Disconnected)`. There is no
/// terminal state, the cycle repeats until the monitor is stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Checking,
    Connected,
    Disconnected,
}

impl HealthStatus {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Checking => "checking",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }

    /// Whether the backend is currently believed reachable
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
