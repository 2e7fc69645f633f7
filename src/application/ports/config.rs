//! Persistent settings port

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Storage for the persistent settings layer.
///
/// `load` sits in the middle of the merge order the CLI applies:
/// built-in defaults, then the stored file, then flags and environment.
/// A store that was never written is not an error; it loads as an
/// all-`None` `AppConfig` that leaves the defaults in place.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored settings, or an empty `AppConfig` when nothing
    /// has been saved yet
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the given settings, replacing any previous contents
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file, for display to the user
    fn path(&self) -> PathBuf;

    /// Seed the store with the built-in defaults. Refuses to clobber
    /// an existing store.
    async fn init(&self) -> Result<(), ConfigError>;
}
