//! Application context for CLI command execution.
//!
//! `App` owns the resolved configuration and the seeded storage. One `App`
//! lives for a single command, or for a whole `shell` session so that
//! mutations stay visible between commands.
//!
//! # Example
//!
//! ```no_run
//! use roster::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(None, Path::new(".")).await?;
//!     let groups = app.storage().groups().await?;
//!     println!("{} groups", groups.len());
//!     Ok(())
//! }
//! ```

use crate::config::RosterConfig;
use crate::error::Result;
use crate::storage::{EmployeeStorage, create_storage};
use std::path::Path;

/// Application context for CLI operations.
pub struct App {
    /// The storage backend (trait object for polymorphism)
    storage: Box<dyn EmployeeStorage>,

    /// Configuration the storage was built from
    config: RosterConfig,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("storage", &"<dyn EmployeeStorage>")
            .finish()
    }
}

impl App {
    /// Resolve configuration and build storage.
    ///
    /// Uses `config_path` when given, else `roster.yaml` in `working_dir`,
    /// else the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or is invalid.
    pub async fn from_directory(config_path: Option<&Path>, working_dir: &Path) -> Result<Self> {
        let config = RosterConfig::resolve(config_path, working_dir).await?;
        Self::from_config(config)
    }

    /// Build an App from an already resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn from_config(config: RosterConfig) -> Result<Self> {
        let storage = create_storage(&config)?;
        Ok(Self { storage, config })
    }

    /// Get a mutable reference to the storage.
    pub fn storage_mut(&mut self) -> &mut dyn EmployeeStorage {
        self.storage.as_mut()
    }

    /// Get an immutable reference to the storage.
    pub fn storage(&self) -> &dyn EmployeeStorage {
        self.storage.as_ref()
    }

    /// The active configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }
}
