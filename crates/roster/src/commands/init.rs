//! Implementation of the `init` command.
//!
//! Writes a `roster.yaml` holding the default configuration, so the
//! settings can be edited instead of typed from scratch.

use crate::config::{RosterConfig, config_path};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write the default configuration file into `base_dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns `Error::Config` if the file already exists and `force` is not
/// set, or `Error::Io` if it cannot be written.
pub async fn init(base_dir: &Path, force: bool) -> Result<PathBuf> {
    let path = config_path(base_dir);

    if !force && fs::try_exists(&path).await? {
        return Err(Error::Config(format!(
            "Roster is already initialized in this directory. Found existing '{}'",
            path.display()
        )));
    }

    RosterConfig::default().save(&path).await?;
    tracing::info!(path = %path.display(), "wrote default configuration");

    Ok(path)
}

/// Returns `true` if `base_dir` holds a configuration file
pub fn is_initialized(base_dir: &Path) -> bool {
    config_path(base_dir).exists()
}
