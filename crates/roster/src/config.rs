//! Configuration management for roster.
//!
//! Settings live in a YAML file (`roster.yaml` by default) with kebab-case
//! keys. Every section and field is optional; missing values fall back to
//! the built-in defaults.

use crate::domain::groups::default_groups;
use crate::domain::query::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "roster.yaml";

/// Number of sample employees generated at start-up by default
pub const DEFAULT_SEED_COUNT: usize = 100;

/// Page sizes offered by default
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct RosterConfig {
    /// Sample data generation
    pub seed: SeedConfig,

    /// Paging defaults
    pub paging: PagingConfig,

    /// Artificial storage latency
    pub latency: LatencyConfig,

    /// Group reference list
    pub groups: Vec<String>,
}

/// Sample data section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct SeedConfig {
    /// How many employees to generate
    pub count: usize,

    /// Fixed generator seed; random data when `None`
    pub rng_seed: Option<u64>,
}

/// Paging section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct PagingConfig {
    /// Page size used when a request does not name one
    pub default_page_size: usize,

    /// Page sizes offered to the user
    pub page_size_options: Vec<usize>,
}

/// Latency section, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LatencyConfig {
    /// Whether storage calls are delayed at all
    pub enabled: bool,

    /// Delay before a query
    pub query_ms: u64,

    /// Delay before a single-record lookup
    pub get_ms: u64,

    /// Delay before create, update and delete
    pub mutate_ms: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            paging: PagingConfig::default(),
            latency: LatencyConfig::default(),
            groups: default_groups(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SEED_COUNT,
            rng_seed: None,
        }
    }
}

impl PagingConfig {
    /// Accept a page size the user asked for explicitly.
    ///
    /// Allowed sizes are the configured options plus the default page size.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPageSize`] for zero and
    /// [`ValidationError::PageSizeNotOffered`] for any other size not on offer.
    pub fn check_page_size(&self, size: usize) -> std::result::Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::InvalidPageSize(size));
        }
        if size == self.default_page_size || self.page_size_options.contains(&size) {
            return Ok(());
        }
        Err(ValidationError::PageSizeNotOffered {
            size,
            options: self.page_size_options.clone(),
        })
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            query_ms: 300,
            get_ms: 200,
            mutate_ms: 500,
        }
    }
}

impl RosterConfig {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolve the active configuration.
    ///
    /// An explicit path must exist. Otherwise `roster.yaml` in `base_dir` is
    /// used when present, and the defaults when it is not.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if an explicit file cannot be read, or
    /// `Error::Config` if a file fails to parse or validate.
    pub async fn resolve(explicit: Option<&Path>, base_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let candidate = config_path(base_dir);
        if fs::try_exists(&candidate).await? {
            Self::load(&candidate).await
        } else {
            Ok(Self::default())
        }
    }

    /// Check the settings for consistency.
    ///
    /// A default page size missing from `page-size-options` is accepted
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for a zero page size, an empty or zero page
    /// size option, or a blank group name.
    pub fn validate(&self) -> Result<()> {
        if self.paging.default_page_size == 0 {
            return Err(Error::Config(
                "default-page-size must be at least 1".to_string(),
            ));
        }

        if self.paging.page_size_options.is_empty() {
            return Err(Error::Config(
                "page-size-options must not be empty".to_string(),
            ));
        }

        if self.paging.page_size_options.contains(&0) {
            return Err(Error::Config(
                "page-size-options must not contain 0".to_string(),
            ));
        }

        if self.groups.iter().any(|g| g.trim().is_empty()) {
            return Err(Error::Config("group names must not be blank".to_string()));
        }

        if !self
            .paging
            .page_size_options
            .contains(&self.paging.default_page_size)
        {
            tracing::warn!(
                default_page_size = self.paging.default_page_size,
                options = ?self.paging.page_size_options,
                "default-page-size is not one of page-size-options"
            );
        }

        Ok(())
    }
}

/// Path of the configuration file inside `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE_NAME)
}
