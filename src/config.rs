//! Tracker configuration loaded from TOML.
//!
//! ```toml
//! [modules]
//! branch_prefix = "feature/"
//! default_kernel_version = "v1.0.0"
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::review::{
    domain::{BranchName, ReviewDomainError},
    services::ModuleDefaults,
};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not acceptable.
    #[error("invalid config value: {0}")]
    Invalid(#[from] ReviewDomainError),
}

/// Top-level tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Module registration settings.
    #[serde(default)]
    pub modules: ModuleSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Module registration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSettings {
    /// Prefix prepended to module names to form branch names.
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    /// Kernel version recorded when a request names none.
    #[serde(default = "default_kernel_version")]
    pub default_kernel_version: String,
}

fn default_branch_prefix() -> String {
    BranchName::DEFAULT_PREFIX.to_owned()
}

fn default_kernel_version() -> String {
    crate::review::services::DEFAULT_KERNEL_VERSION.to_owned()
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            branch_prefix: default_branch_prefix(),
            default_kernel_version: default_kernel_version(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_owned()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl TrackerConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read or
    /// [`ConfigError::Parse`] when it is not valid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let contents = std::fs::read_to_string(file).map_err(|source| ConfigError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %file.display(), "loaded tracker config");
        Ok(config)
    }

    /// Builds validated registration defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the branch prefix or kernel
    /// version is unusable.
    pub fn module_defaults(&self) -> Result<ModuleDefaults, ConfigError> {
        Ok(ModuleDefaults::new(
            self.modules.branch_prefix.clone(),
            self.modules.default_kernel_version.clone(),
        )?)
    }
}
