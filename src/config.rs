//! Persisted configuration
//!
//! The config file is a small JSON document in the user's home directory
//! holding the database URL and the currently selected user. Handlers only
//! see it through the [`ConfigStore`] trait.

use crate::{
    error::{GatorError, Result},
    utils::{EnvUtils, FileSystemUtils},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File name of the config inside the home directory
pub const CONFIG_FILE_NAME: &str = ".gatorconfig.json";

/// Mutation surface of the config that handlers rely on
pub trait ConfigStore {
    /// Select `username` as the current user and persist the change
    fn set_user(&mut self, username: &str) -> Result<()>;

    /// The currently selected user, if any
    fn current_user(&self) -> Option<&str>;
}

/// On-disk configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL
    #[serde(default)]
    pub db_url: String,
    /// Name of the currently selected user, empty when none
    #[serde(default)]
    pub current_user_name: String,
    /// Where this config was read from and will be written to
    #[serde(skip)]
    path: PathBuf,
}

impl Config {
    /// Create an empty configuration bound to `path` without touching disk
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Default location: `$HOME/.gatorconfig.json`
    pub fn default_path() -> Result<PathBuf> {
        EnvUtils::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or_else(|| GatorError::config("could not determine home directory (HOME is unset)"))
    }

    /// Read the configuration from its default location
    pub fn read() -> Result<Self> {
        Self::read_from(Self::default_path()?)
    }

    /// Read the configuration from `path`
    #[instrument(skip(path), fields(config_path = %path.as_ref().display()))]
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileSystemUtils::new()
            .read_file_to_string(path)
            .map_err(|e| GatorError::file_system("read", path, e))?;

        let mut config: Self = serde_json::from_str(&content).map_err(|e| {
            GatorError::config_with_source(format!("invalid JSON in {}", path.display()), e)
        })?;
        config.path = path.to_path_buf();

        debug!(current_user = %config.current_user_name, "Configuration loaded");
        Ok(config)
    }

    /// Write the whole configuration back to where it was read from
    #[instrument(skip(self), fields(config_path = %self.path.display()))]
    pub fn write(&self) -> Result<()> {
        let content = serde_json::to_string(self)
            .map_err(|e| GatorError::config_with_source("failed to serialize configuration", e))?;

        FileSystemUtils::new()
            .write_file(&self.path, content)
            .map_err(|e| GatorError::file_system("write", &self.path, e))
    }

    /// Path the configuration is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for Config {
    fn set_user(&mut self, username: &str) -> Result<()> {
        self.current_user_name = username.to_string();
        self.write()
    }

    fn current_user(&self) -> Option<&str> {
        Some(self.current_user_name.as_str()).filter(|name| !name.is_empty())
    }
}
