//! Environment variable utilities
//!
//! Resolves values the process picks up from its environment, such as the
//! home directory the config file lives in.

use std::{env, path::PathBuf};

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get an environment variable, treating an empty value as unset
    pub fn get_var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }

    /// The current user's home directory, taken from `HOME`
    pub fn home_dir() -> Option<PathBuf> {
        Self::get_var("HOME").map(PathBuf::from)
    }
}
