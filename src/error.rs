//! Error types for gator
//!
//! Every failure in the command pipeline is one of these variants. Handlers,
//! the registry and the config store all return them as-is; only the process
//! boundary decides how to report them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gator
#[derive(Error, Debug)]
pub enum GatorError {
    /// The process was started without enough arguments to form a command
    #[error("{message}")]
    Usage { message: String },

    /// No handler is registered under the requested command name
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// A handler rejected its arguments before doing any work
    #[error("{message}")]
    Validation { message: String },

    /// Configuration errors (bad contents, unresolvable location)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GatorError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error caused by another error
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GatorError>;
