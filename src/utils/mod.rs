//! Utility modules for common functionality
//!
//! Provides reusable utilities for file operations and environment handling.

pub mod env;
pub mod fs;

pub use env::EnvUtils;
pub use fs::FileSystemUtils;
