//! # gator
//!
//! A minimal command-line shell. It loads the saved configuration, looks up
//! the handler registered for the requested command name, and runs it
//! against the shared application state.
//!
//! ## Features
//!
//! - Name-based command registry with uniform error propagation
//! - Handlers that share one mutable [`core::State`]
//! - JSON config persisted in `~/.gatorconfig.json`
//!
//! ## Example
//!
//! ```no_run
//! use gator::{config::Config, core::{builtin_registry, Command, State}};
//!
//! let mut state = State::new(Config::read()?);
//! let registry = builtin_registry();
//! registry.run(&mut state, &Command::new("login", ["alice"]))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
