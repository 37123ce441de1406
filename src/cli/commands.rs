//! Command execution for the CLI

use crate::{
    cli::Args,
    config::Config,
    core::{State, builtin_registry},
};
use anyhow::Context;
use tracing::{debug, instrument};

/// Load configuration, build the registry and dispatch the requested command
///
/// Dispatch errors are returned as-is so the operator sees the handler's own
/// message; only failing to load the config is given extra context.
#[instrument(skip(args))]
pub fn execute_command(args: &Args) -> anyhow::Result<()> {
    let command = args.to_command()?;

    let config = match &args.config {
        Some(path) => Config::read_from(path),
        None => Config::read(),
    }
    .context("failed to read config")?;
    debug!("Using config at {}", config.path().display());

    let mut state = State::new(config);
    let registry = builtin_registry();

    registry.run(&mut state, &command)?;
    Ok(())
}
