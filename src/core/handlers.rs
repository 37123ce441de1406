//! Built-in command handlers

use crate::{
    core::{command::Command, registry::Registry, state::State},
    error::{GatorError, Result},
};
use tracing::{info, instrument, warn};

/// Build a registry with every built-in command registered
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("login", handle_login);
    registry
}

/// `login <username>`: make `username` the current user
///
/// Only the first argument is used; anything after it is ignored.
#[instrument(skip(state, cmd))]
pub fn handle_login(state: &mut State, cmd: &Command) -> Result<()> {
    let Some(username) = cmd.first_arg() else {
        return Err(GatorError::validation(
            "the login handler expects a single argument, the username",
        ));
    };

    if cmd.args.len() > 1 {
        warn!("Ignoring {} extra argument(s) to login", cmd.args.len() - 1);
    }

    state.config.set_user(username)?;

    info!("Current user updated");
    println!("User has been set to: {username}");
    Ok(())
}
