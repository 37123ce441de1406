//! Command registry and dispatch
//!
//! Maps command names to handlers and routes a [`Command`] to the handler
//! registered under its name. The registry adds nothing beyond the lookup:
//! whatever the handler returns is what the caller gets.

use crate::{
    core::{command::Command, state::State},
    error::{GatorError, Result},
};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// The contract every command implementation satisfies
///
/// Handlers validate their own arguments and report every failure through
/// the returned `Result`; they never panic or exit the process.
pub trait Handler {
    /// Run the command against the shared state
    fn handle(&self, state: &mut State, cmd: &Command) -> Result<()>;
}

impl<F> Handler for F
where
    F: Fn(&mut State, &Command) -> Result<()>,
{
    fn handle(&self, state: &mut State, cmd: &Command) -> Result<()> {
        self(state, cmd)
    }
}

/// Name to handler mapping
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any earlier handler
    pub fn register(&mut self, name: impl Into<String>, handler: impl Handler + 'static) {
        let name = name.into();
        if self.handlers.insert(name.clone(), Box::new(handler)).is_some() {
            debug!("Replaced handler for command: {name}");
        } else {
            debug!("Registered command: {name}");
        }
    }

    /// Dispatch `cmd` to its handler and return the handler's result unchanged
    #[instrument(skip(self, state, cmd), fields(command = %cmd.name))]
    pub fn run(&self, state: &mut State, cmd: &Command) -> Result<()> {
        let Some(handler) = self.handlers.get(&cmd.name) else {
            debug!("No handler found; available commands: {:?}", self.names());
            return Err(GatorError::unknown_command(&cmd.name));
        };

        debug!("Dispatching with {} argument(s)", cmd.args.len());
        handler.handle(state, cmd)
    }

    /// Whether a handler is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no commands are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.names())
            .finish()
    }
}
