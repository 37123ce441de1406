//! Core command machinery
//!
//! Contains the command shape, the shared application state, the registry
//! that dispatches commands, and the built-in handlers.

pub mod command;
pub mod handlers;
pub mod registry;
pub mod state;

pub use command::Command;
pub use handlers::{builtin_registry, handle_login};
pub use registry::{Handler, Registry};
pub use state::State;
