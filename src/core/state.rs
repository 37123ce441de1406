//! Application state shared by every handler

use crate::config::ConfigStore;

/// The one mutable record threaded through a run
///
/// Created once at startup and lent to each handler as `&mut State`, so a
/// handler always sees what earlier handlers changed.
pub struct State {
    /// Persisted configuration
    pub config: Box<dyn ConfigStore>,
}

impl State {
    /// Wrap a config store
    pub fn new(config: impl ConfigStore + 'static) -> Self {
        Self {
            config: Box::new(config),
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("current_user", &self.config.current_user())
            .finish()
    }
}
