//! A single parsed unit of work

/// A command name plus its positional arguments, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Name the registry dispatches on
    pub name: String,
    /// Arguments passed verbatim to the handler
    pub args: Vec<String>,
}

impl Command {
    /// Create a new command
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// First positional argument, if any
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}
