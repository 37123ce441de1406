//! Command-line argument parsing

use crate::{
    core::Command,
    error::{GatorError, Result},
};
use clap::Parser;
use std::path::PathBuf;

/// gator - run a named command against your saved configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "gator")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.gatorconfig.json
    #[arg(long, env = "GATOR_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to run followed by its arguments; nothing after the command
    /// name is interpreted as a gator option
    #[arg(
        value_name = "COMMAND [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub argv: Vec<String>,
}

impl Args {
    /// The command this invocation asks for
    pub fn to_command(&self) -> Result<Command> {
        let (name, rest) = self
            .argv
            .split_first()
            .ok_or_else(|| GatorError::usage("not enough arguments provided"))?;
        Ok(Command::new(name.as_str(), rest.iter().cloned()))
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
