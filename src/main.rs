#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use gator::{cli, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Dispatch the requested command; errors become a message and exit code 1
    cli::execute_command(&args)
}
