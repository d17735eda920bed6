//! # hmerge CLI
//!
//! This is the binary entry point for the `hmerge` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Translating errors into a message on stderr and an exit code
//!   (see `hmerge::exit_codes`).
//!
//! The core logic lives in the `hmerge` library crate, so the binary stays a
//! thin wrapper around it.

mod cli;
mod commands;

use clap::Parser;
use hmerge::exit_codes;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.execute() {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}
