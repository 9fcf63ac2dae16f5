//! CLI module for Token Animation.
//!
//! The command-line interface evaluates the policy for ad-hoc movements,
//! lists the settings, and manages the configuration file.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::CliError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    cli.execute()
}
