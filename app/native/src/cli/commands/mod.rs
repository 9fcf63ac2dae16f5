//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! submodules:
//!
//! - `config_cmd` - Configuration file management commands
//! - `decide` - Policy evaluation for a single movement
//! - `override_cmd` - Modifier-key override check
//! - `settings_cmd` - Settings listing
//! - `types` - Shared argument types

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config;
use crate::error::CliError;

pub mod config_cmd;
pub mod decide;
pub mod override_cmd;
pub mod settings_cmd;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use decide::DecideArgs;
pub use override_cmd::OverrideArgs;
pub use settings_cmd::SettingsArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Token Animation CLI - inspect and tune the movement animation policy.
#[derive(Parser, Debug)]
#[command(name = "token-animation")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH", env = "TOKEN_ANIMATION_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Decide how a movement is animated.
    ///
    /// Evaluates the policy against the configuration file (plus any --set
    /// overrides) and prints the decision and the gate that produced it.
    Decide(DecideArgs),

    /// Check the modifier-key override for a pending change.
    Override(OverrideArgs),

    /// List every setting with its default and current value.
    Settings(SettingsArgs),

    /// Configuration file management commands.
    ///
    /// Initialize and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output the configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(token-animation completions --shell zsh)"
    ///   token-animation completions --shell fish > ~/.config/fish/completions/token-animation.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), CliError> {
        if let Some(path) = self.config_path() {
            // `config init` may be about to create the file.
            let creating = matches!(self.command, Commands::Config(ConfigCommands::Init { .. }));
            if !path.exists() && !creating {
                return Err(CliError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Decide(args) => decide::execute(args),
            Commands::Override(args) => override_cmd::execute(args),
            Commands::Settings(args) => settings_cmd::execute(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", config::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "token-animation", &mut io::stdout());
    }
}
