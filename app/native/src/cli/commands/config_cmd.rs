//! Config CLI commands.
//!
//! Commands for managing the Token Animation configuration file.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{config_paths, custom_config_path};
use crate::error::CliError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a new configuration file at the default location with every
    /// option set to its default value.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  token-animation config init              # Create config at default location
  token-animation config init --force      # Overwrite existing config
  token-animation config init --path ~/my-config.jsonc  # Create at custom path
  token-animation config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses the first search path.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where Token Animation looks for configuration
    /// files, and indicates which one is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), CliError> {
    let config_path = custom_path
        .or_else(|| custom_config_path().cloned())
        .or_else(|| config_paths().into_iter().next())
        .unwrap_or_else(|| PathBuf::from("config.jsonc"));

    if config_path.exists() && !force {
        return Err(CliError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        CliError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    println!("Configuration file created at: {}", config_path.display());
    Ok(())
}

/// Show the configuration file path.
fn show_config_path() {
    if let Some(path) = custom_config_path() {
        println!("Using configuration file from --config: {}", path.display());
        return;
    }

    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;
    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found, defaults are in use.");
        println!("Run 'token-animation config init' to create one.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");

        init_config(false, Some(path.clone())).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate_config_template());
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, "{}").unwrap();

        let err = init_config(false, Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_config(true, Some(path.clone())).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
