//! Override CLI command.
//!
//! Checks whether the modifier-key override would force a change to
//! conclude instantly.

use clap::Args;
use colored::Colorize;

use crate::config;
use crate::conclude::UpdateOptions;
use crate::error::CliError;
use crate::policy::modifier::{FieldSet, HeldModifiers, Modifier, apply_override};
use crate::settings::{ModifierKeyMode, PolicyConfig};

/// Arguments of the `override` command.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  token-animation override --mode ctrl --held ctrl --fields x,y
  token-animation override --held shift --fields rotation
  token-animation override --mode alt --held alt --fields x --marked"#)]
pub struct OverrideArgs {
    /// Modifier mode to use instead of the configured one.
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ModifierKeyMode>,

    /// Modifier keys held during the change (comma-separated).
    #[arg(long, value_delimiter = ',', value_name = "KEYS")]
    pub held: Vec<Modifier>,

    /// Fields touched by the change (comma-separated).
    #[arg(long, value_delimiter = ',', value_name = "FIELDS", required = true)]
    pub fields: Vec<String>,

    /// Treat the change as already marked by someone else.
    #[arg(long)]
    pub marked: bool,
}

/// Execute the override command.
///
/// # Errors
///
/// Returns an error if the result cannot be printed.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other CLI functions
pub fn execute(args: &OverrideArgs) -> Result<(), CliError> {
    let mut policy_config = PolicyConfig::snapshot(&config::load_or_default());
    if let Some(mode) = args.mode {
        policy_config.modifier_key_mode = mode;
    }

    let held: HeldModifiers = args.held.iter().copied().collect();
    let fields: FieldSet = args.fields.iter().map(String::as_str).collect();
    let mut options = if args.marked {
        UpdateOptions { conclude_animations: Some(false), ..UpdateOptions::default() }
    } else {
        UpdateOptions::default()
    };

    let forced = apply_override(&policy_config, held, &fields, &mut options);

    println!("{} {}", "Mode:".bold(), policy_config.modifier_key_mode);
    println!("{} {fields}", "Fields:".bold());
    if forced {
        println!("{} {}", "Result:".bold(), "forced conclusion (skip)".red().bold());
    } else {
        println!("{} {}", "Result:".bold(), "no override".green().bold());
    }

    Ok(())
}
