//! Settings CLI command.
//!
//! Lists every registered setting with its default and current value.

use clap::Args;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output::{print_json, truncate};
use crate::config::{self, TokenAnimationConfig};
use crate::error::CliError;
use crate::settings::{SETTINGS, SettingsView};

/// Maximum width of the hint column.
const HINT_WIDTH: usize = 60;

/// Arguments of the `settings` command.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Print the settings as JSON.
    #[arg(long)]
    pub json: bool,

    /// Include the full description of every setting.
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Scope")]
    scope: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Hint")]
    hint: String,
}

fn rows(current: &TokenAnimationConfig, verbose: bool) -> Vec<SettingRow> {
    SETTINGS
        .iter()
        .map(|descriptor| SettingRow {
            key: descriptor.key.to_string(),
            name: descriptor.name.to_string(),
            scope: descriptor.scope.as_str().to_string(),
            default: descriptor.default.to_string(),
            current: current.get(descriptor.key).map_or_else(|| "-".to_string(), |v| v.to_string()),
            hint: if verbose {
                descriptor.hint.to_string()
            } else {
                truncate(descriptor.hint, HINT_WIDTH)
            },
        })
        .collect()
}

/// Execute the settings command.
///
/// # Errors
///
/// Returns an error if the settings cannot be serialized.
pub fn execute(args: &SettingsArgs) -> Result<(), CliError> {
    let current = config::load_or_default();

    if args.json {
        let entries: Vec<_> = SETTINGS
            .iter()
            .map(|descriptor| {
                serde_json::json!({
                    "descriptor": descriptor,
                    "current": current.get(descriptor.key),
                })
            })
            .collect();
        print_json(&serde_json::to_value(entries)?);
        return Ok(());
    }

    let table = Table::new(rows(&current, args.verbose))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..5)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_setting() {
        let rows = rows(&TokenAnimationConfig::default(), false);
        assert_eq!(rows.len(), SETTINGS.len());
        assert_eq!(rows[0].key, "animate");
        assert_eq!(rows[1].scope, "client");
    }

    #[test]
    fn test_rows_show_current_values() {
        let mut config = TokenAnimationConfig::default();
        config.world.duration_cap = 1200.0;

        let rows = rows(&config, false);
        let cap = rows.iter().find(|row| row.key == "duration-cap").unwrap();
        assert_eq!(cap.default, "0");
        assert_eq!(cap.current, "1200");
    }

    #[test]
    fn test_hints_are_truncated_unless_verbose() {
        let config = TokenAnimationConfig::default();
        assert!(rows(&config, false).iter().all(|row| row.hint.chars().count() <= HINT_WIDTH));
        assert!(rows(&config, true).iter().any(|row| row.hint.chars().count() > HINT_WIDTH));
    }
}
