//! Decide CLI command.
//!
//! Evaluates the animation policy for one movement against the current
//! settings and prints the decision.

use clap::Args;
use colored::Colorize;

use super::types::{PointArg, SettingAssignment, layered_settings};
use crate::cli::output::print_json;
use crate::config;
use crate::constants::speed::NATIVE_SPACES_PER_SECOND;
use crate::error::CliError;
use crate::movement::DisplacementRequest;
use crate::policy::{AnimationPolicy, PolicyDecision, Verdict};
use crate::settings::PolicyConfig;

/// Arguments of the `decide` command.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  token-animation decide --from 0,0 --to 2000,0 --grid 100
  token-animation decide --from 0,0 --to 2000,0 --set duration-cap=1000
  token-animation decide --from 0,0 --to 500,0 --set speed=20 --json"#)]
pub struct DecideArgs {
    /// Where the movement starts, as X,Y in world units.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub from: PointArg,

    /// Where the movement ends, as X,Y in world units.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub to: PointArg,

    /// World units per grid space.
    #[arg(long, default_value_t = 100.0, value_name = "UNITS")]
    pub grid: f64,

    /// The host's native speed in grid spaces per second.
    #[arg(long, default_value_t = NATIVE_SPACES_PER_SECOND, value_name = "SPACES")]
    pub default_speed: f64,

    /// Override a setting for this evaluation (repeatable), e.g. duration-cap=1000.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<SettingAssignment>,

    /// Print the verdict as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the decide command.
///
/// # Errors
///
/// Returns an error if the default speed or the grid size is invalid.
pub fn execute(args: &DecideArgs) -> Result<(), CliError> {
    let policy = AnimationPolicy::new(args.default_speed)?;
    let settings = layered_settings(&config::load_or_default(), &args.overrides);
    let request = DisplacementRequest::new(args.from.point(), args.to.point(), args.grid);

    let verdict = policy.evaluate(Some(&request), &PolicyConfig::snapshot(&settings))?;

    if args.json {
        print_json(&serde_json::to_value(verdict)?);
    } else {
        print_verdict(&verdict);
    }

    Ok(())
}

fn print_verdict(verdict: &Verdict) {
    let decision = verdict.decision.to_string();
    let decision = match verdict.decision {
        PolicyDecision::Skip => decision.red().bold(),
        PolicyDecision::CapAt(_) => decision.yellow().bold(),
        PolicyDecision::ScaleTo(_) => decision.cyan().bold(),
        PolicyDecision::PassThrough => decision.green().bold(),
    };

    println!("{} {decision}", "Decision:".bold());
    println!("{} {}", "Gate:".bold(), verdict.gate.describe());
    println!("{} {:.2} spaces", "Distance:".bold(), verdict.distance_spaces);
    println!("{} {:.0}ms", "Uncapped duration:".bold(), verdict.uncapped_duration_ms);
    println!("{} {} spaces/s", "Speed:".bold(), verdict.spaces_per_second);
}
