//! Configuration types for Token Animation.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.
//!
//! Keys use the same kebab-case names the settings are registered under, so
//! a value can be moved between the file and a host's settings store as is.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::settings::{ModifierKeyMode, SettingKey, SettingValue, SettingsView};

/// World-scoped settings, shared by every client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct WorldSettings {
    /// Whether token movement is animated at all.
    pub animate: bool,

    /// Modifier key that disables animation while held: `none`, `ctrl`,
    /// `alt` or `shift` (codes `0`-`3` are accepted too).
    pub modifier_disables_animation: ModifierKeyMode,

    /// Skip animations covering at least this many grid spaces. `0` disables.
    pub distance_threshold: f64,

    /// Skip animations longer than this many milliseconds. `0` disables.
    pub duration_threshold: f64,

    /// Speed up animations longer than this many milliseconds. `0` disables.
    pub duration_cap: f64,

    /// Animation speed in grid spaces per second. `0` keeps the native speed.
    pub speed: f64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            animate: true,
            modifier_disables_animation: ModifierKeyMode::None,
            distance_threshold: 0.0,
            duration_threshold: 0.0,
            duration_cap: 0.0,
            speed: 0.0,
        }
    }
}

/// Client-scoped settings, local to one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClientSettings {
    /// Whether token movement is animated on this client.
    pub animate_client: bool,
}

impl Default for ClientSettings {
    fn default() -> Self { Self { animate_client: true } }
}

/// Root configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TokenAnimationConfig {
    /// Settings shared by every client.
    pub world: WorldSettings,

    /// Settings local to this client.
    pub client: ClientSettings,
}

impl SettingsView for TokenAnimationConfig {
    fn get(&self, key: SettingKey) -> Option<SettingValue> {
        let value = match key {
            SettingKey::Animate => SettingValue::Bool(self.world.animate),
            SettingKey::AnimateClient => SettingValue::Bool(self.client.animate_client),
            SettingKey::ModifierDisablesAnimation => {
                SettingValue::Choice(self.world.modifier_disables_animation)
            }
            SettingKey::DistanceThreshold => SettingValue::Number(self.world.distance_threshold),
            SettingKey::DurationThreshold => SettingValue::Number(self.world.duration_threshold),
            SettingKey::DurationCap => SettingValue::Number(self.world.duration_cap),
            SettingKey::Speed => SettingValue::Number(self.world.speed),
        };
        Some(value)
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/token-animation/config.jsonc \
                or ~/.token-animation.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Directory name used under the configuration roots.
const APP_DIR: &str = "token-animation";

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".token-animation.jsonc", ".token-animation.json"];

/// Appends the config file names under `dir`, skipping duplicates.
fn push_dir(dir: &Path, paths: &mut Vec<PathBuf>) {
    for filename in CONFIG_FILE_NAMES {
        let path = dir.join(filename);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
}

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/token-animation/` if the variable is set
/// 2. `~/.config/token-animation/`
/// 3. The platform configuration directory (e.g. `~/Library/Application Support`)
/// 4. `~/.token-animation.jsonc` or `~/.token-animation.json` (legacy)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_dir(&PathBuf::from(xdg_config).join(APP_DIR), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(&home.join(".config").join(APP_DIR), &mut paths);
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(&config_dir.join(APP_DIR), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(TokenAnimationConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

/// Loads the configuration from a specific file.
///
/// Comments are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if `path` does not exist.
/// Returns `ConfigError::IoError` if the file could not be read.
/// Returns `ConfigError::ParseError` if the file contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(TokenAnimationConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: TokenAnimationConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}
