//! Configuration module for Token Animation.
//!
//! This module provides the configuration file types, loading, template and
//! schema generation, and a settings view that reads the file on demand.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

mod file_settings;
pub mod schema;
pub mod template;
pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use file_settings::FileSettings;
pub use schema::{generate_schema, generate_schema_json};
pub use types::{
    ClientSettings, ConfigError, TokenAnimationConfig, WorldSettings, config_paths,
    load_config as load_config_default, load_config_from_path,
};

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// Returns `true` if the path was set, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Returns the custom configuration path, if one was set.
pub fn custom_config_path() -> Option<&'static PathBuf> { CUSTOM_CONFIG_PATH.get() }

/// Loads the configuration, honoring the custom path if one was set.
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load() -> Result<(TokenAnimationConfig, PathBuf), ConfigError> {
    CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path))
}

/// Loads the configuration, or the defaults if it cannot be loaded.
#[must_use]
pub fn load_or_default() -> TokenAnimationConfig {
    match load() {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            config
        }
        Err(ConfigError::NotFound) => TokenAnimationConfig::default(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            TokenAnimationConfig::default()
        }
    }
}

/// Returns the path the configuration would be loaded from.
///
/// This is the custom path if set, else the first existing file, else the
/// preferred location for a new file.
#[must_use]
pub fn resolved_config_path() -> Option<PathBuf> {
    if let Some(path) = CUSTOM_CONFIG_PATH.get() {
        return Some(path.clone());
    }

    let paths = config_paths();
    paths.iter().find(|path| path.exists()).or_else(|| paths.first()).cloned()
}
