//! Settings view backed by the configuration file.

use std::path::{Path, PathBuf};

use super::{ConfigError, TokenAnimationConfig, load, load_config_from_path};
use crate::settings::{PolicyConfig, SettingKey, SettingValue, SettingsView};

/// Reads settings straight from the configuration file.
///
/// Nothing is cached: the file is read again on every snapshot, so an edit
/// is picked up by the next movement. A snapshot reads the file once. A missing file yields the defaults; an
/// unreadable or invalid one yields the defaults with a warning.
#[derive(Debug, Clone, Default)]
pub struct FileSettings {
    path: Option<PathBuf>,
}

impl FileSettings {
    /// Reads the file found through the regular search paths.
    #[must_use]
    pub const fn discover() -> Self { Self { path: None } }

    /// Reads the file at `path`.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self { Self { path: Some(path.into()) } }

    /// Returns the explicit path, if one was given.
    #[must_use]
    pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

    /// Loads the configuration as it is on disk right now.
    #[must_use]
    pub fn current(&self) -> TokenAnimationConfig {
        let result = match &self.path {
            Some(path) => load_config_from_path(path),
            None => load(),
        };

        match result {
            Ok((config, _)) => config,
            Err(ConfigError::NotFound) => TokenAnimationConfig::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read settings, using defaults");
                TokenAnimationConfig::default()
            }
        }
    }
}

impl SettingsView for FileSettings {
    fn get(&self, key: SettingKey) -> Option<SettingValue> { self.current().get(key) }

    fn snapshot(&self) -> PolicyConfig { PolicyConfig::from_view(&self.current()) }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::at(dir.path().join("absent.jsonc"));
        assert_eq!(PolicyConfig::snapshot(&settings), PolicyConfig::default());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let settings = FileSettings::at(&path);
        assert_eq!(settings.current(), TokenAnimationConfig::default());
    }

    #[test]
    fn test_edits_are_visible_without_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, r#"{ "world": { "duration-cap": 500 } }"#).unwrap();

        let settings = FileSettings::at(&path);
        assert!((PolicyConfig::snapshot(&settings).duration_cap - 500.0).abs() < f64::EPSILON);

        fs::write(&path, r#"{ "world": { "duration-cap": 900 } }"#).unwrap();
        assert!((PolicyConfig::snapshot(&settings).duration_cap - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_matches_single_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{ "world": { "duration-cap": 800, "speed": 15 }, "client": { "animate-client": false } }"#,
        )
        .unwrap();

        let settings = FileSettings::at(&path);
        let snapshot = PolicyConfig::snapshot(&settings);
        assert_eq!(snapshot, PolicyConfig::from_view(&settings.current()));
        assert!(!snapshot.animate_enabled_client);
        assert!((snapshot.speed_override - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_path_accessor() {
        assert!(FileSettings::discover().path().is_none());
        let settings = FileSettings::at("/tmp/token-animation.json");
        assert_eq!(settings.path(), Some(Path::new("/tmp/token-animation.json")));
    }
}
