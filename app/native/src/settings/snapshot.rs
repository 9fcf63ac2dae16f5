//! Point-in-time snapshot of the policy settings.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{SettingKey, SettingsView};

/// Modifier key that disables animation while it is held.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase", try_from = "RawModifierKeyMode")]
pub enum ModifierKeyMode {
    /// The override is disabled.
    #[default]
    None,
    /// Control key.
    Ctrl,
    /// Alt/Option key.
    Alt,
    /// Shift key.
    Shift,
}

impl ModifierKeyMode {
    /// Returns the mode for a historical choice code (`0` = none, `1` = control,
    /// `2` = alt, `3` = shift).
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Ctrl),
            2 => Some(Self::Alt),
            3 => Some(Self::Shift),
            _ => None,
        }
    }

    /// Returns the historical choice code of this mode.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Ctrl => 1,
            Self::Alt => 2,
            Self::Shift => 3,
        }
    }

    /// Returns `true` unless the override is disabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool { !matches!(self, Self::None) }
}

impl fmt::Display for ModifierKeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Shift => "shift",
        })
    }
}

impl FromStr for ModifierKeyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" | "option" => Ok(Self::Alt),
            "shift" => Ok(Self::Shift),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Self::from_code)
                .ok_or_else(|| {
                    format!(
                        "Invalid modifier '{s}'. Expected 'none', 'ctrl', 'alt', 'shift' or 0-3."
                    )
                }),
        }
    }
}

/// Wire representation accepted for [`ModifierKeyMode`]: a name or a code.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
enum RawModifierKeyMode {
    Code(u8),
    Name(String),
}

impl TryFrom<RawModifierKeyMode> for ModifierKeyMode {
    type Error = String;

    fn try_from(raw: RawModifierKeyMode) -> Result<Self, Self::Error> {
        match raw {
            RawModifierKeyMode::Code(code) => {
                Self::from_code(code).ok_or_else(|| format!("Invalid modifier code {code}"))
            }
            RawModifierKeyMode::Name(name) => name.parse(),
        }
    }
}

/// Settings read at decision time.
///
/// Thresholds, cap and speed use `0` to mean "disabled" / "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// World-scoped animation toggle.
    pub animate_enabled_world: bool,
    /// Client-scoped animation toggle.
    pub animate_enabled_client: bool,
    /// Modifier key that forces moves to conclude instantly.
    pub modifier_key_mode: ModifierKeyMode,
    /// Distance in grid spaces at or beyond which animation is skipped.
    pub distance_threshold: f64,
    /// Duration in ms beyond which animation is skipped.
    pub duration_threshold: f64,
    /// Duration in ms beyond which animation is sped up to fit.
    pub duration_cap: f64,
    /// Custom speed in grid spaces per second.
    pub speed_override: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            animate_enabled_world: true,
            animate_enabled_client: true,
            modifier_key_mode: ModifierKeyMode::None,
            distance_threshold: 0.0,
            duration_threshold: 0.0,
            duration_cap: 0.0,
            speed_override: 0.0,
        }
    }
}

impl PolicyConfig {
    /// Takes the snapshot `view` provides.
    ///
    /// Must be called again for every decision; a snapshot is never reused
    /// across movement events.
    #[must_use]
    pub fn snapshot(view: &(impl SettingsView + ?Sized)) -> Self { view.snapshot() }

    /// Reads every policy setting from `view`, one key at a time.
    ///
    /// Unavailable or mistyped settings keep their default value.
    #[must_use]
    pub fn from_view(view: &(impl SettingsView + ?Sized)) -> Self {
        let defaults = Self::default();
        let flag = |key, default| view.get(key).and_then(|v| v.as_bool()).unwrap_or(default);
        let number = |key| view.get(key).and_then(|v| v.as_number()).unwrap_or(0.0);

        Self {
            animate_enabled_world: flag(SettingKey::Animate, defaults.animate_enabled_world),
            animate_enabled_client: flag(
                SettingKey::AnimateClient,
                defaults.animate_enabled_client,
            ),
            modifier_key_mode: view
                .get(SettingKey::ModifierDisablesAnimation)
                .and_then(|v| v.as_modifier())
                .unwrap_or_default(),
            distance_threshold: number(SettingKey::DistanceThreshold),
            duration_threshold: number(SettingKey::DurationThreshold),
            duration_cap: number(SettingKey::DurationCap),
            speed_override: number(SettingKey::Speed),
        }
    }

    /// Returns `true` when both the world and client toggles allow animation.
    #[must_use]
    pub const fn animations_enabled(&self) -> bool {
        self.animate_enabled_world && self.animate_enabled_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MemorySettings, SettingValue};

    #[test]
    fn test_snapshot_of_empty_view_is_default() {
        let config = PolicyConfig::snapshot(&MemorySettings::new());
        assert_eq!(config, PolicyConfig::default());
        assert!(config.animations_enabled());
    }

    #[test]
    fn test_snapshot_reads_every_key() {
        let mut settings = MemorySettings::new();
        settings
            .set(SettingKey::Animate, SettingValue::Bool(false))
            .set(SettingKey::AnimateClient, SettingValue::Bool(true))
            .set(
                SettingKey::ModifierDisablesAnimation,
                SettingValue::Choice(ModifierKeyMode::Shift),
            )
            .set(SettingKey::DistanceThreshold, SettingValue::Number(12.0))
            .set(SettingKey::DurationThreshold, SettingValue::Number(1500.0))
            .set(SettingKey::DurationCap, SettingValue::Number(800.0))
            .set(SettingKey::Speed, SettingValue::Number(6.0));

        let config = PolicyConfig::snapshot(&settings);
        assert!(!config.animate_enabled_world);
        assert!(config.animate_enabled_client);
        assert!(!config.animations_enabled());
        assert_eq!(config.modifier_key_mode, ModifierKeyMode::Shift);
        assert!((config.distance_threshold - 12.0).abs() < f64::EPSILON);
        assert!((config.duration_threshold - 1500.0).abs() < f64::EPSILON);
        assert!((config.duration_cap - 800.0).abs() < f64::EPSILON);
        assert!((config.speed_override - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_ignores_mistyped_values() {
        let mut settings = MemorySettings::new();
        settings
            .set(SettingKey::Animate, SettingValue::Number(0.0))
            .set(SettingKey::DurationCap, SettingValue::Bool(true));

        let config = PolicyConfig::snapshot(&settings);
        assert!(config.animate_enabled_world);
        assert!(config.duration_cap.abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_is_fresh_after_changes() {
        let mut settings = MemorySettings::new();
        let before = PolicyConfig::snapshot(&settings);

        settings.set(SettingKey::AnimateClient, SettingValue::Bool(false));
        let after = PolicyConfig::snapshot(&settings);

        assert!(before.animate_enabled_client);
        assert!(!after.animate_enabled_client);
    }

    #[test]
    fn test_modifier_mode_codes() {
        for code in 0..4 {
            let mode = ModifierKeyMode::from_code(code).unwrap();
            assert_eq!(mode.code(), code);
        }
        assert_eq!(ModifierKeyMode::from_code(4), None);
        assert!(!ModifierKeyMode::None.is_enabled());
        assert!(ModifierKeyMode::Ctrl.is_enabled());
    }

    #[test]
    fn test_modifier_mode_from_str() {
        assert_eq!("Control".parse::<ModifierKeyMode>().unwrap(), ModifierKeyMode::Ctrl);
        assert_eq!("option".parse::<ModifierKeyMode>().unwrap(), ModifierKeyMode::Alt);
        assert_eq!("3".parse::<ModifierKeyMode>().unwrap(), ModifierKeyMode::Shift);
        assert_eq!("".parse::<ModifierKeyMode>().unwrap(), ModifierKeyMode::None);
        assert!("meta".parse::<ModifierKeyMode>().unwrap_err().contains("Invalid modifier"));
    }

    #[test]
    fn test_modifier_mode_deserializes_names_and_codes() {
        let by_name: ModifierKeyMode = serde_json::from_str(r#""alt""#).unwrap();
        assert_eq!(by_name, ModifierKeyMode::Alt);

        let by_code: ModifierKeyMode = serde_json::from_str("1").unwrap();
        assert_eq!(by_code, ModifierKeyMode::Ctrl);

        assert!(serde_json::from_str::<ModifierKeyMode>("7").is_err());
        assert_eq!(serde_json::to_string(&ModifierKeyMode::Shift).unwrap(), r#""shift""#);
    }
}
