//! Read-only access to the animation settings.
//!
//! The policy engine never reaches into a global settings store. Instead the
//! caller hands it a [`SettingsView`], and [`PolicyConfig::snapshot`] reads
//! every setting once, immediately before a decision is made. A view whose
//! values live outside the process overrides [`SettingsView::snapshot`] to
//! load them in a single read.
//!
//! A view must never fail: a key that was never registered, or that holds a
//! value of the wrong type, is reported as unavailable (`None`) and the
//! snapshot falls back to the registered default.

mod memory;
pub mod registry;
mod snapshot;

use std::fmt;
use std::str::FromStr;

pub use memory::MemorySettings;
pub use registry::{SETTINGS, Scope, SettingDescriptor, descriptor};
use serde::Serialize;
pub use snapshot::{ModifierKeyMode, PolicyConfig};

/// Identifiers of every setting consumed by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKey {
    /// World-wide animation toggle.
    Animate,
    /// Per-client animation toggle.
    AnimateClient,
    /// Modifier key that disables animation while held.
    ModifierDisablesAnimation,
    /// Maximum animated distance, in grid spaces.
    DistanceThreshold,
    /// Maximum animated duration before the animation is skipped, in ms.
    DurationThreshold,
    /// Maximum animated duration before the animation is sped up, in ms.
    DurationCap,
    /// Animation speed in grid spaces per second.
    Speed,
}

impl SettingKey {
    /// All keys, in registration order.
    pub const ALL: [Self; 7] = [
        Self::Animate,
        Self::AnimateClient,
        Self::ModifierDisablesAnimation,
        Self::DistanceThreshold,
        Self::DurationThreshold,
        Self::DurationCap,
        Self::Speed,
    ];

    /// Returns the key as stored by the host (kebab-case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Animate => "animate",
            Self::AnimateClient => "animate-client",
            Self::ModifierDisablesAnimation => "modifier-disables-animation",
            Self::DistanceThreshold => "distance-threshold",
            Self::DurationThreshold => "duration-threshold",
            Self::DurationCap => "duration-cap",
            Self::Speed => "speed",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown setting '{s}'"))
    }
}

/// A raw setting value as held by a settings store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean toggle.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Enumerated modifier key choice.
    Choice(ModifierKeyMode),
}

impl SettingValue {
    /// Returns the value as a boolean, if it is one.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a number, if it is one.
    #[must_use]
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a modifier choice.
    ///
    /// Hosts that store the choice as its numeric code (`0` to `3`) are
    /// accepted as well.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_modifier(self) -> Option<ModifierKeyMode> {
        match self {
            Self::Choice(mode) => Some(mode),
            Self::Number(code) if code.fract() == 0.0 && (0.0..=255.0).contains(&code) => {
                ModifierKeyMode::from_code(code as u8)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Choice(mode) => write!(f, "{mode}"),
        }
    }
}

/// Read-only accessor over named settings.
pub trait SettingsView {
    /// Returns the current value of `key`, or `None` when it is unavailable.
    fn get(&self, key: SettingKey) -> Option<SettingValue>;

    /// Reads every policy setting in one pass.
    ///
    /// The default goes through [`get`](Self::get) key by key. Views backed
    /// by external storage load it once here, so a snapshot never mixes two
    /// versions of the settings.
    fn snapshot(&self) -> PolicyConfig { PolicyConfig::from_view(self) }
}

impl<T: SettingsView + ?Sized> SettingsView for &T {
    fn get(&self, key: SettingKey) -> Option<SettingValue> { (**self).get(key) }

    fn snapshot(&self) -> PolicyConfig { (**self).snapshot() }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_setting_key_round_trips_through_str() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_setting_key_from_str_is_case_insensitive() {
        assert_eq!("Duration-Cap".parse::<SettingKey>().unwrap(), SettingKey::DurationCap);
        assert_eq!(" speed ".parse::<SettingKey>().unwrap(), SettingKey::Speed);
    }

    #[test]
    fn test_setting_key_from_str_unknown() {
        let result = "ctrl-disables-animation".parse::<SettingKey>();
        assert!(result.unwrap_err().contains("Unknown setting"));
    }

    #[test]
    fn test_setting_value_accessors_reject_wrong_types() {
        assert_eq!(SettingValue::Bool(true).as_bool(), Some(true));
        assert_eq!(SettingValue::Bool(true).as_number(), None);
        assert_eq!(SettingValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(SettingValue::Number(3.5).as_bool(), None);
        assert_eq!(SettingValue::Bool(false).as_modifier(), None);
    }

    #[test]
    fn test_setting_value_modifier_from_code() {
        assert_eq!(SettingValue::Number(1.0).as_modifier(), Some(ModifierKeyMode::Ctrl));
        assert_eq!(SettingValue::Number(3.0).as_modifier(), Some(ModifierKeyMode::Shift));
        assert_eq!(SettingValue::Number(1.5).as_modifier(), None);
        assert_eq!(SettingValue::Number(9.0).as_modifier(), None);
        assert_eq!(SettingValue::Number(-1.0).as_modifier(), None);
    }

    #[test]
    fn test_setting_value_display() {
        assert_eq!(SettingValue::Bool(false).to_string(), "false");
        assert_eq!(SettingValue::Number(250.0).to_string(), "250");
        assert_eq!(SettingValue::Choice(ModifierKeyMode::Alt).to_string(), "alt");
    }

    /// Counts how often the backing store is loaded.
    struct CountingView {
        inner: MemorySettings,
        loads: Cell<usize>,
    }

    impl CountingView {
        fn load(&self) -> &MemorySettings {
            self.loads.set(self.loads.get() + 1);
            &self.inner
        }
    }

    impl SettingsView for CountingView {
        fn get(&self, key: SettingKey) -> Option<SettingValue> { self.load().get(key) }

        fn snapshot(&self) -> PolicyConfig { PolicyConfig::from_view(self.load()) }
    }

    #[test]
    fn test_snapshot_loads_the_store_once() {
        let mut inner = MemorySettings::with_defaults();
        inner.set(SettingKey::DurationCap, SettingValue::Number(700.0));
        let view = CountingView { inner, loads: Cell::new(0) };

        let config = PolicyConfig::snapshot(&view);
        assert!((config.duration_cap - 700.0).abs() < f64::EPSILON);
        assert_eq!(view.loads.get(), 1);

        let by_ref = &view;
        let _ = PolicyConfig::snapshot(&by_ref);
        assert_eq!(view.loads.get(), 2);
    }

    #[test]
    fn test_default_snapshot_reads_key_by_key() {
        let view = CountingView { inner: MemorySettings::new(), loads: Cell::new(0) };
        assert_eq!(PolicyConfig::from_view(&view), PolicyConfig::default());
        assert_eq!(view.loads.get(), SettingKey::ALL.len());
    }

    #[test]
    fn test_view_by_reference() {
        let mut settings = MemorySettings::new();
        settings.set(SettingKey::Speed, SettingValue::Number(6.0));

        let view: &dyn SettingsView = &settings;
        assert_eq!(view.get(SettingKey::Speed), Some(SettingValue::Number(6.0)));
        assert_eq!((&settings).get(SettingKey::Animate), None);
    }
}
