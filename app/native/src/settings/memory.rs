//! In-memory settings store.

use std::collections::HashMap;

use super::{SETTINGS, SettingKey, SettingValue, SettingsView};

/// Settings held in memory, as registered by a host integration.
///
/// Keys that were never set are unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<SettingKey, SettingValue>,
}

impl MemorySettings {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates a store holding the registered default of every setting.
    #[must_use]
    pub fn with_defaults() -> Self {
        SETTINGS.iter().map(|descriptor| (descriptor.key, descriptor.default)).collect()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> &mut Self {
        self.values.insert(key, value);
        self
    }

    /// Removes `key`, making it unavailable.
    pub fn remove(&mut self, key: SettingKey) -> Option<SettingValue> { self.values.remove(&key) }

    /// Returns the number of keys currently set.
    #[must_use]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` when no key is set.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl SettingsView for MemorySettings {
    fn get(&self, key: SettingKey) -> Option<SettingValue> { self.values.get(&key).copied() }
}

impl FromIterator<(SettingKey, SettingValue)> for MemorySettings {
    fn from_iter<I: IntoIterator<Item = (SettingKey, SettingValue)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reports_unavailable() {
        let settings = MemorySettings::new();
        assert!(settings.is_empty());
        for key in SettingKey::ALL {
            assert_eq!(settings.get(key), None);
        }
    }

    #[test]
    fn test_with_defaults_registers_every_key() {
        let settings = MemorySettings::with_defaults();
        assert_eq!(settings.len(), SettingKey::ALL.len());
        assert_eq!(settings.get(SettingKey::AnimateClient), Some(SettingValue::Bool(true)));
    }

    #[test]
    fn test_set_and_remove() {
        let mut settings = MemorySettings::new();
        settings.set(SettingKey::DurationCap, SettingValue::Number(500.0));
        assert_eq!(settings.get(SettingKey::DurationCap), Some(SettingValue::Number(500.0)));

        assert_eq!(
            settings.remove(SettingKey::DurationCap),
            Some(SettingValue::Number(500.0))
        );
        assert_eq!(settings.get(SettingKey::DurationCap), None);
    }

    #[test]
    fn test_from_iterator() {
        let settings: MemorySettings =
            [(SettingKey::Animate, SettingValue::Bool(false))].into_iter().collect();
        assert_eq!(settings.get(SettingKey::Animate), Some(SettingValue::Bool(false)));
        assert_eq!(settings.len(), 1);
    }
}
