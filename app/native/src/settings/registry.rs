//! Descriptors of every setting a host registers for the policy.
//!
//! Hosts use these to register the settings in their own store (label,
//! hint, scope and default), and the CLI uses them to list settings and to
//! document the configuration template.

use serde::Serialize;

use super::{ModifierKeyMode, SettingKey, SettingValue};

/// Where a setting is stored and who can change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Shared by every client of a world; changed by the game master.
    World,
    /// Stored per client.
    Client,
}

impl Scope {
    /// Returns the scope name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::World => "world",
            Self::Client => "client",
        }
    }
}

/// Registration metadata for one setting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SettingDescriptor {
    /// Setting key.
    pub key: SettingKey,
    /// Human readable label.
    pub name: &'static str,
    /// Help text shown next to the setting.
    pub hint: &'static str,
    /// Storage scope.
    pub scope: Scope,
    /// Value used when the store has nothing for this key.
    pub default: SettingValue,
}

const ANIMATE: SettingDescriptor = SettingDescriptor {
    key: SettingKey::Animate,
    name: "Enable Animations",
    hint: "Whether to animate tokens on drag and drop. If disabled, token movement resolves instantly.",
    scope: Scope::World,
    default: SettingValue::Bool(true),
};

const ANIMATE_CLIENT: SettingDescriptor = SettingDescriptor {
    key: SettingKey::AnimateClient,
    name: "Enable Animations (Client)",
    hint: "Whether to animate tokens on drag and drop. If disabled, token movement resolves instantly. Per-client.",
    scope: Scope::Client,
    default: SettingValue::Bool(true),
};

const MODIFIER_DISABLES_ANIMATION: SettingDescriptor = SettingDescriptor {
    key: SettingKey::ModifierDisablesAnimation,
    name: "Modifier Key Disables Animation",
    hint: "If set, token movement is not animated while the chosen modifier key is held when the token is released.",
    scope: Scope::World,
    default: SettingValue::Choice(ModifierKeyMode::None),
};

const DISTANCE_THRESHOLD: SettingDescriptor = SettingDescriptor {
    key: SettingKey::DistanceThreshold,
    name: "Distance Threshold",
    hint: "Token animations are skipped when the movement covers at least this many grid spaces. Use \"0\" to disable.",
    scope: Scope::World,
    default: SettingValue::Number(0.0),
};

const DURATION_THRESHOLD: SettingDescriptor = SettingDescriptor {
    key: SettingKey::DurationThreshold,
    name: "Duration Threshold (ms)",
    hint: "Token animations are skipped when they would take longer than this many milliseconds. Use \"0\" to disable.",
    scope: Scope::World,
    default: SettingValue::Number(0.0),
};

const DURATION_CAP: SettingDescriptor = SettingDescriptor {
    key: SettingKey::DurationCap,
    name: "Duration Cap (ms)",
    hint: "Token animations are sped up if they would take more than this many milliseconds to complete. Use \"0\" to disable.",
    scope: Scope::World,
    default: SettingValue::Number(0.0),
};

const SPEED: SettingDescriptor = SettingDescriptor {
    key: SettingKey::Speed,
    name: "Speed (spaces per second)",
    hint: "Token animation speed in grid spaces per second. Use \"0\" for the native speed.",
    scope: Scope::World,
    default: SettingValue::Number(0.0),
};

/// All settings, in registration order.
pub const SETTINGS: &[SettingDescriptor] = &[
    ANIMATE,
    ANIMATE_CLIENT,
    MODIFIER_DISABLES_ANIMATION,
    DISTANCE_THRESHOLD,
    DURATION_THRESHOLD,
    DURATION_CAP,
    SPEED,
];

/// Returns the descriptor registered for `key`.
#[must_use]
pub const fn descriptor(key: SettingKey) -> &'static SettingDescriptor {
    match key {
        SettingKey::Animate => &ANIMATE,
        SettingKey::AnimateClient => &ANIMATE_CLIENT,
        SettingKey::ModifierDisablesAnimation => &MODIFIER_DISABLES_ANIMATION,
        SettingKey::DistanceThreshold => &DISTANCE_THRESHOLD,
        SettingKey::DurationThreshold => &DURATION_THRESHOLD,
        SettingKey::DurationCap => &DURATION_CAP,
        SettingKey::Speed => &SPEED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_key_in_order() {
        assert_eq!(SETTINGS.len(), SettingKey::ALL.len());
        for (descriptor, key) in SETTINGS.iter().zip(SettingKey::ALL) {
            assert_eq!(descriptor.key, key);
        }
    }

    #[test]
    fn test_descriptor_returns_matching_key() {
        for key in SettingKey::ALL {
            assert_eq!(descriptor(key).key, key);
        }
    }

    #[test]
    fn test_descriptor_lookup() {
        let cap = descriptor(SettingKey::DurationCap);
        assert_eq!(cap.name, "Duration Cap (ms)");
        assert_eq!(cap.scope, Scope::World);
        assert_eq!(cap.default, SettingValue::Number(0.0));
    }

    #[test]
    fn test_only_client_toggle_is_client_scoped() {
        let client: Vec<_> = SETTINGS.iter().filter(|d| d.scope == Scope::Client).collect();
        assert_eq!(client.len(), 1);
        assert_eq!(client[0].key, SettingKey::AnimateClient);
    }

    #[test]
    fn test_defaults_match_value_types() {
        assert_eq!(descriptor(SettingKey::Animate).default.as_bool(), Some(true));
        assert_eq!(
            descriptor(SettingKey::ModifierDisablesAnimation).default.as_modifier(),
            Some(ModifierKeyMode::None)
        );
        assert_eq!(descriptor(SettingKey::Speed).default.as_number(), Some(0.0));
    }
}
