//! Shared types for CLI commands.
//!
//! This module contains argument types that are used across multiple CLI
//! command modules.

use std::str::FromStr;

use crate::movement::Point;
use crate::settings::{
    MemorySettings, ModifierKeyMode, SettingKey, SettingValue, SettingsView, descriptor,
};

/// A point given as `X,Y` on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointArg(Point);

impl PointArg {
    /// Returns the parsed point.
    #[must_use]
    pub const fn point(self) -> Point { self.0 }
}

impl FromStr for PointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid point '{s}'. Expected 'X,Y' (e.g. '100,250').");

        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x: f64 = x.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y.trim().parse().map_err(|_| invalid())?;
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid());
        }

        Ok(Self(Point::new(x, y)))
    }
}

impl std::fmt::Display for PointArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

/// A setting override given as `KEY=VALUE`.
///
/// The value is parsed according to the type of the setting's default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingAssignment {
    /// The setting being overridden.
    pub key: SettingKey,
    /// The new value.
    pub value: SettingValue,
}

impl FromStr for SettingAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid setting '{s}'. Expected 'KEY=VALUE'."))?;
        let key: SettingKey = key.parse()?;
        let raw = raw.trim();

        let value = match descriptor(key).default {
            SettingValue::Bool(_) => raw
                .parse::<bool>()
                .map(SettingValue::Bool)
                .map_err(|_| format!("Invalid value '{raw}' for {key}. Expected true or false."))?,
            SettingValue::Number(_) => raw
                .parse::<f64>()
                .map(SettingValue::Number)
                .map_err(|_| format!("Invalid value '{raw}' for {key}. Expected a number."))?,
            SettingValue::Choice(_) => SettingValue::Choice(raw.parse::<ModifierKeyMode>()?),
        };

        Ok(Self { key, value })
    }
}

/// Copies every setting of `view` into memory and applies `overrides` on top.
pub fn layered_settings(view: &impl SettingsView, overrides: &[SettingAssignment]) -> MemorySettings {
    let mut settings: MemorySettings = SettingKey::ALL
        .into_iter()
        .filter_map(|key| view.get(key).map(|value| (key, value)))
        .collect();

    for assignment in overrides {
        settings.set(assignment.key, assignment.value);
    }

    settings
}
