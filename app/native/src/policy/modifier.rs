//! Modifier-key override.
//!
//! Runs before a change is committed. When the configured modifier key is
//! held while a token is moved, the change is marked as a forced conclusion:
//! the caller treats it as [`PolicyDecision::Skip`](super::PolicyDecision)
//! and snaps any in-flight animation to its destination.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::conclude::UpdateOptions;
use crate::constants::fields::POSITIONAL;
use crate::settings::{ModifierKeyMode, PolicyConfig};

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Control key.
    Ctrl,
    /// Alt/Option key.
    Alt,
    /// Shift key.
    Shift,
    /// Meta/Command key.
    Meta,
}

impl Modifier {
    const fn bit(self) -> u8 {
        match self {
            Self::Ctrl => 0b0001,
            Self::Alt => 0b0010,
            Self::Shift => 0b0100,
            Self::Meta => 0b1000,
        }
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" | "option" => Ok(Self::Alt),
            "shift" => Ok(Self::Shift),
            "meta" | "cmd" | "command" | "super" => Ok(Self::Meta),
            _ => Err(format!(
                "Invalid modifier '{s}'. Expected 'ctrl', 'alt', 'shift' or 'meta'."
            )),
        }
    }
}

impl ModifierKeyMode {
    /// Returns the modifier key this mode listens for.
    #[must_use]
    pub const fn modifier(self) -> Option<Modifier> {
        match self {
            Self::None => None,
            Self::Ctrl => Some(Modifier::Ctrl),
            Self::Alt => Some(Modifier::Alt),
            Self::Shift => Some(Modifier::Shift),
        }
    }
}

/// Set of modifier keys held at the time of a change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HeldModifiers(u8);

impl HeldModifiers {
    /// No modifier held.
    pub const NONE: Self = Self(0);

    /// Builds the set from the key flags carried by an input event.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn from_flags(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        let mut bits = 0;
        if ctrl {
            bits |= Modifier::Ctrl.bit();
        }
        if alt {
            bits |= Modifier::Alt.bit();
        }
        if shift {
            bits |= Modifier::Shift.bit();
        }
        if meta {
            bits |= Modifier::Meta.bit();
        }
        Self(bits)
    }

    /// Returns a copy of this set with `modifier` added.
    #[must_use]
    pub const fn with(self, modifier: Modifier) -> Self { Self(self.0 | modifier.bit()) }

    /// Returns `true` if `modifier` is held.
    #[must_use]
    pub const fn contains(self, modifier: Modifier) -> bool { self.0 & modifier.bit() != 0 }

    /// Returns `true` if no modifier is held.
    #[must_use]
    pub const fn is_empty(self) -> bool { self.0 == 0 }
}

impl FromIterator<Modifier> for HeldModifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Names of the fields touched by a pending change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(SmallVec<[String; 4]>);

impl FieldSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Adds `field` unless it is already present.
    pub fn insert(&mut self, field: impl Into<String>) {
        let field = field.into();
        if !self.contains(&field) {
            self.0.push(field);
        }
    }

    /// Returns `true` if `field` is in the set.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool { self.0.iter().any(|f| f == field) }

    /// Returns `true` if the change moves the entity (touches `x` or `y`).
    #[must_use]
    pub fn is_positional(&self) -> bool { POSITIONAL.iter().any(|field| self.contains(field)) }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterates over the field names.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

/// Returns `true` if the change must be forced to conclude instantly.
///
/// That is the case when an override modifier is configured, that modifier
/// is held, the change is positional, and the change was not already marked
/// by someone else.
#[must_use]
pub fn should_force_skip(
    config: &PolicyConfig,
    held: HeldModifiers,
    pending: &FieldSet,
    already_marked: bool,
) -> bool {
    let Some(modifier) = config.modifier_key_mode.modifier() else {
        return false;
    };

    held.contains(modifier) && pending.is_positional() && !already_marked
}

/// Applies the override to the options of a pending change.
///
/// Marks `options` as a forced conclusion and returns `true` when
/// [`should_force_skip`] holds. An existing mark, whatever its value, is
/// left untouched.
pub fn apply_override(
    config: &PolicyConfig,
    held: HeldModifiers,
    pending: &FieldSet,
    options: &mut UpdateOptions,
) -> bool {
    if !should_force_skip(config, held, pending, options.is_marked()) {
        return false;
    }

    tracing::debug!(
        mode = %config.modifier_key_mode,
        fields = %pending,
        "modifier held, forcing movement to conclude"
    );
    options.conclude_animations = Some(true);
    true
}
