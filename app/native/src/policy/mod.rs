//! Animation policy.
//!
//! Given a movement and a settings snapshot, the policy decides whether the
//! movement is animated and, if so, with which duration. The decision is a
//! pure function of its inputs: the engine holds no state between calls and
//! never reads settings on its own.
//!
//! # Gates
//!
//! Gates are evaluated in order and the first one that matches wins:
//!
//! 1. Animations disabled (world or client toggle) → [`PolicyDecision::Skip`]
//! 2. Distance at or beyond the distance threshold → [`PolicyDecision::Skip`]
//! 3. Duration beyond the duration threshold, when the threshold is stricter
//!    than the cap → [`PolicyDecision::Skip`]
//! 4. Duration beyond the cap → [`PolicyDecision::CapAt`]
//! 5. Custom speed → [`PolicyDecision::ScaleTo`]
//! 6. Otherwise → [`PolicyDecision::PassThrough`]
//!
//! The threshold skips the animation, the cap only speeds it up. A threshold
//! that is not below the cap could never be reached by a capped animation,
//! so it is ignored.

mod engine;
pub mod modifier;

use std::fmt;

use serde::Serialize;

pub use engine::AnimationPolicy;

/// Outcome of the policy for one movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "decision", content = "durationMs", rename_all = "camelCase")]
pub enum PolicyDecision {
    /// Do not animate; the movement resolves instantly.
    Skip,
    /// Animate, sped up to finish within the given duration (ms).
    CapAt(f64),
    /// Animate with the given duration (ms), derived from a custom speed.
    ScaleTo(f64),
    /// Animate with the host's native timing.
    PassThrough,
}

impl PolicyDecision {
    /// Returns `true` for [`PolicyDecision::Skip`].
    #[must_use]
    pub const fn is_skip(&self) -> bool { matches!(self, Self::Skip) }

    /// Returns the duration the host animation must be overridden with.
    ///
    /// `Skip` collapses the animation to zero; `PassThrough` keeps the native
    /// duration and returns `None`.
    #[must_use]
    pub const fn duration_override(&self) -> Option<f64> {
        match self {
            Self::Skip => Some(0.0),
            Self::CapAt(ms) | Self::ScaleTo(ms) => Some(*ms),
            Self::PassThrough => None,
        }
    }
}

impl fmt::Display for PolicyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::CapAt(ms) => write!(f, "cap at {ms:.0}ms"),
            Self::ScaleTo(ms) => write!(f, "scale to {ms:.0}ms"),
            Self::PassThrough => write!(f, "pass through"),
        }
    }
}

/// The gate that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gate {
    /// World or client animation toggle is off.
    Disabled,
    /// Distance threshold reached.
    Distance,
    /// Duration threshold exceeded.
    DurationThreshold,
    /// Duration cap exceeded.
    DurationCap,
    /// Custom speed configured.
    Speed,
    /// No gate matched.
    Native,
}

impl Gate {
    /// Returns a short description of the gate.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Disabled => "animations disabled",
            Self::Distance => "distance threshold reached",
            Self::DurationThreshold => "duration threshold exceeded",
            Self::DurationCap => "duration cap exceeded",
            Self::Speed => "custom speed",
            Self::Native => "native timing",
        }
    }
}

/// A decision together with the values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// The decision.
    pub decision: PolicyDecision,
    /// The gate that produced it.
    pub gate: Gate,
    /// Movement distance in grid spaces.
    pub distance_spaces: f64,
    /// Duration at the effective speed, before any cap (ms).
    pub uncapped_duration_ms: f64,
    /// Effective speed in grid spaces per second.
    pub spaces_per_second: f64,
}
