//! Movement executor.
//!
//! Translates policy decisions into the timing applied to the host's
//! animation. The host names every animation it starts; only token movement
//! animations with a non-zero duration are subject to the policy, all other
//! animations run untouched.

use serde::{Deserialize, Serialize};

use crate::constants::animation::{MOVEMENT_SUFFIX, TOKEN_PREFIX};
use crate::policy::PolicyDecision;

// ============================================================================
// Animation Request
// ============================================================================

/// An animation about to be started by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationRequest {
    /// Animation name, e.g. `Token.abc123.animateMovement`.
    pub name: String,
    /// Duration requested by the host, if any (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

impl AnimationRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(name: impl Into<String>, duration_ms: Option<f64>) -> Self {
        Self { name: name.into(), duration_ms }
    }

    /// Creates the request for a movement of token `id`.
    #[must_use]
    pub fn token_movement(id: &str, duration_ms: Option<f64>) -> Self {
        Self::new(format!("{TOKEN_PREFIX}{id}{MOVEMENT_SUFFIX}"), duration_ms)
    }

    /// Returns the token identifier if this is a token movement animation.
    #[must_use]
    pub fn movement_target(&self) -> Option<&str> {
        self.name
            .strip_prefix(TOKEN_PREFIX)?
            .strip_suffix(MOVEMENT_SUFFIX)
            .filter(|id| !id.is_empty())
    }

    /// Returns `true` if the policy decides the timing of this animation.
    ///
    /// An animation the host already collapsed to zero is left alone.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_policy_subject(&self) -> bool {
        self.duration_ms != Some(0.0) && self.movement_target().is_some()
    }
}

// ============================================================================
// Movement Plan
// ============================================================================

/// Timing to apply to one movement animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementPlan {
    /// Duration override (ms). `None` keeps the host's native duration.
    pub duration_ms: Option<f64>,
    /// Whether the movement was forced to conclude in place.
    pub conclude: bool,
}

impl MovementPlan {
    /// Plan that leaves the animation untouched.
    #[must_use]
    pub const fn native() -> Self {
        Self {
            duration_ms: None,
            conclude: false,
        }
    }

    /// Plan for a movement forced to conclude by the modifier override.
    #[must_use]
    pub const fn forced_conclusion() -> Self {
        Self {
            duration_ms: Some(0.0),
            conclude: true,
        }
    }

    /// Builds the plan for a policy decision.
    #[must_use]
    pub const fn from_decision(decision: PolicyDecision) -> Self {
        Self {
            duration_ms: decision.duration_override(),
            conclude: false,
        }
    }

    /// Returns `true` if the movement resolves without animating.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_instant(&self) -> bool { self.duration_ms == Some(0.0) }

    /// Returns the duration to animate with, given the host's `native_ms`.
    #[must_use]
    pub fn apply(&self, native_ms: f64) -> f64 { self.duration_ms.unwrap_or(native_ms) }

    /// Applies the plan to `request` in place.
    pub fn apply_to(&self, request: &mut AnimationRequest) {
        if let Some(duration) = self.duration_ms {
            request.duration_ms = Some(duration);
        }
    }
}

impl Default for MovementPlan {
    fn default() -> Self { Self::native() }
}

impl From<PolicyDecision> for MovementPlan {
    fn from(decision: PolicyDecision) -> Self { Self::from_decision(decision) }
}
