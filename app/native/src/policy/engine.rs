//! Decision engine.

use super::{Gate, PolicyDecision, Verdict};
use crate::constants::speed::NATIVE_SPACES_PER_SECOND;
use crate::error::{AnimationError, AnimationResult};
use crate::movement::{DisplacementRequest, EffectiveSpeed};
use crate::settings::PolicyConfig;

/// Returns `true` when a threshold, cap or override is configured.
///
/// Zero, negative and NaN values all mean "disabled".
fn is_set(value: f64) -> bool { value > 0.0 }

/// The animation policy for one host.
///
/// Holds the host's default speed and nothing else; every decision reads
/// its settings from the snapshot it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPolicy {
    default_spaces_per_second: f64,
}

impl Default for AnimationPolicy {
    fn default() -> Self { Self::native() }
}

impl AnimationPolicy {
    /// Creates a policy for a host whose native speed is
    /// `default_spaces_per_second`.
    ///
    /// # Errors
    ///
    /// Returns `AnimationError::InvalidDefaultSpeed` if the speed is not a
    /// positive finite number.
    pub fn new(default_spaces_per_second: f64) -> AnimationResult<Self> {
        if !default_spaces_per_second.is_finite() || default_spaces_per_second <= 0.0 {
            return Err(AnimationError::InvalidDefaultSpeed(default_spaces_per_second));
        }
        Ok(Self { default_spaces_per_second })
    }

    /// Creates a policy using [`NATIVE_SPACES_PER_SECOND`] as the default.
    #[must_use]
    pub const fn native() -> Self {
        Self {
            default_spaces_per_second: NATIVE_SPACES_PER_SECOND,
        }
    }

    /// Returns the host's default speed in grid spaces per second.
    #[must_use]
    pub const fn default_spaces_per_second(&self) -> f64 { self.default_spaces_per_second }

    /// Decides how `request` is animated under `config`.
    ///
    /// # Errors
    ///
    /// Returns `AnimationError::MissingContext` when `request` is `None`, and
    /// `AnimationError::InvalidGridSize` when its grid size is unusable.
    pub fn decide(
        &self,
        request: Option<&DisplacementRequest>,
        config: &PolicyConfig,
    ) -> AnimationResult<PolicyDecision> {
        self.evaluate(request, config).map(|verdict| verdict.decision)
    }

    /// Like [`decide`](Self::decide), but never fails.
    ///
    /// Configuration errors are handed to `on_error` and the movement keeps
    /// its native timing, so a broken integration never blocks a move.
    pub fn decide_or_pass_through(
        &self,
        request: Option<&DisplacementRequest>,
        config: &PolicyConfig,
        on_error: impl FnOnce(&AnimationError),
    ) -> PolicyDecision {
        match self.decide(request, config) {
            Ok(decision) => decision,
            Err(err) => {
                on_error(&err);
                PolicyDecision::PassThrough
            }
        }
    }

    /// Decides how `request` is animated and reports the gate and the
    /// derived values behind the decision.
    ///
    /// # Errors
    ///
    /// Same as [`decide`](Self::decide).
    pub fn evaluate(
        &self,
        request: Option<&DisplacementRequest>,
        config: &PolicyConfig,
    ) -> AnimationResult<Verdict> {
        let request = request
            .ok_or_else(|| AnimationError::missing_context("no displacement for the movement"))?;
        let displacement = request.displacement()?;
        let speed =
            EffectiveSpeed::resolve(config, request.grid_size, self.default_spaces_per_second);

        let distance_spaces = displacement.distance_spaces();
        let uncapped_duration_ms = displacement.uncapped_duration_ms(&speed);
        let custom_speed = speed.differs_from(self.default_spaces_per_second);

        let (decision, gate) =
            select(config, distance_spaces, uncapped_duration_ms, custom_speed);

        tracing::debug!(
            ?gate,
            %decision,
            distance_spaces,
            uncapped_duration_ms,
            spaces_per_second = speed.spaces_per_second(),
            "animation policy decided"
        );

        Ok(Verdict {
            decision,
            gate,
            distance_spaces,
            uncapped_duration_ms,
            spaces_per_second: speed.spaces_per_second(),
        })
    }
}

/// Runs the gates in order; the first match wins.
fn select(
    config: &PolicyConfig,
    distance_spaces: f64,
    uncapped_duration_ms: f64,
    custom_speed: bool,
) -> (PolicyDecision, Gate) {
    if !config.animations_enabled() {
        return (PolicyDecision::Skip, Gate::Disabled);
    }

    if is_set(config.distance_threshold) && distance_spaces >= config.distance_threshold {
        return (PolicyDecision::Skip, Gate::Distance);
    }

    // The threshold only matters while it is stricter than the cap.
    let threshold_applies = is_set(config.duration_threshold)
        && (!is_set(config.duration_cap) || config.duration_threshold < config.duration_cap);
    if threshold_applies && uncapped_duration_ms > config.duration_threshold {
        return (PolicyDecision::Skip, Gate::DurationThreshold);
    }

    if is_set(config.duration_cap) && uncapped_duration_ms > config.duration_cap {
        return (PolicyDecision::CapAt(config.duration_cap), Gate::DurationCap);
    }

    if custom_speed {
        return (PolicyDecision::ScaleTo(uncapped_duration_ms), Gate::Speed);
    }

    (PolicyDecision::PassThrough, Gate::Native)
}
