//! Movement coordinator.
//!
//! Glues the pieces together for a host integration: it owns the settings
//! view, runs the modifier override before a change is committed, and plans
//! the timing of every movement animation once it starts.
//!
//! Settings are snapshotted on every call, so a change made between two
//! movements is picked up by the next one without any notification.

use std::fmt;

use crate::conclude::UpdateOptions;
use crate::error::AnimationError;
use crate::executor::{AnimationRequest, MovementPlan};
use crate::movement::DisplacementRequest;
use crate::policy::modifier::{self, FieldSet, HeldModifiers};
use crate::policy::{AnimationPolicy, PolicyDecision, Verdict};
use crate::settings::{PolicyConfig, SettingsView};

/// Callback invoked when a movement cannot be evaluated.
pub type ErrorHook = Box<dyn Fn(&AnimationError) + Send + Sync>;

fn log_error(err: &AnimationError) {
    tracing::error!(error = %err, "animation policy failed, keeping native timing");
}

/// Coordinates settings, override and policy for one host.
pub struct MovementCoordinator<V> {
    view: V,
    policy: AnimationPolicy,
    on_error: ErrorHook,
}

impl<V: fmt::Debug> fmt::Debug for MovementCoordinator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovementCoordinator")
            .field("view", &self.view)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<V: SettingsView> MovementCoordinator<V> {
    /// Creates a coordinator reading settings from `view`.
    ///
    /// Evaluation errors are logged with `tracing::error!`.
    #[must_use]
    pub fn new(view: V, policy: AnimationPolicy) -> Self {
        Self {
            view,
            policy,
            on_error: Box::new(log_error),
        }
    }

    /// Replaces the error hook.
    #[must_use]
    pub fn with_error_hook(
        mut self,
        hook: impl Fn(&AnimationError) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Box::new(hook);
        self
    }

    /// Returns the settings view.
    #[must_use]
    pub const fn view(&self) -> &V { &self.view }

    /// Returns the settings view mutably.
    pub const fn view_mut(&mut self) -> &mut V { &mut self.view }

    /// Returns the policy.
    #[must_use]
    pub const fn policy(&self) -> &AnimationPolicy { &self.policy }

    /// Takes a fresh snapshot of the settings.
    #[must_use]
    pub fn snapshot(&self) -> PolicyConfig { PolicyConfig::snapshot(&self.view) }

    /// Runs the modifier override on a change about to be committed.
    ///
    /// Returns `true` if `options` was marked as a forced conclusion.
    pub fn pre_update(
        &self,
        held: HeldModifiers,
        pending: &FieldSet,
        options: &mut UpdateOptions,
    ) -> bool {
        modifier::apply_override(&self.snapshot(), held, pending, options)
    }

    /// Decides how a movement is animated.
    ///
    /// A change marked for conclusion is always skipped. Otherwise the policy
    /// runs against a fresh snapshot; if it fails, the error hook is called
    /// and the movement keeps its native timing.
    #[must_use]
    pub fn decide(
        &self,
        request: Option<&DisplacementRequest>,
        options: &UpdateOptions,
    ) -> PolicyDecision {
        if options.concludes() {
            return PolicyDecision::Skip;
        }

        self.policy.decide_or_pass_through(request, &self.snapshot(), &*self.on_error)
    }

    /// Decides how a movement is animated and explains why.
    ///
    /// # Errors
    ///
    /// Returns the policy error unchanged; the error hook is not called.
    pub fn explain(&self, request: Option<&DisplacementRequest>) -> Result<Verdict, AnimationError> {
        self.policy.evaluate(request, &self.snapshot())
    }

    /// Plans the timing of a movement.
    #[must_use]
    pub fn plan_movement(
        &self,
        request: Option<&DisplacementRequest>,
        options: &UpdateOptions,
    ) -> MovementPlan {
        if options.concludes() {
            return MovementPlan::forced_conclusion();
        }

        MovementPlan::from_decision(self.decide(request, options))
    }

    /// Plans the timing of a named host animation.
    ///
    /// Animations outside the policy's scope keep their native timing.
    #[must_use]
    pub fn plan_animation(
        &self,
        animation: &AnimationRequest,
        movement: Option<&DisplacementRequest>,
        options: &UpdateOptions,
    ) -> MovementPlan {
        if !animation.is_policy_subject() {
            return MovementPlan::native();
        }

        self.plan_movement(movement, options)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::movement::Point;
    use crate::policy::modifier::Modifier;
    use crate::settings::{MemorySettings, ModifierKeyMode, SettingKey, SettingValue};

    fn coordinator(settings: MemorySettings) -> MovementCoordinator<MemorySettings> {
        MovementCoordinator::new(settings, AnimationPolicy::native())
    }

    fn move_of(spaces: f64) -> DisplacementRequest {
        DisplacementRequest::new(Point::new(0.0, 0.0), Point::new(spaces * 100.0, 0.0), 100.0)
    }

    #[test]
    fn test_defaults_pass_through() {
        let coordinator = coordinator(MemorySettings::with_defaults());
        let plan = coordinator.plan_movement(Some(&move_of(5.0)), &UpdateOptions::default());
        assert_eq!(plan, MovementPlan::native());
    }

    #[test]
    fn test_settings_changes_apply_to_next_movement() {
        let mut coordinator = coordinator(MemorySettings::with_defaults());
        let movement = move_of(20.0);

        assert_eq!(
            coordinator.decide(Some(&movement), &UpdateOptions::default()),
            PolicyDecision::PassThrough
        );

        coordinator
            .view_mut()
            .set(SettingKey::DurationCap, SettingValue::Number(1000.0));
        assert_eq!(
            coordinator.decide(Some(&movement), &UpdateOptions::default()),
            PolicyDecision::CapAt(1000.0)
        );
    }

    #[test]
    fn test_marked_options_skip() {
        let coordinator = coordinator(MemorySettings::with_defaults());
        let options = UpdateOptions::conclude();

        assert_eq!(coordinator.decide(Some(&move_of(1.0)), &options), PolicyDecision::Skip);
        assert_eq!(
            coordinator.plan_movement(Some(&move_of(1.0)), &options),
            MovementPlan::forced_conclusion()
        );
    }

    #[test]
    fn test_pre_update_then_plan() {
        let mut settings = MemorySettings::with_defaults();
        settings.set(
            SettingKey::ModifierDisablesAnimation,
            SettingValue::Choice(ModifierKeyMode::Alt),
        );
        let coordinator = coordinator(settings);

        let mut options = UpdateOptions::default();
        let held = HeldModifiers::NONE.with(Modifier::Alt);
        let fields: FieldSet = ["x", "y"].into_iter().collect();

        assert!(coordinator.pre_update(held, &fields, &mut options));
        let plan = coordinator.plan_movement(Some(&move_of(3.0)), &options);
        assert!(plan.conclude);
        assert!(plan.is_instant());
    }

    #[test]
    fn test_errors_reach_hook_and_pass_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let coordinator = coordinator(MemorySettings::with_defaults())
            .with_error_hook(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });

        let bad_grid = DisplacementRequest::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.0);
        let options = UpdateOptions::default();

        assert_eq!(coordinator.decide(Some(&bad_grid), &options), PolicyDecision::PassThrough);
        assert_eq!(coordinator.decide(None, &options), PolicyDecision::PassThrough);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_explain_surfaces_errors() {
        let coordinator = coordinator(MemorySettings::with_defaults());
        let err = coordinator.explain(None).unwrap_err();
        assert!(err.is_missing_reference());
    }

    #[test]
    fn test_plan_animation_filters_names() {
        let mut settings = MemorySettings::with_defaults();
        settings.set(SettingKey::Animate, SettingValue::Bool(false));
        let coordinator = coordinator(settings);
        let movement = move_of(2.0);
        let options = UpdateOptions::default();

        let token = AnimationRequest::token_movement("tok", Some(200.0));
        assert!(coordinator.plan_animation(&token, Some(&movement), &options).is_instant());

        let other = AnimationRequest::new("Drawing.abc.animate", Some(200.0));
        assert_eq!(
            coordinator.plan_animation(&other, Some(&movement), &options),
            MovementPlan::native()
        );
    }
}
