//! Conclude-in-place.
//!
//! A concluded movement skips the rest of its animation: the animation is
//! stopped, the entity is placed directly at the destination, and anything
//! derived from its position (vision, light sources) is refreshed right away.
//!
//! # Flow
//!
//! 1. [`conclude_requests`] collects every entity with an active animation
//!    and emits one update per entity, marked with
//!    `{diff: false, concludeAnimations: true}`.
//! 2. The host dispatches the updates to every client.
//! 3. Each client runs [`conclude_in_place`] (or [`apply_batch`]) for the
//!    updates it receives.
//!
//! Concluding an entity without an active animation does nothing, so the
//! batch can be issued any number of times.

use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, AnimationResult};
use crate::movement::{DisplacementRequest, Point};

/// Options attached to an entity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOptions {
    /// Whether the host should diff the update against the current state.
    pub diff: bool,
    /// Forced-conclusion mark. `None` means the update was never marked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclude_animations: Option<bool>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            diff: true,
            conclude_animations: None,
        }
    }
}

impl UpdateOptions {
    /// Options of a bulk conclude update.
    #[must_use]
    pub const fn conclude() -> Self {
        Self {
            diff: false,
            conclude_animations: Some(true),
        }
    }

    /// Returns `true` if the update must conclude animations.
    #[must_use]
    pub const fn concludes(&self) -> bool { matches!(self.conclude_animations, Some(true)) }

    /// Returns `true` if someone already set the conclusion mark.
    #[must_use]
    pub const fn is_marked(&self) -> bool { self.conclude_animations.is_some() }
}

/// One entity update of a conclude batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Identifier of the entity to update.
    #[serde(rename = "_id")]
    pub id: String,
}

/// Updates to dispatch so that every in-flight animation concludes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcludeBatch {
    /// One update per entity with an active animation.
    pub updates: Vec<UpdateRequest>,
    /// Options shared by every update.
    pub options: UpdateOptions,
}

impl ConcludeBatch {
    /// Returns `true` if there is nothing to conclude.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.updates.is_empty() }

    /// Returns the number of updates in the batch.
    #[must_use]
    pub fn len(&self) -> usize { self.updates.len() }
}

/// An entity whose movement can be animated by the host.
pub trait AnimatedEntity {
    /// Returns the entity identifier.
    fn id(&self) -> &str;

    /// Returns the movement currently being animated, if any.
    fn active_movement(&self) -> Option<&DisplacementRequest>;

    /// Removes and returns the movement currently being animated.
    fn take_movement(&mut self) -> Option<DisplacementRequest>;

    /// Stops the running animation without moving the entity.
    fn stop_animation(&mut self);

    /// Places the entity at `position` without interpolation.
    fn set_position(&mut self, position: Point);

    /// Recomputes state that depends on the entity position.
    fn refresh_derived_state(&mut self);
}

/// Builds the conclude batch for every entity with an active animation.
pub fn conclude_requests<'a, E, I>(entities: I) -> ConcludeBatch
where
    E: AnimatedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let updates: Vec<UpdateRequest> = entities
        .into_iter()
        .filter(|entity| entity.active_movement().is_some())
        .map(|entity| UpdateRequest { id: entity.id().to_string() })
        .collect();

    tracing::debug!(count = updates.len(), "concluding active animations");

    ConcludeBatch {
        updates,
        options: UpdateOptions::conclude(),
    }
}

/// Concludes the animation of `entity` if `options` asks for it.
///
/// Returns the destination the entity was snapped to, or `None` when there
/// was nothing to do.
pub fn conclude_in_place<E: AnimatedEntity + ?Sized>(
    entity: &mut E,
    options: &UpdateOptions,
) -> Option<Point> {
    if !options.concludes() {
        return None;
    }

    let movement = entity.take_movement()?;
    entity.stop_animation();
    entity.set_position(movement.destination);
    entity.refresh_derived_state();

    tracing::debug!(
        id = entity.id(),
        x = movement.destination.x,
        y = movement.destination.y,
        "animation concluded in place"
    );
    Some(movement.destination)
}

/// Applies a conclude batch to `entities`.
///
/// Returns how many entities were actually snapped.
///
/// # Errors
///
/// Returns `AnimationError::EntityNotFound` for the first update whose
/// entity is not in `entities`. Updates before it have already been applied.
pub fn apply_batch<E: AnimatedEntity>(
    entities: &mut [E],
    batch: &ConcludeBatch,
) -> AnimationResult<usize> {
    let mut concluded = 0;

    for update in &batch.updates {
        let entity = entities
            .iter_mut()
            .find(|entity| entity.id() == update.id)
            .ok_or_else(|| AnimationError::entity_not_found(&update.id))?;

        if conclude_in_place(entity, &batch.options).is_some() {
            concluded += 1;
        }
    }

    Ok(concluded)
}

/// Plain token state for hosts without their own entity model.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenState {
    /// Token identifier.
    pub id: String,
    /// Current position.
    pub position: Point,
    /// Movement being animated, if any.
    pub movement: Option<DisplacementRequest>,
    /// Whether an animation is running.
    pub animating: bool,
    /// Incremented every time position-derived state is refreshed.
    pub vision_revision: u64,
}

impl TokenState {
    /// Creates an idle token at `position`.
    #[must_use]
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
            movement: None,
            animating: false,
            vision_revision: 0,
        }
    }

    /// Starts animating towards the destination of `movement`.
    pub fn start_movement(&mut self, movement: DisplacementRequest) {
        self.movement = Some(movement);
        self.animating = true;
    }
}

impl AnimatedEntity for TokenState {
    fn id(&self) -> &str { &self.id }

    fn active_movement(&self) -> Option<&DisplacementRequest> { self.movement.as_ref() }

    fn take_movement(&mut self) -> Option<DisplacementRequest> { self.movement.take() }

    fn stop_animation(&mut self) { self.animating = false; }

    fn set_position(&mut self, position: Point) { self.position = position; }

    fn refresh_derived_state(&mut self) { self.vision_revision += 1; }
}
