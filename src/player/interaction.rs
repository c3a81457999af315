//! Interaction ray: crosshair targeting and the interact action.
//!
//! Each physics tick the ray is sampled and compared with the previous
//! tick's result. Notifications are edge-triggered: `InteractionFound` on a
//! false→true change, `InteractionLost` on true→false, nothing otherwise.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::{InteractionFound, InteractionLost, TriggerInteraction};
use crate::input::ActionBindings;

/// Capability of entities the player can use.
///
/// The reaction to being used lives in an observer for `TriggerInteraction`
/// attached to the same entity.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    /// Inactive interactables are ignored by the crosshair and the interact key
    pub active: bool,
    /// Text shown on the HUD while targeted
    pub prompt: String,
}

impl Interactable {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            active: true,
            prompt: prompt.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Crosshair ray mounted on the camera pivot.
#[derive(Component, Debug, Clone)]
pub struct InteractionRay {
    pub reach: f32,
    /// Collider under the crosshair at the last sample
    pub hit: Option<Entity>,
}

impl InteractionRay {
    pub fn new(reach: f32) -> Self {
        Self { reach, hit: None }
    }
}

/// Result of a ray sample after the capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayHit {
    None,
    /// Collider that carries `Interactable`
    Hit(Entity),
}

impl RayHit {
    pub fn resolve(collider: Option<Entity>, interactables: &Query<&Interactable>) -> Self {
        match collider {
            Some(entity) if interactables.contains(entity) => RayHit::Hit(entity),
            _ => RayHit::None,
        }
    }

    /// The hit entity, if it is an interactable that is currently active.
    pub fn active_target(&self, interactables: &Query<&Interactable>) -> Option<Entity> {
        match *self {
            RayHit::Hit(entity) => interactables
                .get(entity)
                .ok()
                .filter(|i| i.is_active())
                .map(|_| entity),
            RayHit::None => None,
        }
    }
}

/// Transition reported by the edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChange {
    Found,
    Lost,
}

/// Two-state edge detector: was an active interactable targeted last tick.
#[derive(Component, Debug, Default)]
pub struct InteractionEdge {
    was_interactable: bool,
}

impl InteractionEdge {
    /// Record this tick's state and report a transition, if any.
    pub fn update(&mut self, interactable_now: bool) -> Option<EdgeChange> {
        let change = match (self.was_interactable, interactable_now) {
            (false, true) => Some(EdgeChange::Found),
            (true, false) => Some(EdgeChange::Lost),
            _ => None,
        };
        self.was_interactable = interactable_now;
        change
    }

    pub fn was_interactable(&self) -> bool {
        self.was_interactable
    }
}

/// Cast the interaction ray from the pivot along its forward axis.
fn cast_interaction_ray(
    context: &RapierContext,
    origin: &GlobalTransform,
    reach: f32,
    player: Entity,
) -> Option<Entity> {
    context
        .cast_ray(
            origin.translation(),
            origin.forward().as_vec3(),
            reach,
            true,
            QueryFilter::default().exclude_collider(player).exclude_sensors(),
        )
        .map(|(entity, _toi)| entity)
}

/// Sample the interaction ray for this physics tick.
pub fn sample_interaction_ray(
    rapier_context: Query<&RapierContext>,
    player_query: Query<Entity, With<Player>>,
    mut ray_query: Query<(&GlobalTransform, &mut InteractionRay)>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (origin, mut ray) in ray_query.iter_mut() {
        let reach = ray.reach;
        ray.hit = cast_interaction_ray(context, origin, reach, player);
    }
}

/// Compare the sampled hit with the previous tick and notify on change.
pub fn detect_interaction_edges(
    interactables: Query<&Interactable>,
    ray_query: Query<&InteractionRay>,
    mut player_query: Query<&mut InteractionEdge, With<Player>>,
    mut found_events: EventWriter<InteractionFound>,
    mut lost_events: EventWriter<InteractionLost>,
) {
    let Ok(mut edge) = player_query.get_single_mut() else {
        return;
    };
    let Ok(ray) = ray_query.get_single() else {
        return;
    };

    let target = RayHit::resolve(ray.hit, &interactables).active_target(&interactables);

    match edge.update(target.is_some()) {
        Some(EdgeChange::Found) => {
            if let Some(target) = target {
                debug!("Interaction found: {:?}", target);
                found_events.send(InteractionFound { target });
            }
        }
        Some(EdgeChange::Lost) => {
            debug!("Interaction lost");
            lost_events.send(InteractionLost);
        }
        None => {}
    }
}

/// Use the targeted interactable when the interact action is pressed.
///
/// The ray is re-cast here instead of trusting the last physics tick, so the
/// player uses whatever is under the crosshair on this frame. The result is
/// local to the press; the edge detector keeps working from its own samples.
pub fn handle_interact_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<ActionBindings>,
    rapier_context: Query<&RapierContext>,
    player_query: Query<Entity, With<Player>>,
    ray_query: Query<(&GlobalTransform, &InteractionRay)>,
    interactables: Query<&Interactable>,
) {
    if !bindings.interact_pressed(&keyboard) {
        return;
    }
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok((origin, ray)) = ray_query.get_single() else {
        return;
    };

    // Without a physics context the last tick's sample is all there is
    let hit = match rapier_context.get_single() {
        Ok(context) => cast_interaction_ray(context, origin, ray.reach, player),
        Err(_) => ray.hit,
    };

    if let Some(target) = RayHit::resolve(hit, &interactables).active_target(&interactables) {
        info!("Interacting with {:?}", target);
        commands.trigger_targets(TriggerInteraction, target);
    }
}
