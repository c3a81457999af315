//! Global events used for cross-system communication.
//!
//! The controller never calls into the HUD or the world directly. It sends
//! interaction notifications and listens for the movement broadcast.

use bevy::prelude::*;

/// Broadcast that enables or disables player movement.
///
/// Sent as a global trigger (`commands.trigger(SetPlayerCanMove(false))`).
/// The player subscribes on attach through a child observer entity, so the
/// subscription dies with the player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPlayerCanMove(pub bool);

/// Sent when an active interactable enters the crosshair.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionFound {
    /// The interactable now under the crosshair
    pub target: Entity,
}

/// Sent when the crosshair stops pointing at an active interactable.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionLost;

/// Targeted trigger fired on an interactable when the player uses it.
///
/// Interactables react by attaching an observer:
/// `commands.spawn(..).observe(on_lever_used)`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerInteraction;
