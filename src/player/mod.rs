//! Player module - first-person controller: locomotion, camera and interaction.

mod animation;
mod components;
mod interaction;
mod locomotion;
mod look;
mod plugin;
mod spawn;

pub use animation::{bob_offset, MuzzleFlash, Viewmodel};
pub use components::*;
pub use interaction::{EdgeChange, Interactable, InteractionEdge, InteractionRay, RayHit};
pub use locomotion::{world_intent, WorldIntent};
pub use plugin::{player_can_move, PlayerPlugin, PlayerSet};
pub use spawn::{movement_subscription, spawn_player};
