//! First-person player controller for Bevy.
//!
//! Camera-relative locomotion, mouse-look, and a raycast interaction
//! trigger with edge-triggered "found"/"lost" notifications, plus a small
//! demo room to walk around in.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, config loading, cursor capture
//! - **Input**: Named action bindings
//! - **Player**: Locomotion, mouse-look, interaction ray, viewmodel
//! - **World**: Demo room and interactable props
//! - **UI**: Crosshair, interaction prompt, pause overlay with settings
//!
//! Physics runs in the fixed schedule; the controller's per-tick work is in
//! `FixedUpdate`, ordered by [`player::PlayerSet`].

pub mod core;
pub mod input;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct FirstPersonPlugin;

impl Plugin for FirstPersonPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player controller
            .add_plugins(player::PlayerPlugin)

            // Demo world
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
